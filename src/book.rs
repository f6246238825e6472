use std::{fmt, str::FromStr};

use mongodb::bson::oid::{self, ObjectId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identifier of a [`Book`], assigned by the storage layer on creation.
///
/// Wraps the native [`ObjectId`] and (de)serializes as its 24 character hex form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookId(ObjectId);

impl BookId {
    /// Generates a fresh identifier. Only storage backends should call this.
    pub(crate) fn generate() -> Self {
        BookId(ObjectId::new())
    }

    pub fn object_id(&self) -> ObjectId {
        self.0
    }
}

impl From<ObjectId> for BookId {
    fn from(id: ObjectId) -> Self {
        BookId(id)
    }
}

impl FromStr for BookId {
    type Err = oid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s).map(BookId)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

impl Serialize for BookId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_hex())
    }
}

impl<'de> Deserialize<'de> for BookId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;

        hex.parse().map_err(serde::de::Error::custom)
    }
}

/// Reads a string field that may be `null`, as documents written without a title or
/// description carry them. `null` becomes the empty string.
fn null_as_empty<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A book as it is exposed over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Book {
    #[schema(value_type = String, example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub id: BookId,
    pub title: String,
    pub description: String,
}

impl Book {
    pub fn from_payload(id: BookId, payload: BookPayload) -> Self {
        Book {
            id,
            title: payload.title,
            description: payload.description,
        }
    }
}

/// The client supplied fields of a book.
///
/// Carries no identifier. An `Id` sent by a client is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct BookPayload {
    #[serde(default, alias = "title", deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, alias = "description", deserialize_with = "null_as_empty")]
    pub description: String,
}

/// A book as it is persisted in the `Books` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(rename = "Title", default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(rename = "Description", default, deserialize_with = "null_as_empty")]
    pub description: String,
}

impl From<Book> for BookDocument {
    fn from(book: Book) -> Self {
        BookDocument {
            id: book.id.object_id(),
            title: book.title,
            description: book.description,
        }
    }
}

impl From<BookDocument> for Book {
    fn from(document: BookDocument) -> Self {
        Book {
            id: BookId(document.id),
            title: document.title,
            description: document.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson::{self, doc, Bson};

    use super::*;

    #[test]
    fn book_id_round_trips_through_its_hex_form() {
        let hex = "65a1f0c2e4b0a1b2c3d4e5f6";
        let id: BookId = hex.parse().expect("valid object id");

        assert_eq!(id.to_string(), hex);
    }

    #[test]
    fn malformed_book_ids_are_rejected() {
        for bad in ["", "abc", "65a1f0c2e4b0a1b2c3d4e5f", "zza1f0c2e4b0a1b2c3d4e5f6", "65a1f0c2e4b0a1b2c3d4e5f6ff"] {
            assert!(bad.parse::<BookId>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn book_serializes_with_pascal_case_fields_and_hex_id() {
        let id: BookId = "65a1f0c2e4b0a1b2c3d4e5f6".parse().unwrap();
        let book = Book {
            id,
            title: "Dune".to_string(),
            description: "Sci-fi".to_string(),
        };

        let json = serde_json::to_value(&book).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "Id": "65a1f0c2e4b0a1b2c3d4e5f6",
                "Title": "Dune",
                "Description": "Sci-fi",
            })
        );

        let back: Book = serde_json::from_value(json).unwrap();
        assert_eq!(back, book);
    }

    #[test]
    fn payload_accepts_lowercase_fields_and_ignores_ids() {
        let payload: BookPayload = serde_json::from_str(
            r#"{"title":"Dune","description":"Sci-fi","Id":"65a1f0c2e4b0a1b2c3d4e5f6"}"#,
        )
        .unwrap();

        assert_eq!(payload.title, "Dune");
        assert_eq!(payload.description, "Sci-fi");
    }

    #[test]
    fn payload_fields_default_to_empty() {
        let payload: BookPayload = serde_json::from_str("{}").unwrap();

        assert_eq!(payload, BookPayload::default());
    }

    #[test]
    fn document_uses_the_collection_field_names() {
        let book = Book {
            id: BookId::generate(),
            title: "Dune".to_string(),
            description: "Sci-fi".to_string(),
        };

        let document = bson::to_document(&BookDocument::from(book.clone())).unwrap();

        assert_eq!(
            document,
            doc! {
                "_id": book.id.object_id(),
                "Title": "Dune",
                "Description": "Sci-fi",
            }
        );

        let back: BookDocument = bson::from_document(document).unwrap();
        assert_eq!(Book::from(back), book);
    }

    #[test]
    fn documents_with_null_fields_read_as_empty_strings() {
        let id = ObjectId::new();

        let document: BookDocument = bson::from_document(doc! {
            "_id": id,
            "Title": Bson::Null,
            "Description": "x",
        })
        .expect("null title is readable");

        assert_eq!(document.title, "");
        assert_eq!(document.description, "x");

        let document: BookDocument = bson::from_document(doc! { "_id": id }).unwrap();
        assert_eq!(Book::from(document).title, "");
    }

    #[test]
    fn payload_null_fields_read_as_empty_strings() {
        let payload: BookPayload =
            serde_json::from_str(r#"{"Title":null,"description":null}"#).unwrap();

        assert_eq!(payload, BookPayload::default());
    }
}
