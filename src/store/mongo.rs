use anyhow::Context;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Bson, Document},
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};

use crate::book::{Book, BookDocument, BookId, BookPayload};

use super::{BookStore, StoreError};

pub struct MongoBookStoreConfig {
    uri: String,
    database_name: String,
    collection_name: String,
}

impl MongoBookStoreConfig {
    pub fn new(uri: String, database_name: String, collection_name: String) -> Self {
        Self {
            uri,
            database_name,
            collection_name,
        }
    }
}

/// [`BookStore`] backed by a MongoDB collection.
///
/// Cloning is cheap, the underlying [`Client`] is a pooled handle.
#[derive(Clone)]
pub struct MongoBookStore {
    client: Client,
    collection: Collection<BookDocument>,
}

impl MongoBookStore {
    /// Builds a client from the connection string with the stable API pinned to V1.
    ///
    /// No connection is made until the first operation.
    pub async fn connect(config: MongoBookStoreConfig) -> anyhow::Result<Self> {
        let mut options = ClientOptions::parse(&config.uri)
            .await
            .context("Failed to parse MongoDB connection string")?;

        options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());

        let client = Client::with_options(options).context("Failed to create MongoDB client")?;

        tracing::info!(
            database = %config.database_name,
            collection = %config.collection_name,
            "MongoDB client created"
        );

        Ok(Self::from_client(
            &client,
            &config.database_name,
            &config.collection_name,
        ))
    }

    pub fn from_client(client: &Client, database_name: &str, collection_name: &str) -> Self {
        let collection = client
            .database(database_name)
            .collection::<BookDocument>(collection_name);

        Self {
            client: client.clone(),
            collection,
        }
    }

    /// Sends a `ping` to the server.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await?;

        Ok(())
    }

    fn by_id(id: BookId) -> Document {
        doc! { "_id": id.object_id() }
    }
}

#[async_trait]
impl BookStore for MongoBookStore {
    #[tracing::instrument(name = "mongo_list", skip_all)]
    async fn list(&self) -> Result<Vec<Book>, StoreError> {
        let documents: Vec<BookDocument> = self
            .collection
            .find(doc! {}, None)
            .await?
            .try_collect()
            .await?;

        tracing::trace!(count = documents.len(), "Found");

        Ok(documents.into_iter().map(Book::from).collect())
    }

    #[tracing::instrument(name = "mongo_find", skip(self))]
    async fn find(&self, id: BookId) -> Result<Option<Book>, StoreError> {
        let document = self.collection.find_one(Self::by_id(id), None).await?;

        Ok(document.map(Book::from))
    }

    #[tracing::instrument(name = "mongo_insert", skip_all)]
    async fn insert(&self, payload: BookPayload) -> Result<BookId, StoreError> {
        // No `_id` in the document, the driver assigns it.
        let document = doc! {
            "Title": payload.title,
            "Description": payload.description,
        };

        let result = self
            .collection
            .clone_with_type::<Document>()
            .insert_one(document, None)
            .await?;

        match result.inserted_id {
            Bson::ObjectId(id) => {
                tracing::trace!(%id, "Inserted");

                Ok(BookId::from(id))
            }
            other => Err(StoreError::UnexpectedInsertedId(other.to_string())),
        }
    }

    #[tracing::instrument(name = "mongo_replace", skip_all, fields(id = %book.id))]
    async fn replace(&self, book: Book) -> Result<bool, StoreError> {
        let filter = Self::by_id(book.id);
        let document = BookDocument::from(book);

        let result = self.collection.replace_one(filter, document, None).await?;

        Ok(result.matched_count > 0)
    }

    #[tracing::instrument(name = "mongo_delete", skip(self))]
    async fn delete(&self, id: BookId) -> Result<bool, StoreError> {
        let result = self.collection.delete_one(Self::by_id(id), None).await?;

        Ok(result.deleted_count > 0)
    }
}
