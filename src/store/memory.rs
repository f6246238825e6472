use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::book::{Book, BookId, BookPayload};

use super::{BookStore, StoreError};

/// [`BookStore`] keeping books in process memory.
///
/// Assigns ids the same way the database does, so handlers behave identically on top of it.
#[derive(Default)]
pub struct InMemoryBookStore {
    books: RwLock<BTreeMap<BookId, Book>>,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }
}

#[async_trait]
impl BookStore for InMemoryBookStore {
    async fn list(&self) -> Result<Vec<Book>, StoreError> {
        Ok(self.books.read().await.values().cloned().collect())
    }

    async fn find(&self, id: BookId) -> Result<Option<Book>, StoreError> {
        Ok(self.books.read().await.get(&id).cloned())
    }

    async fn insert(&self, payload: BookPayload) -> Result<BookId, StoreError> {
        let id = BookId::generate();

        self.books
            .write()
            .await
            .insert(id, Book::from_payload(id, payload));

        Ok(id)
    }

    async fn replace(&self, book: Book) -> Result<bool, StoreError> {
        let mut books = self.books.write().await;

        match books.get_mut(&book.id) {
            Some(stored) => {
                *stored = book;

                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: BookId) -> Result<bool, StoreError> {
        Ok(self.books.write().await.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: &str) -> BookPayload {
        BookPayload {
            title: title.to_string(),
            description: "Sci-fi".to_string(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_distinct_ids() {
        let store = InMemoryBookStore::new();

        let first = store.insert(payload("Dune")).await.unwrap();
        let second = store.insert(payload("Dune")).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn replace_and_delete_report_missing_books() {
        let store = InMemoryBookStore::new();
        let missing = Book::from_payload(BookId::generate(), payload("Dune"));

        assert!(!store.replace(missing.clone()).await.unwrap());
        assert!(!store.delete(missing.id).await.unwrap());
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn replace_overwrites_the_stored_fields() {
        let store = InMemoryBookStore::new();
        let id = store.insert(payload("Dune")).await.unwrap();

        let replaced = store
            .replace(Book::from_payload(id, payload("Dune Messiah")))
            .await
            .unwrap();

        assert!(replaced);

        let book = store.find(id).await.unwrap().expect("book exists");
        assert_eq!(book.id, id);
        assert_eq!(book.title, "Dune Messiah");
    }
}
