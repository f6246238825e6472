use async_trait::async_trait;

use crate::book::{Book, BookId, BookPayload};

pub mod memory;
pub mod mongo;

pub use memory::InMemoryBookStore;
pub use mongo::{MongoBookStore, MongoBookStoreConfig};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database failure: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Inserted document has no object id: {0}")]
    UnexpectedInsertedId(String),
}

/// Access to the books collection.
///
/// Every method is a single roundtrip to the storage backend.
/// Implementations are shared between all concurrent requests and must not hold request state.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Returns every stored book.
    async fn list(&self) -> Result<Vec<Book>, StoreError>;

    /// Returns the book with the given id, if any.
    async fn find(&self, id: BookId) -> Result<Option<Book>, StoreError>;

    /// Persists a new book and returns the id the storage assigned to it.
    async fn insert(&self, payload: BookPayload) -> Result<BookId, StoreError>;

    /// Replaces the stored book having `book.id`.
    ///
    /// Returns `false` if no book with that id exists.
    async fn replace(&self, book: Book) -> Result<bool, StoreError>;

    /// Deletes the book with the given id.
    ///
    /// Returns `false` if no book with that id exists.
    async fn delete(&self, id: BookId) -> Result<bool, StoreError>;
}
