//! Port for the persistence backend holding books and chapters.

use async_trait::async_trait;

use crate::domain::{Book, Chapter, NewBook, NewChapter};

use super::define_port_error;

define_port_error! {
    /// Errors raised by entity store adapters.
    ///
    /// The service layer treats every variant as an opaque store failure; the
    /// distinction only helps operators reading logs.
    pub enum EntityStoreError {
        /// No record matched the requested identifier.
        NotFound => "entity not found",
        /// A relation or uniqueness rule rejected the write.
        Constraint => "entity store constraint violated",
        /// The backend could not be reached.
        Connection => "entity store connection failed",
        /// Query or mutation failed during execution.
        Query => "entity store query failed",
    }
}

/// Create/read/delete/list operations for books and chapters.
///
/// Implementations own their concurrency control; callers share a single
/// handle across requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Persist a new book and return it with its assigned identifier.
    async fn create_book(&self, input: NewBook) -> Result<Book, EntityStoreError>;

    /// Fetch a book by identifier.
    async fn book(&self, id: &str) -> Result<Book, EntityStoreError>;

    /// Remove a book and return its last stored value.
    async fn delete_book(&self, id: &str) -> Result<Book, EntityStoreError>;

    /// List every book in the store's default order.
    async fn books(&self) -> Result<Vec<Book>, EntityStoreError>;

    /// Persist a new chapter connected to `input.book_id`.
    async fn create_chapter(&self, input: NewChapter) -> Result<Chapter, EntityStoreError>;

    /// Fetch a chapter by identifier.
    async fn chapter(&self, id: &str) -> Result<Chapter, EntityStoreError>;

    /// Remove a chapter and return its last stored value.
    async fn delete_chapter(&self, id: &str) -> Result<Chapter, EntityStoreError>;

    /// List the chapters owned by a book.
    async fn book_chapters(&self, book_id: &str) -> Result<Vec<Chapter>, EntityStoreError>;
}
