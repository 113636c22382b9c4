//! Handling service: the eight book and chapter operations.
//!
//! [`HandlingService`] is the single contract shared by the core
//! implementation and every decorator in [`crate::domain::decorators`], so
//! any layer can stand in for any other.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::EntityStore;
use crate::domain::{Book, Chapter, NewBook, NewChapter, ServiceError};

/// Book and chapter operations exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HandlingService: Send + Sync {
    /// Create a book.
    async fn add_book(&self, name: &str, description: &str) -> Result<Book, ServiceError>;

    /// Fetch a book by identifier.
    async fn get_book(&self, id: &str) -> Result<Book, ServiceError>;

    /// Delete a book, returning its last known value.
    async fn delete_book(&self, id: &str) -> Result<Book, ServiceError>;

    /// List all books.
    async fn list_books(&self) -> Result<Vec<Book>, ServiceError>;

    /// Create a chapter linked to `book_id`.
    async fn add_chapter(
        &self,
        name: &str,
        description: &str,
        book_id: &str,
    ) -> Result<Chapter, ServiceError>;

    /// Fetch a chapter by identifier.
    async fn get_chapter(&self, id: &str) -> Result<Chapter, ServiceError>;

    /// Delete a chapter, returning its last known value.
    async fn delete_chapter(&self, id: &str) -> Result<Chapter, ServiceError>;

    /// List the chapters owned by `book_id`.
    async fn list_chapters(&self, book_id: &str) -> Result<Vec<Chapter>, ServiceError>;
}

fn require_non_empty(values: &[&str]) -> Result<(), ServiceError> {
    if values.iter().any(|value| value.is_empty()) {
        return Err(ServiceError::InvalidArgument);
    }
    Ok(())
}

/// Base service applying input validation before a single store call.
///
/// Holds no state besides the shared store handle.
pub struct CoreHandlingService<S: ?Sized> {
    store: Arc<S>,
}

impl<S: ?Sized> CoreHandlingService<S> {
    /// Create the service over an already constructed store handle.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S: ?Sized> Clone for CoreHandlingService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

#[async_trait]
impl<S> HandlingService for CoreHandlingService<S>
where
    S: EntityStore + ?Sized,
{
    async fn add_book(&self, name: &str, description: &str) -> Result<Book, ServiceError> {
        require_non_empty(&[name, description])?;
        let book = self
            .store
            .create_book(NewBook {
                name: name.to_owned(),
                description: description.to_owned(),
            })
            .await?;
        Ok(book)
    }

    async fn get_book(&self, id: &str) -> Result<Book, ServiceError> {
        require_non_empty(&[id])?;
        Ok(self.store.book(id).await?)
    }

    async fn delete_book(&self, id: &str) -> Result<Book, ServiceError> {
        require_non_empty(&[id])?;
        Ok(self.store.delete_book(id).await?)
    }

    async fn list_books(&self) -> Result<Vec<Book>, ServiceError> {
        Ok(self.store.books().await?)
    }

    async fn add_chapter(
        &self,
        name: &str,
        description: &str,
        book_id: &str,
    ) -> Result<Chapter, ServiceError> {
        require_non_empty(&[name, description, book_id])?;
        let chapter = self
            .store
            .create_chapter(NewChapter {
                name: name.to_owned(),
                description: description.to_owned(),
                book_id: book_id.to_owned(),
            })
            .await?;
        Ok(chapter)
    }

    async fn get_chapter(&self, id: &str) -> Result<Chapter, ServiceError> {
        require_non_empty(&[id])?;
        Ok(self.store.chapter(id).await?)
    }

    async fn delete_chapter(&self, id: &str) -> Result<Chapter, ServiceError> {
        require_non_empty(&[id])?;
        Ok(self.store.delete_chapter(id).await?)
    }

    async fn list_chapters(&self, book_id: &str) -> Result<Vec<Chapter>, ServiceError> {
        require_non_empty(&[book_id])?;
        Ok(self.store.book_chapters(book_id).await?)
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
