//! Structured logging decorator.
//!
//! Emits one `tracing` event per call carrying the operation name, every
//! argument, the time spent in the inner service and the error, if any.

use std::time::Instant;

use async_trait::async_trait;
use tracing::field::{DisplayValue, display};
use tracing::info;

use crate::domain::{Book, Chapter, HandlingService, ServiceError};

/// Logging layer over an inner [`HandlingService`].
#[derive(Debug, Clone)]
pub struct LoggingService<S> {
    inner: S,
}

impl<S> LoggingService<S> {
    /// Wrap `inner`.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

fn err_field<T>(result: &Result<T, ServiceError>) -> Option<DisplayValue<&ServiceError>> {
    result.as_ref().err().map(display)
}

#[async_trait]
impl<S> HandlingService for LoggingService<S>
where
    S: HandlingService,
{
    async fn add_book(&self, name: &str, description: &str) -> Result<Book, ServiceError> {
        let begin = Instant::now();
        let result = self.inner.add_book(name, description).await;
        info!(
            method = "add_book",
            name = %name,
            description = %description,
            took = ?begin.elapsed(),
            err = err_field(&result),
            "handled"
        );
        result
    }

    async fn get_book(&self, id: &str) -> Result<Book, ServiceError> {
        let begin = Instant::now();
        let result = self.inner.get_book(id).await;
        info!(
            method = "get_book",
            id = %id,
            took = ?begin.elapsed(),
            err = err_field(&result),
            "handled"
        );
        result
    }

    async fn delete_book(&self, id: &str) -> Result<Book, ServiceError> {
        let begin = Instant::now();
        let result = self.inner.delete_book(id).await;
        info!(
            method = "delete_book",
            id = %id,
            took = ?begin.elapsed(),
            err = err_field(&result),
            "handled"
        );
        result
    }

    async fn list_books(&self) -> Result<Vec<Book>, ServiceError> {
        let begin = Instant::now();
        let result = self.inner.list_books().await;
        info!(
            method = "list_books",
            took = ?begin.elapsed(),
            err = err_field(&result),
            "handled"
        );
        result
    }

    async fn add_chapter(
        &self,
        name: &str,
        description: &str,
        book_id: &str,
    ) -> Result<Chapter, ServiceError> {
        let begin = Instant::now();
        let result = self.inner.add_chapter(name, description, book_id).await;
        info!(
            method = "add_chapter",
            name = %name,
            description = %description,
            book_id = %book_id,
            took = ?begin.elapsed(),
            err = err_field(&result),
            "handled"
        );
        result
    }

    async fn get_chapter(&self, id: &str) -> Result<Chapter, ServiceError> {
        let begin = Instant::now();
        let result = self.inner.get_chapter(id).await;
        info!(
            method = "get_chapter",
            id = %id,
            took = ?begin.elapsed(),
            err = err_field(&result),
            "handled"
        );
        result
    }

    async fn delete_chapter(&self, id: &str) -> Result<Chapter, ServiceError> {
        let begin = Instant::now();
        let result = self.inner.delete_chapter(id).await;
        info!(
            method = "delete_chapter",
            id = %id,
            took = ?begin.elapsed(),
            err = err_field(&result),
            "handled"
        );
        result
    }

    async fn list_chapters(&self, book_id: &str) -> Result<Vec<Chapter>, ServiceError> {
        let begin = Instant::now();
        let result = self.inner.list_chapters(book_id).await;
        info!(
            method = "list_chapters",
            book_id = %book_id,
            took = ?begin.elapsed(),
            err = err_field(&result),
            "handled"
        );
        result
    }
}
