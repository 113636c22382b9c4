//! Metrics decorator counting calls and observing latency per operation.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::warn;

use crate::domain::ports::ServiceMetrics;
use crate::domain::{Book, Chapter, HandlingService, ServiceError};

/// Instrumenting layer over an inner [`HandlingService`].
///
/// Latency covers the inner call only; recording happens after the clock
/// stops.
pub struct InstrumentingService<S, M: ?Sized> {
    metrics: Arc<M>,
    inner: S,
}

impl<S, M: ?Sized> InstrumentingService<S, M> {
    /// Wrap `inner`, reporting to `metrics`.
    pub fn new(metrics: Arc<M>, inner: S) -> Self {
        Self { metrics, inner }
    }
}

impl<S, M> InstrumentingService<S, M>
where
    M: ServiceMetrics + ?Sized,
{
    async fn observe(&self, method: &'static str, latency: Duration) {
        if let Err(error) = self.metrics.record_request(method, latency).await {
            warn!(%error, method, "failed to record service metrics");
        }
    }
}

#[async_trait]
impl<S, M> HandlingService for InstrumentingService<S, M>
where
    S: HandlingService,
    M: ServiceMetrics + ?Sized,
{
    async fn add_book(&self, name: &str, description: &str) -> Result<Book, ServiceError> {
        let begin = Instant::now();
        let result = self.inner.add_book(name, description).await;
        self.observe("add_book", begin.elapsed()).await;
        result
    }

    async fn get_book(&self, id: &str) -> Result<Book, ServiceError> {
        let begin = Instant::now();
        let result = self.inner.get_book(id).await;
        self.observe("get_book", begin.elapsed()).await;
        result
    }

    async fn delete_book(&self, id: &str) -> Result<Book, ServiceError> {
        let begin = Instant::now();
        let result = self.inner.delete_book(id).await;
        self.observe("delete_book", begin.elapsed()).await;
        result
    }

    async fn list_books(&self) -> Result<Vec<Book>, ServiceError> {
        let begin = Instant::now();
        let result = self.inner.list_books().await;
        self.observe("list_books", begin.elapsed()).await;
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
        self.observe("add_chapter", begin.elapsed()).await;
        result
    }

    async fn get_chapter(&self, id: &str) -> Result<Chapter, ServiceError> {
        let begin = Instant::now();
        let result = self.inner.get_chapter(id).await;
        self.observe("get_chapter", begin.elapsed()).await;
        result
    }

    async fn delete_chapter(&self, id: &str) -> Result<Chapter, ServiceError> {
        let begin = Instant::now();
        let result = self.inner.delete_chapter(id).await;
        self.observe("delete_chapter", begin.elapsed()).await;
        result
    }

    async fn list_chapters(&self, book_id: &str) -> Result<Vec<Chapter>, ServiceError> {
        let begin = Instant::now();
        let result = self.inner.list_chapters(book_id).await;
        self.observe("list_chapters", begin.elapsed()).await;
        result
    }
}
