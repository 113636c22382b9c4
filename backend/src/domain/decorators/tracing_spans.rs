//! Tracing decorator opening one span per operation.
//!
//! Spans are children of whatever span is current when the call starts (the
//! request span set up by the HTTP middleware in production), and close when
//! the inner future finishes or is dropped.

use async_trait::async_trait;
use tracing::{Instrument, info_span};

use crate::domain::{Book, Chapter, HandlingService, ServiceError};

/// Tracing layer over an inner [`HandlingService`].
#[derive(Debug, Clone)]
pub struct TracingService<S> {
    inner: S,
}

impl<S> TracingService<S> {
    /// Wrap `inner`.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<S> HandlingService for TracingService<S>
where
    S: HandlingService,
{
    async fn add_book(&self, name: &str, description: &str) -> Result<Book, ServiceError> {
        self.inner
            .add_book(name, description)
            .instrument(info_span!("AddBook"))
            .await
    }

    async fn get_book(&self, id: &str) -> Result<Book, ServiceError> {
        self.inner
            .get_book(id)
            .instrument(info_span!("GetBook"))
            .await
    }

    async fn delete_book(&self, id: &str) -> Result<Book, ServiceError> {
        self.inner
            .delete_book(id)
            .instrument(info_span!("DeleteBook"))
            .await
    }

    async fn list_books(&self) -> Result<Vec<Book>, ServiceError> {
        self.inner
            .list_books()
            .instrument(info_span!("Books"))
            .await
    }

    async fn add_chapter(
        &self,
        name: &str,
        description: &str,
        book_id: &str,
    ) -> Result<Chapter, ServiceError> {
        self.inner
            .add_chapter(name, description, book_id)
            .instrument(info_span!("AddChapter"))
            .await
    }

    async fn get_chapter(&self, id: &str) -> Result<Chapter, ServiceError> {
        self.inner
            .get_chapter(id)
            .instrument(info_span!("GetChapter"))
            .await
    }

    async fn delete_chapter(&self, id: &str) -> Result<Chapter, ServiceError> {
        self.inner
            .delete_chapter(id)
            .instrument(info_span!("DeleteChapter"))
            .await
    }

    async fn list_chapters(&self, book_id: &str) -> Result<Vec<Chapter>, ServiceError> {
        self.inner
            .list_chapters(book_id)
            .instrument(info_span!("Chapters"))
            .await
    }
}

#[cfg(test)]
mod tests {
    //! Span naming, parenting and lifetime.

    use rstest::rstest;
    use tracing::Instrument;

    use super::*;
    use crate::domain::decorators::LoggingService;
    use crate::domain::decorators::test_support::{
        Call, EventCapture, RecordingHandlingService, invoke,
    };

    #[rstest]
    #[case::add_book(Call::add_book("Dune", "Desert planet"), "AddBook")]
    #[case::get_book(Call::get_book("b-1"), "GetBook")]
    #[case::delete_book(Call::delete_book("b-1"), "DeleteBook")]
    #[case::list_books(Call::ListBooks, "Books")]
    #[case::add_chapter(Call::add_chapter("Prologue", "Arrakis", "b-1"), "AddChapter")]
    #[case::get_chapter(Call::get_chapter("c-1"), "GetChapter")]
    #[case::delete_chapter(Call::delete_chapter("c-1"), "DeleteChapter")]
    #[case::list_chapters(Call::list_chapters("b-1"), "Chapters")]
    #[tokio::test]
    async fn opens_and_closes_one_span_named_after_the_operation(
        #[case] call: Call,
        #[case] span_name: &str,
    ) {
        let capture = EventCapture::default();
        let _guard = capture.install();
        let inner = RecordingHandlingService::default();
        let decorated = TracingService::new(inner.clone());

        let observed = invoke(&decorated, &call).await;

        assert_eq!(observed, inner.expected_outcome(&call));
        assert_eq!(inner.calls(), vec![call]);
        let spans = capture.spans();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].name, span_name);
        assert!(spans[0].closed, "span must close when the call returns");
    }

    #[tokio::test]
    async fn span_closes_when_the_call_fails() {
        let capture = EventCapture::default();
        let _guard = capture.install();
        let decorated = TracingService::new(RecordingHandlingService::failing(
            ServiceError::InvalidArgument,
        ));

        let error = decorated.get_chapter("").await.expect_err("inner fails");

        assert_eq!(error, ServiceError::InvalidArgument);
        let spans = capture.spans();
        assert_eq!(spans.len(), 1);
        assert!(spans[0].closed);
    }

    #[tokio::test]
    async fn span_is_a_child_of_the_callers_span() {
        let capture = EventCapture::default();
        let _guard = capture.install();
        let decorated = TracingService::new(RecordingHandlingService::default());

        decorated
            .list_books()
            .instrument(tracing::info_span!("http_request"))
            .await
            .expect("call succeeds");

        let spans = capture.spans();
        let books = spans
            .iter()
            .find(|span| span.name == "Books")
            .expect("operation span");
        assert_eq!(books.parent.as_deref(), Some("http_request"));
    }

    #[tokio::test]
    async fn inner_layers_run_inside_the_span() {
        let capture = EventCapture::default();
        let _guard = capture.install();
        let decorated = TracingService::new(LoggingService::new(
            RecordingHandlingService::default(),
        ));

        decorated.get_book("b-1").await.expect("call succeeds");

        let events = capture.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].span.as_deref(), Some("GetBook"));
    }
}
