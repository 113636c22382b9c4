//! Test doubles shared by the decorator suites.
//!
//! [`RecordingHandlingService`] records every call with owned arguments and
//! answers with fixed values (or a scripted failure). [`EventCapture`] is a
//! `tracing-subscriber` layer collecting events and spans for assertions.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

use crate::domain::{Book, Chapter, HandlingService, ServiceError};

/// One recorded service call with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    AddBook { name: String, description: String },
    GetBook { id: String },
    DeleteBook { id: String },
    ListBooks,
    AddChapter { name: String, description: String, book_id: String },
    GetChapter { id: String },
    DeleteChapter { id: String },
    ListChapters { book_id: String },
}

impl Call {
    pub(crate) fn add_book(name: &str, description: &str) -> Self {
        Self::AddBook {
            name: name.to_owned(),
            description: description.to_owned(),
        }
    }

    pub(crate) fn get_book(id: &str) -> Self {
        Self::GetBook { id: id.to_owned() }
    }

    pub(crate) fn delete_book(id: &str) -> Self {
        Self::DeleteBook { id: id.to_owned() }
    }

    pub(crate) fn add_chapter(name: &str, description: &str, book_id: &str) -> Self {
        Self::AddChapter {
            name: name.to_owned(),
            description: description.to_owned(),
            book_id: book_id.to_owned(),
        }
    }

    pub(crate) fn get_chapter(id: &str) -> Self {
        Self::GetChapter { id: id.to_owned() }
    }

    pub(crate) fn delete_chapter(id: &str) -> Self {
        Self::DeleteChapter { id: id.to_owned() }
    }

    pub(crate) fn list_chapters(book_id: &str) -> Self {
        Self::ListChapters {
            book_id: book_id.to_owned(),
        }
    }
}

/// Result of any operation, so one assertion covers all eight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Outcome {
    Book(Result<Book, ServiceError>),
    Books(Result<Vec<Book>, ServiceError>),
    Chapter(Result<Chapter, ServiceError>),
    Chapters(Result<Vec<Chapter>, ServiceError>),
}

/// Dispatch `call` to the matching operation on `service`.
pub(crate) async fn invoke(service: &dyn HandlingService, call: &Call) -> Outcome {
    match call {
        Call::AddBook { name, description } => {
            Outcome::Book(service.add_book(name, description).await)
        }
        Call::GetBook { id } => Outcome::Book(service.get_book(id).await),
        Call::DeleteBook { id } => Outcome::Book(service.delete_book(id).await),
        Call::ListBooks => Outcome::Books(service.list_books().await),
        Call::AddChapter {
            name,
            description,
            book_id,
        } => Outcome::Chapter(service.add_chapter(name, description, book_id).await),
        Call::GetChapter { id } => Outcome::Chapter(service.get_chapter(id).await),
        Call::DeleteChapter { id } => Outcome::Chapter(service.delete_chapter(id).await),
        Call::ListChapters { book_id } => {
            Outcome::Chapters(service.list_chapters(book_id).await)
        }
    }
}

fn fixture_book() -> Book {
    Book::new("b-1", "Dune", "Desert planet")
}

fn fixture_chapter() -> Chapter {
    Chapter::new("c-1", "Prologue", "Arrakis", "b-1")
}

/// Innermost double recording calls and answering with fixed values.
#[derive(Clone, Default)]
pub(crate) struct RecordingHandlingService {
    calls: Arc<Mutex<Vec<Call>>>,
    failure: Option<ServiceError>,
}

impl RecordingHandlingService {
    /// A double whose every operation fails with `error`.
    pub(crate) fn failing(error: ServiceError) -> Self {
        Self {
            calls: Arc::default(),
            failure: Some(error),
        }
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls lock").clone()
    }

    /// What this double answers for `call`, without recording it.
    pub(crate) fn expected_outcome(&self, call: &Call) -> Outcome {
        match call {
            Call::AddBook { .. } | Call::GetBook { .. } | Call::DeleteBook { .. } => {
                Outcome::Book(self.answer(fixture_book()))
            }
            Call::ListBooks => Outcome::Books(self.answer(vec![fixture_book()])),
            Call::AddChapter { .. } | Call::GetChapter { .. } | Call::DeleteChapter { .. } => {
                Outcome::Chapter(self.answer(fixture_chapter()))
            }
            Call::ListChapters { .. } => Outcome::Chapters(self.answer(vec![fixture_chapter()])),
        }
    }

    fn answer<T>(&self, value: T) -> Result<T, ServiceError> {
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(value),
        }
    }

    fn record(&self, call: Call) {
        self.calls.lock().expect("calls lock").push(call);
    }
}

#[async_trait]
impl HandlingService for RecordingHandlingService {
    async fn add_book(&self, name: &str, description: &str) -> Result<Book, ServiceError> {
        self.record(Call::add_book(name, description));
        self.answer(fixture_book())
    }

    async fn get_book(&self, id: &str) -> Result<Book, ServiceError> {
        self.record(Call::get_book(id));
        self.answer(fixture_book())
    }

    async fn delete_book(&self, id: &str) -> Result<Book, ServiceError> {
        self.record(Call::delete_book(id));
        self.answer(fixture_book())
    }

    async fn list_books(&self) -> Result<Vec<Book>, ServiceError> {
        self.record(Call::ListBooks);
        self.answer(vec![fixture_book()])
    }

    async fn add_chapter(
        &self,
        name: &str,
        description: &str,
        book_id: &str,
    ) -> Result<Chapter, ServiceError> {
        self.record(Call::add_chapter(name, description, book_id));
        self.answer(fixture_chapter())
    }

    async fn get_chapter(&self, id: &str) -> Result<Chapter, ServiceError> {
        self.record(Call::get_chapter(id));
        self.answer(fixture_chapter())
    }

    async fn delete_chapter(&self, id: &str) -> Result<Chapter, ServiceError> {
        self.record(Call::delete_chapter(id));
        self.answer(fixture_chapter())
    }

    async fn list_chapters(&self, book_id: &str) -> Result<Vec<Chapter>, ServiceError> {
        self.record(Call::list_chapters(book_id));
        self.answer(vec![fixture_chapter()])
    }
}

/// A captured `tracing` event.
#[derive(Debug, Clone)]
pub(crate) struct CapturedEvent {
    pub(crate) fields: BTreeMap<String, String>,
    /// Name of the span the event was emitted in.
    pub(crate) span: Option<String>,
}

/// A captured span and its lifecycle.
#[derive(Debug, Clone)]
pub(crate) struct CapturedSpan {
    id: u64,
    pub(crate) name: String,
    pub(crate) parent: Option<String>,
    pub(crate) closed: bool,
}

#[derive(Default)]
struct Captured {
    events: Vec<CapturedEvent>,
    spans: Vec<CapturedSpan>,
}

/// Layer recording events and spans seen by the thread-local subscriber.
#[derive(Clone, Default)]
pub(crate) struct EventCapture {
    captured: Arc<Mutex<Captured>>,
}

impl EventCapture {
    /// Install a subscriber using this layer for the current thread.
    pub(crate) fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::registry().with(self.clone());
        tracing::subscriber::set_default(subscriber)
    }

    pub(crate) fn events(&self) -> Vec<CapturedEvent> {
        self.captured.lock().expect("capture lock").events.clone()
    }

    pub(crate) fn spans(&self) -> Vec<CapturedSpan> {
        self.captured.lock().expect("capture lock").spans.clone()
    }
}

#[derive(Default)]
struct FieldVisitor(BTreeMap<String, String>);

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_owned(), value.to_owned());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_owned(), format!("{value:?}"));
    }
}

impl<S> Layer<S> for EventCapture
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let parent = ctx
            .span(id)
            .and_then(|span| span.parent())
            .map(|parent| parent.name().to_owned());
        self.captured
            .lock()
            .expect("capture lock")
            .spans
            .push(CapturedSpan {
                id: id.into_u64(),
                name: attrs.metadata().name().to_owned(),
                parent,
                closed: false,
            });
    }

    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        let span = ctx.event_span(event).map(|span| span.name().to_owned());
        self.captured
            .lock()
            .expect("capture lock")
            .events
            .push(CapturedEvent {
                fields: visitor.0,
                span,
            });
    }

    fn on_close(&self, id: Id, _ctx: Context<'_, S>) {
        let mut captured = self.captured.lock().expect("capture lock");
        if let Some(span) = captured
            .spans
            .iter_mut()
            .rev()
            .find(|span| span.id == id.into_u64() && !span.closed)
        {
            span.closed = true;
        }
    }
}
