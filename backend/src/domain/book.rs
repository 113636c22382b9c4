//! Book and chapter entities.
//!
//! Both are plain values handed to and returned from the entity store. The
//! store assigns identifiers; the service never keeps an authoritative copy.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A book as persisted by the entity store.
///
/// # Examples
/// ```
/// use rembook::domain::Book;
///
/// let book = Book::new("b-1", "Dune", "Desert planet");
/// assert_eq!(book.id, "b-1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Opaque identifier assigned by the store.
    #[schema(example = "5e0a4f0e-9d0c-4c55-8d0c-1b6f8a3c2d11")]
    pub id: String,
    #[schema(example = "Dune")]
    pub name: String,
    #[schema(example = "Desert planet politics")]
    pub description: String,
}

impl Book {
    /// Assemble a book from its stored parts.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A chapter owned by exactly one book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Chapter {
    /// Opaque identifier assigned by the store.
    pub id: String,
    #[schema(example = "Prologue")]
    pub name: String,
    #[schema(example = "Where it all begins")]
    pub description: String,
    /// Owning book; fixed at creation.
    pub book_id: String,
}

impl Chapter {
    /// Assemble a chapter from its stored parts.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        book_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            book_id: book_id.into(),
        }
    }
}

/// Input for creating a book. The store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub name: String,
    pub description: String,
}

/// Input for creating a chapter linked to an existing book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChapter {
    pub name: String,
    pub description: String,
    pub book_id: String,
}
