//! Internal Diesel row structs for the entity store.
//!
//! These types never leave the persistence layer; the store converts them to
//! domain entities before returning.

use diesel::prelude::*;

use crate::domain::{Book, Chapter};

use super::schema::{books, chapters};

/// Row read from the `books` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = books)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BookRow {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Self::new(row.id, row.name, row.description)
    }
}

/// Insertable struct for new book records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = books)]
pub(crate) struct NewBookRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: &'a str,
}

/// Row read from the `chapters` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = chapters)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ChapterRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub book_id: String,
}

impl From<ChapterRow> for Chapter {
    fn from(row: ChapterRow) -> Self {
        Self::new(row.id, row.name, row.description, row.book_id)
    }
}

/// Insertable struct for new chapter records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = chapters)]
pub(crate) struct NewChapterRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub book_id: &'a str,
}
