//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Books, listed in creation order.
    books (id) {
        /// Primary key: UUID v4 rendered as text.
        id -> Text,
        name -> Text,
        description -> Text,
        /// Insertion timestamp, used only for ordering.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Chapters; `book_id` references `books` with `ON DELETE RESTRICT`.
    chapters (id) {
        id -> Text,
        name -> Text,
        description -> Text,
        book_id -> Text,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(chapters -> books (book_id));
diesel::allow_tables_to_appear_in_same_query!(books, chapters);
