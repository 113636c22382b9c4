//! PostgreSQL-backed `EntityStore` implementation using Diesel.
//!
//! Identifiers are generated here (UUID v4 text) so inserts can return the
//! full row. Referential rules live in the schema: a chapter insert for an
//! unknown book and a book delete with remaining chapters both fail on the
//! `chapters.book_id` foreign key.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::AsyncConnection as _;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use uuid::Uuid;

use crate::domain::ports::{EntityStore, EntityStoreError};
use crate::domain::{Book, Chapter, NewBook, NewChapter};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{BookRow, ChapterRow, NewBookRow, NewChapterRow};
use super::pool::DbPool;
use super::schema::{books, chapters};

/// Diesel implementation of the entity store port.
#[derive(Clone)]
pub struct DieselEntityStore {
    pool: DbPool,
}

impl DieselEntityStore {
    /// Create a store using `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityStore for DieselEntityStore {
    async fn create_book(&self, input: NewBook) -> Result<Book, EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let id = Uuid::new_v4().to_string();
        let row = NewBookRow {
            id: &id,
            name: &input.name,
            description: &input.description,
        };

        diesel::insert_into(books::table)
            .values(&row)
            .returning(BookRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(Book::from)
            .map_err(|err| map_diesel_error(err, &format!("book {id}")))
    }

    async fn book(&self, id: &str) -> Result<Book, EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        books::table
            .filter(books::id.eq(id))
            .select(BookRow::as_select())
            .first(&mut conn)
            .await
            .map(Book::from)
            .map_err(|err| map_diesel_error(err, &format!("book {id}")))
    }

    async fn delete_book(&self, id: &str) -> Result<Book, EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(books::table.filter(books::id.eq(id)))
            .returning(BookRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(Book::from)
            .map_err(|err| map_diesel_error(err, &format!("book {id}")))
    }

    async fn books(&self) -> Result<Vec<Book>, EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<BookRow> = books::table
            .order((books::created_at.asc(), books::id.asc()))
            .select(BookRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "books"))?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn create_chapter(&self, input: NewChapter) -> Result<Chapter, EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let id = Uuid::new_v4().to_string();
        let row = NewChapterRow {
            id: &id,
            name: &input.name,
            description: &input.description,
            book_id: &input.book_id,
        };

        diesel::insert_into(chapters::table)
            .values(&row)
            .returning(ChapterRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(Chapter::from)
            .map_err(|err| map_diesel_error(err, &format!("chapter {id}")))
    }

    async fn chapter(&self, id: &str) -> Result<Chapter, EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        chapters::table
            .filter(chapters::id.eq(id))
            .select(ChapterRow::as_select())
            .first(&mut conn)
            .await
            .map(Chapter::from)
            .map_err(|err| map_diesel_error(err, &format!("chapter {id}")))
    }

    async fn delete_chapter(&self, id: &str) -> Result<Chapter, EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(chapters::table.filter(chapters::id.eq(id)))
            .returning(ChapterRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(Chapter::from)
            .map_err(|err| map_diesel_error(err, &format!("chapter {id}")))
    }

    async fn book_chapters(&self, book_id: &str) -> Result<Vec<Chapter>, EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let subject = format!("book {book_id}");

        // The book row stays share-locked until the chapters are read, so a
        // concurrent delete cannot turn a missing book into an empty list.
        let rows: Option<Vec<ChapterRow>> = conn
            .transaction(|conn| {
                async move {
                    let owner: Option<String> = books::table
                        .filter(books::id.eq(book_id))
                        .select(books::id)
                        .for_share()
                        .first(conn)
                        .await
                        .optional()?;
                    if owner.is_none() {
                        return Ok(None);
                    }
                    chapters::table
                        .filter(chapters::book_id.eq(book_id))
                        .order((chapters::created_at.asc(), chapters::id.asc()))
                        .select(ChapterRow::as_select())
                        .load(conn)
                        .await
                        .map(Some)
                }
                .scope_boxed()
            })
            .await
            .map_err(|err| map_diesel_error(err, &subject))?;

        let rows = rows.ok_or_else(|| EntityStoreError::not_found(subject.clone()))?;
        Ok(rows.into_iter().map(Chapter::from).collect())
    }
}
