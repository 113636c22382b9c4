//! Process-local `EntityStore` adapter.
//!
//! Used when no database URL is configured and by integration tests. Records
//! live in insertion order behind a single `RwLock`; identifiers are random
//! UUID v4 strings.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{EntityStore, EntityStoreError};
use crate::domain::{Book, Chapter, NewBook, NewChapter};

#[derive(Debug, Default)]
struct Shelf {
    books: Vec<Book>,
    chapters: Vec<Chapter>,
}

impl Shelf {
    fn owns_chapters(&self, book_id: &str) -> bool {
        self.chapters.iter().any(|chapter| chapter.book_id == book_id)
    }

    fn has_book(&self, book_id: &str) -> bool {
        self.books.iter().any(|book| book.id == book_id)
    }
}

/// In-memory store holding books and chapters for the life of the process.
#[derive(Debug, Default)]
pub struct InMemoryEntityStore {
    shelf: RwLock<Shelf>,
}

impl InMemoryEntityStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Shelf>, EntityStoreError> {
        self.shelf.read().map_err(poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Shelf>, EntityStoreError> {
        self.shelf.write().map_err(poisoned)
    }
}

fn poisoned<T>(_: PoisonError<T>) -> EntityStoreError {
    EntityStoreError::connection("in-memory store lock poisoned")
}

fn next_id() -> String {
    Uuid::new_v4().to_string()
}

#[async_trait]
impl EntityStore for InMemoryEntityStore {
    async fn create_book(&self, input: NewBook) -> Result<Book, EntityStoreError> {
        let book = Book::new(next_id(), input.name, input.description);
        self.write()?.books.push(book.clone());
        Ok(book)
    }

    async fn book(&self, id: &str) -> Result<Book, EntityStoreError> {
        self.read()?
            .books
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or_else(|| EntityStoreError::not_found(format!("book {id}")))
    }

    async fn delete_book(&self, id: &str) -> Result<Book, EntityStoreError> {
        let mut shelf = self.write()?;
        let position = shelf
            .books
            .iter()
            .position(|book| book.id == id)
            .ok_or_else(|| EntityStoreError::not_found(format!("book {id}")))?;
        if shelf.owns_chapters(id) {
            return Err(EntityStoreError::constraint(format!(
                "book {id} still owns chapters"
            )));
        }
        Ok(shelf.books.remove(position))
    }

    async fn books(&self) -> Result<Vec<Book>, EntityStoreError> {
        Ok(self.read()?.books.clone())
    }

    async fn create_chapter(&self, input: NewChapter) -> Result<Chapter, EntityStoreError> {
        let mut shelf = self.write()?;
        if !shelf.has_book(&input.book_id) {
            return Err(EntityStoreError::constraint(format!(
                "book {} does not exist",
                input.book_id
            )));
        }
        let chapter = Chapter::new(next_id(), input.name, input.description, input.book_id);
        shelf.chapters.push(chapter.clone());
        Ok(chapter)
    }

    async fn chapter(&self, id: &str) -> Result<Chapter, EntityStoreError> {
        self.read()?
            .chapters
            .iter()
            .find(|chapter| chapter.id == id)
            .cloned()
            .ok_or_else(|| EntityStoreError::not_found(format!("chapter {id}")))
    }

    async fn delete_chapter(&self, id: &str) -> Result<Chapter, EntityStoreError> {
        let mut shelf = self.write()?;
        let position = shelf
            .chapters
            .iter()
            .position(|chapter| chapter.id == id)
            .ok_or_else(|| EntityStoreError::not_found(format!("chapter {id}")))?;
        Ok(shelf.chapters.remove(position))
    }

    async fn book_chapters(&self, book_id: &str) -> Result<Vec<Chapter>, EntityStoreError> {
        let shelf = self.read()?;
        if !shelf.has_book(book_id) {
            return Err(EntityStoreError::not_found(format!("book {book_id}")));
        }
        Ok(shelf
            .chapters
            .iter()
            .filter(|chapter| chapter.book_id == book_id)
            .cloned()
            .collect())
    }
}
