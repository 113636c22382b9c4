//! Book HTTP handlers.
//!
//! ```text
//! POST   /handling/v1/books        {"name": "...", "description": "..."}
//! GET    /handling/v1/books
//! GET    /handling/v1/books/{id}
//! DELETE /handling/v1/books/{id}
//! ```

use actix_web::{HttpRequest, web};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::domain::Book;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::routes::path_param;
use crate::inbound::http::state::HttpState;

/// Request payload for creating a book or a chapter.
///
/// Absent and `null` fields decode as empty strings and are rejected by the
/// service.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct EntityRequest {
    #[schema(example = "Dune")]
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[schema(example = "Desert planet")]
    #[serde(deserialize_with = "null_as_empty")]
    pub description: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Single book envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookResponse {
    pub book: Book,
}

/// Book list envelope. `books` is always present, even when empty.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BooksResponse {
    pub books: Vec<Book>,
}

/// Create a book.
#[utoipa::path(
    post,
    path = "/handling/v1/books",
    request_body = EntityRequest,
    responses(
        (status = 200, description = "Book created", body = BookResponse),
        (status = 400, description = "Empty name or description", body = ErrorBody),
        (status = 500, description = "Store failure or malformed body", body = ErrorBody)
    ),
    tags = ["books"],
    operation_id = "addBook"
)]
pub async fn add_book(
    state: web::Data<HttpState>,
    payload: web::Json<EntityRequest>,
) -> ApiResult<web::Json<BookResponse>> {
    let EntityRequest { name, description } = payload.into_inner();
    let book = state.service.add_book(&name, &description).await?;
    Ok(web::Json(BookResponse { book }))
}

/// List every book.
#[utoipa::path(
    get,
    path = "/handling/v1/books",
    responses(
        (status = 200, description = "Books", body = BooksResponse),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tags = ["books"],
    operation_id = "listBooks"
)]
pub async fn list_books(state: web::Data<HttpState>) -> ApiResult<web::Json<BooksResponse>> {
    let books = state.service.list_books().await?;
    Ok(web::Json(BooksResponse { books }))
}

/// Fetch one book.
#[utoipa::path(
    get,
    path = "/handling/v1/books/{id}",
    params(("id" = String, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "Book", body = BookResponse),
        (status = 500, description = "Unknown book or store failure", body = ErrorBody)
    ),
    tags = ["books"],
    operation_id = "getBook"
)]
pub async fn get_book(
    state: web::Data<HttpState>,
    req: HttpRequest,
) -> ApiResult<web::Json<BookResponse>> {
    let id = path_param(&req, "id")?;
    let book = state.service.get_book(id).await?;
    Ok(web::Json(BookResponse { book }))
}

/// Delete a book and return its last value.
#[utoipa::path(
    delete,
    path = "/handling/v1/books/{id}",
    params(("id" = String, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "Deleted book", body = BookResponse),
        (status = 500, description = "Unknown book, remaining chapters or store failure", body = ErrorBody)
    ),
    tags = ["books"],
    operation_id = "deleteBook"
)]
pub async fn delete_book(
    state: web::Data<HttpState>,
    req: HttpRequest,
) -> ApiResult<web::Json<BookResponse>> {
    let id = path_param(&req, "id")?;
    let book = state.service.delete_book(id).await?;
    Ok(web::Json(BookResponse { book }))
}

#[cfg(test)]
#[path = "books_tests.rs"]
mod tests;
