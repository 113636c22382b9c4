//! Chapter HTTP handlers.
//!
//! Chapters are created and listed under their book. The by-id routes carry a
//! `{book_id}` segment for symmetry, but a chapter is addressed by its own id
//! alone and the segment is not consulted.

use actix_web::{HttpRequest, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Chapter;
use crate::inbound::http::ApiResult;
use crate::inbound::http::books::EntityRequest;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::routes::path_param;
use crate::inbound::http::state::HttpState;

/// Single chapter envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChapterResponse {
    pub chapter: Chapter,
}

/// Chapter list envelope. `chapters` is always present, even when empty.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChaptersResponse {
    pub chapters: Vec<Chapter>,
}

/// Create a chapter in a book.
#[utoipa::path(
    post,
    path = "/handling/v1/books/{book_id}/chapters",
    params(("book_id" = String, Path, description = "Owning book identifier")),
    request_body = EntityRequest,
    responses(
        (status = 200, description = "Chapter created", body = ChapterResponse),
        (status = 400, description = "Empty name or description", body = ErrorBody),
        (status = 500, description = "Unknown book, store failure or malformed body", body = ErrorBody)
    ),
    tags = ["chapters"],
    operation_id = "addChapter"
)]
pub async fn add_chapter(
    state: web::Data<HttpState>,
    req: HttpRequest,
    payload: web::Json<EntityRequest>,
) -> ApiResult<web::Json<ChapterResponse>> {
    let book_id = path_param(&req, "book_id")?;
    let EntityRequest { name, description } = payload.into_inner();
    let chapter = state
        .service
        .add_chapter(&name, &description, book_id)
        .await?;
    Ok(web::Json(ChapterResponse { chapter }))
}

/// List the chapters of a book.
#[utoipa::path(
    get,
    path = "/handling/v1/books/{book_id}/chapters",
    params(("book_id" = String, Path, description = "Owning book identifier")),
    responses(
        (status = 200, description = "Chapters", body = ChaptersResponse),
        (status = 500, description = "Unknown book or store failure", body = ErrorBody)
    ),
    tags = ["chapters"],
    operation_id = "listChapters"
)]
pub async fn list_chapters(
    state: web::Data<HttpState>,
    req: HttpRequest,
) -> ApiResult<web::Json<ChaptersResponse>> {
    let book_id = path_param(&req, "book_id")?;
    let chapters = state.service.list_chapters(book_id).await?;
    Ok(web::Json(ChaptersResponse { chapters }))
}

/// Fetch one chapter.
#[utoipa::path(
    get,
    path = "/handling/v1/books/{book_id}/chapters/{id}",
    params(
        ("book_id" = String, Path, description = "Not consulted"),
        ("id" = String, Path, description = "Chapter identifier")
    ),
    responses(
        (status = 200, description = "Chapter", body = ChapterResponse),
        (status = 500, description = "Unknown chapter or store failure", body = ErrorBody)
    ),
    tags = ["chapters"],
    operation_id = "getChapter"
)]
pub async fn get_chapter(
    state: web::Data<HttpState>,
    req: HttpRequest,
) -> ApiResult<web::Json<ChapterResponse>> {
    let id = path_param(&req, "id")?;
    let chapter = state.service.get_chapter(id).await?;
    Ok(web::Json(ChapterResponse { chapter }))
}

/// Delete a chapter and return its last value.
#[utoipa::path(
    delete,
    path = "/handling/v1/books/{book_id}/chapters/{id}",
    params(
        ("book_id" = String, Path, description = "Not consulted"),
        ("id" = String, Path, description = "Chapter identifier")
    ),
    responses(
        (status = 200, description = "Deleted chapter", body = ChapterResponse),
        (status = 500, description = "Unknown chapter or store failure", body = ErrorBody)
    ),
    tags = ["chapters"],
    operation_id = "deleteChapter"
)]
pub async fn delete_chapter(
    state: web::Data<HttpState>,
    req: HttpRequest,
) -> ApiResult<web::Json<ChapterResponse>> {
    let id = path_param(&req, "id")?;
    let chapter = state.service.delete_chapter(id).await?;
    Ok(web::Json(ChapterResponse { chapter }))
}

#[cfg(test)]
#[path = "chapters_tests.rs"]
mod tests;
