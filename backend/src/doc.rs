//! OpenAPI documentation for the handling API.
//!
//! Served by Swagger UI at `/docs` in debug builds and printed by the
//! `openapi-dump` binary for external tooling.

use utoipa::OpenApi;

use crate::domain::{Book, Chapter};
use crate::inbound::http::books::{BookResponse, BooksResponse, EntityRequest};
use crate::inbound::http::chapters::{ChapterResponse, ChaptersResponse};
use crate::inbound::http::error::ErrorBody;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rembook handling API",
        description = "Create, read, list and delete books and their chapters."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::books::add_book,
        crate::inbound::http::books::list_books,
        crate::inbound::http::books::get_book,
        crate::inbound::http::books::delete_book,
        crate::inbound::http::chapters::add_chapter,
        crate::inbound::http::chapters::list_chapters,
        crate::inbound::http::chapters::get_chapter,
        crate::inbound::http::chapters::delete_chapter,
    ),
    components(schemas(
        Book,
        Chapter,
        EntityRequest,
        BookResponse,
        BooksResponse,
        ChapterResponse,
        ChaptersResponse,
        ErrorBody
    )),
    tags(
        (name = "books", description = "Book operations"),
        (name = "chapters", description = "Chapter operations")
    )
)]
pub struct ApiDoc;
