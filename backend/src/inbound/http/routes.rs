//! Route table for the handling API.
//!
//! ```text
//! POST   /handling/v1/books
//! GET    /handling/v1/books
//! GET    /handling/v1/books/{id}
//! DELETE /handling/v1/books/{id}
//! POST   /handling/v1/books/{book_id}/chapters
//! GET    /handling/v1/books/{book_id}/chapters
//! GET    /handling/v1/books/{book_id}/chapters/{id}
//! DELETE /handling/v1/books/{book_id}/chapters/{id}
//! ```
//!
//! Each path is a `web::Resource`, so a known path with an unregistered method
//! answers 405 and an unknown path answers 404 without reaching a handler.

use actix_web::{HttpRequest, web};

use super::error::ApiError;
use super::{books, chapters};

/// Mount prefix shared by every handling route.
pub const API_PREFIX: &str = "/handling/v1";

/// Register the handling routes on an application or scope.
///
/// ```no_run
/// use actix_web::App;
/// use rembook::inbound::http::routes::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(API_PREFIX)
            .app_data(json_config())
            .service(
                web::resource("/books")
                    .route(web::post().to(books::add_book))
                    .route(web::get().to(books::list_books)),
            )
            .service(
                web::resource("/books/{id}")
                    .route(web::get().to(books::get_book))
                    .route(web::delete().to(books::delete_book)),
            )
            .service(
                web::resource("/books/{book_id}/chapters")
                    .route(web::post().to(chapters::add_chapter))
                    .route(web::get().to(chapters::list_chapters)),
            )
            .service(
                web::resource("/books/{book_id}/chapters/{id}")
                    .route(web::get().to(chapters::get_chapter))
                    .route(web::delete().to(chapters::delete_chapter)),
            ),
    );
}

/// JSON bodies are decoded whatever the declared content type; decode
/// failures surface as [`ApiError::MalformedBody`].
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| ApiError::malformed_body(err.to_string()).into())
}

/// Read a named path parameter matched by the router.
pub(crate) fn path_param<'a>(req: &'a HttpRequest, name: &str) -> Result<&'a str, ApiError> {
    req.match_info().get(name).ok_or(ApiError::BadRoute)
}
