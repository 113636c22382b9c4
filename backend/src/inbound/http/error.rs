//! HTTP adapter mapping for service and transport errors.
//!
//! Every failure becomes `{"error": "<message>"}`. Only invalid arguments are
//! the caller's fault (400); store failures, unmatched path parameters and
//! undecodable bodies are all reported as 500.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use tracing::field::display;
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::ServiceError;
use crate::middleware::trace::TraceId;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the HTTP adapter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Failure returned by the handling service.
    #[error(transparent)]
    Service(#[from] ServiceError),
    /// A path parameter the route promises was absent.
    #[error("bad route")]
    BadRoute,
    /// The request body was not valid JSON for the endpoint.
    #[error("{message}")]
    MalformedBody { message: String },
}

impl ApiError {
    pub fn malformed_body(message: impl Into<String>) -> Self {
        Self::MalformedBody {
            message: message.into(),
        }
    }
}

/// Error response payload.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable failure message.
    #[schema(example = "invalid argument")]
    pub error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Service(err) if err.is_invalid_argument() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            warn!(
                error = %self,
                status = status.as_u16(),
                trace_id = TraceId::current().map(display),
                "request failed"
            );
        }
        HttpResponse::build(status).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
