//! HTTP inbound adapter exposing the handling service as JSON over REST.

pub mod books;
pub mod chapters;
pub mod error;
pub mod routes;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::{ApiError, ApiResult};
