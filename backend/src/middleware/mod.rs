//! Request middleware.
//!
//! Purpose: cross-cutting request concerns that sit outside the handling
//! service: cross-origin headers and the per-request trace span.

pub mod access_control;
pub mod trace;

pub use access_control::AccessControl;
pub use trace::Trace;
