//! HTTP/REST API layer for Innkeep.
//!
//! Axum-based REST API at `/api/v1/` with envelope responses and CORS.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod router;
