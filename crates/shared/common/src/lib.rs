//! Error classification and status translation shared by both services.
//!
//! This crate holds the single authoritative mapping between domain error
//! kinds, the numeric status codes carried in gRPC response envelopes, and
//! HTTP statuses, plus the axum rendering of the JSON error body.

pub mod error;

pub use error::{
    error_from_status, http_status, status_code, ApiError, ApiResult, CODE_INTERNAL,
    CODE_INVALID_ARGUMENT, CODE_NOT_FOUND, CODE_OK, CODE_PERMISSION_DENIED,
};
