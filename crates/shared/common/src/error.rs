//! Status-code translation pipeline.
//!
//! Three total mappings over the closed [`DomainError`] enum:
//!
//! - domain kind -> envelope code (`status_code`), used by the gRPC service
//!   when it wraps a failure into a response payload;
//! - envelope code -> domain kind (`error_from_status`), used by the REST
//!   gateway's gRPC client to rebuild a local error from a received
//!   envelope; unknown codes degrade to `Internal` instead of panicking;
//! - domain kind -> HTTP status plus `{"error": "<message>"}` body
//!   ([`ApiError`]), used by the gateway's axum handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use domain::{DomainError, ERR_UNEXPECTED};

// =============================================================================
// Envelope status codes
// =============================================================================

/// Success
pub const CODE_OK: i32 = 0;
/// Missing or malformed input
pub const CODE_INVALID_ARGUMENT: i32 = 3;
/// Entity absent
pub const CODE_NOT_FOUND: i32 = 5;
/// Credential mismatch
pub const CODE_PERMISSION_DENIED: i32 = 7;
/// Unclassified failure
pub const CODE_INTERNAL: i32 = 13;

/// Envelope code still emitted by older peers for unclassified failures
const CODE_INTERNAL_LEGACY: i32 = 2;

/// Envelope status code for a domain error.
pub fn status_code(err: &DomainError) -> i32 {
    match err {
        DomainError::InvalidArgument(_) => CODE_INVALID_ARGUMENT,
        DomainError::NotFound => CODE_NOT_FOUND,
        DomainError::PermissionDenied(_) => CODE_PERMISSION_DENIED,
        DomainError::Internal(_) => CODE_INTERNAL,
    }
}

/// Rebuild a domain error from a received envelope.
///
/// Total over `i32`: an unrecognized code becomes `Internal` with the
/// generic message rather than an error in the translation itself.
pub fn error_from_status(code: i32, message: &str) -> DomainError {
    match code {
        CODE_INVALID_ARGUMENT => DomainError::invalid_argument(message),
        CODE_NOT_FOUND => DomainError::NotFound,
        CODE_PERMISSION_DENIED => DomainError::permission_denied(message),
        CODE_INTERNAL | CODE_INTERNAL_LEGACY => DomainError::internal(message),
        _ => DomainError::internal(ERR_UNEXPECTED),
    }
}

/// HTTP status for a domain error.
pub fn http_status(err: &DomainError) -> StatusCode {
    match err {
        DomainError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound => StatusCode::NOT_FOUND,
        DomainError::PermissionDenied(_) => StatusCode::FORBIDDEN,
        DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// =============================================================================
// HTTP rendering (axum)
// =============================================================================

/// Error body returned to REST clients.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Renders a [`DomainError`] as an HTTP response.
///
/// Lives here rather than in `domain` so the domain crate stays free of
/// transport dependencies.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let DomainError::Internal(detail) = &self.0 {
            tracing::error!(%detail, "internal error");
        }
        let body = ErrorBody {
            error: self.0.public_message(),
        };
        (http_status(&self.0), Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type ApiResult<T> = Result<T, ApiError>;
