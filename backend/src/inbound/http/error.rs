//! HTTP error payloads and mapping from domain errors.
//!
//! Keeps the domain free of transport concerns: [`DomainError`] is
//! translated into an Actix response here. Every failed response carries the
//! body `{"error": "<message>"}` and the ambient trace identifier as a
//! response header.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{DomainError, ErrorCode};
use crate::middleware::trace::{TRACE_ID_HEADER, TraceId};

/// Wire shape of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable description of the failure.
    #[schema(example = "Invalid user data")]
    pub error: String,
}

/// Error envelope returned by HTTP handlers.
///
/// Captures the ambient trace identifier at construction time, because
/// response rendering happens outside the middleware's task-local scope.
#[derive(Debug, Clone)]
pub struct ApiError {
    inner: DomainError,
    trace_id: Option<String>,
}

impl ApiError {
    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.inner.code()
    }

    /// Human-readable message placed in the response body.
    pub fn message(&self) -> &str {
        self.inner.message()
    }

    fn to_status_code(&self) -> StatusCode {
        match self.inner.code() {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(value: DomainError) -> Self {
        Self {
            inner: value,
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.to_status_code()
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = &self.trace_id {
            builder.insert_header((TRACE_ID_HEADER, id.clone()));
        }
        builder.json(ErrorBody {
            error: self.message().to_owned(),
        })
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Map body deserialisation failures onto the standard error envelope.
///
/// Registered via `web::JsonConfig` so a malformed JSON body produces the
/// same `{"error": ...}` shape as every other failure.
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::from(DomainError::invalid_request(format!("Bad Request: {error}"))).into()
}
