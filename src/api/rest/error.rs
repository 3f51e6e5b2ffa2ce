//! # REST Error Translation
//!
//! The single place where application failures become HTTP responses.
//!
//! Every failure is rendered as a problem document:
//!
//! ```json
//! {
//!   "type": "NotFoundError",
//!   "title": "Something went wrong. Please contact support",
//!   "status": 404,
//!   "detail": "Unable to process request or request id: 0b6c…",
//!   "traceId": "0b6c…"
//! }
//! ```
//!
//! The full internal error is logged next to the trace id; the client only
//! ever sees the failure category and the trace id.

use crate::application::error::ApplicationError;
use axum::Json;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Problem document content type.
pub const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

/// Generic title shown to clients for every failure.
pub const PROBLEM_TITLE: &str = "Something went wrong. Please contact support";

/// Problem details body returned for failed requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetails {
    /// Failure category name.
    #[serde(rename = "type")]
    pub problem_type: String,
    /// Human-readable summary.
    pub title: String,
    /// HTTP status code.
    pub status: u16,
    /// Detail that references the trace id.
    pub detail: String,
    /// Identifier correlating the response with server logs.
    pub trace_id: String,
}

/// Error returned by REST handlers.
#[derive(Debug)]
pub struct ApiError(ApplicationError);

impl ApiError {
    /// Returns the wrapped application error.
    #[inline]
    #[must_use]
    pub fn inner(&self) -> &ApplicationError {
        &self.0
    }

    /// Returns the HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ApplicationError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApplicationError::Validation(_) => StatusCode::BAD_REQUEST,
            ApplicationError::AllProvidersUnavailable { .. } | ApplicationError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn problem(&self, trace_id: &Uuid) -> ProblemDetails {
        ProblemDetails {
            problem_type: self.0.category().to_string(),
            title: PROBLEM_TITLE.to_string(),
            status: self.status().as_u16(),
            detail: format!("Unable to process request or request id: {trace_id}"),
            trace_id: trace_id.to_string(),
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let trace_id = Uuid::new_v4();
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(
                trace_id = %trace_id,
                status = status.as_u16(),
                category = self.0.category(),
                error = %self.0,
                "request failed"
            );
        } else {
            tracing::warn!(
                trace_id = %trace_id,
                status = status.as_u16(),
                category = self.0.category(),
                error = %self.0,
                "request rejected"
            );
        }

        let mut response = (status, Json(self.problem(&trace_id))).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(PROBLEM_CONTENT_TYPE),
        );
        response
    }
}

/// Result type for REST handlers.
pub type ApiResult<T> = Result<T, ApiError>;
