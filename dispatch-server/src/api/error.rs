//! Boundary validation failures and their JSON rendering.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dispatch_core::WeightError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A request the service refuses to act on.
///
/// Every variant maps to HTTP 400. An empty queue or an unreachable
/// destination is a normal outcome and never surfaces here.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The body was not valid JSON or lacked a required field.
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    /// The query string lacked a required parameter.
    #[error("invalid query string: {0}")]
    InvalidQuery(String),
    /// The route weight was negative or not finite.
    #[error("invalid route weight: {0}")]
    InvalidWeight(#[from] WeightError),
}

impl ApiError {
    /// Machine-readable code reported to clients.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::InvalidQuery(_) => "INVALID_QUERY",
            Self::InvalidWeight(_) => "INVALID_WEIGHT",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidQuery(rejection.body_text())
    }
}

/// Envelope wrapping an error on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// The error itself.
    pub error: ErrorDetail,
}

/// Error code and human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Stable code for programmatic handling.
    pub code: String,
    /// Description of what was wrong with the request.
    pub message: String,
}

impl From<&ApiError> for ErrorBody {
    fn from(error: &ApiError) -> Self {
        Self {
            error: ErrorDetail {
                code: error.code().to_owned(),
                message: error.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(code = self.code(), error = %self, "rejected request");
        (StatusCode::BAD_REQUEST, Json(ErrorBody::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ApiError::InvalidBody("missing field `to`".to_owned()), "INVALID_BODY")]
    #[case(ApiError::InvalidQuery("missing field `end`".to_owned()), "INVALID_QUERY")]
    #[case(ApiError::InvalidWeight(WeightError::Negative(-1.0)), "INVALID_WEIGHT")]
    fn codes_match_variants(#[case] error: ApiError, #[case] code: &str) {
        assert_eq!(error.code(), code);
    }

    #[rstest]
    fn body_carries_code_and_message() {
        let error = ApiError::from(WeightError::NonFinite);
        let body = ErrorBody::from(&error);
        assert_eq!(body.error.code, "INVALID_WEIGHT");
        assert_eq!(body.error.message, error.to_string());
    }

    #[rstest]
    fn renders_as_bad_request() {
        let response = ApiError::InvalidBody("oops".to_owned()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
