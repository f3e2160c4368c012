use std::collections::BTreeMap;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{NaiveDateTime, Utc};
use dealwarehouse_core::errors::{DatabaseError, Error as CoreError};
use serde::Serialize;
use thiserror::Error;

const VALIDATION_FAILED: &str = "Validation failed";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    /// Field name to message for every request field that failed its checks.
    #[error("Validation failed")]
    Validation(BTreeMap<String, String>),
    #[error("{0}")]
    MalformedRequest(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedRequest(rejection.body_text())
    }
}

impl ApiError {
    /// Attaches the path of the failing request to the error.
    pub fn at_path(self, path: impl Into<String>) -> PathedApiError {
        PathedApiError {
            error: self,
            path: path.into(),
        }
    }

    fn status_and_category(&self) -> (StatusCode, String) {
        match self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, VALIDATION_FAILED.to_string()),
            ApiError::MalformedRequest(_) => {
                (StatusCode::BAD_REQUEST, "Malformed Request".to_string())
            }
            ApiError::Core(e) => match e {
                CoreError::InvalidCurrency(_) => {
                    (StatusCode::BAD_REQUEST, "Invalid Currency".to_string())
                }
                CoreError::UnknownCurrency(_) => {
                    (StatusCode::BAD_REQUEST, "Unknown Currency".to_string())
                }
                CoreError::DuplicateDeal(_) => {
                    (StatusCode::BAD_REQUEST, "Duplicate Deal ID".to_string())
                }
                CoreError::Database(DatabaseError::NotFound(_)) => {
                    (StatusCode::NOT_FOUND, "Not Found".to_string())
                }
                _ => (StatusCode::INTERNAL_SERVER_ERROR, e.kind().to_string()),
            },
        }
    }

    fn into_details(self) -> ErrorDetails {
        match self {
            ApiError::Validation(fields) => ErrorDetails::Fields(fields),
            ApiError::Core(CoreError::Database(DatabaseError::NotFound(msg))) => {
                ErrorDetails::Message(msg)
            }
            other => ErrorDetails::Message(other.to_string()),
        }
    }
}

/// An [`ApiError`] together with the path of the request that raised it.
#[derive(Debug)]
pub struct PathedApiError {
    error: ApiError,
    path: String,
}

#[derive(Serialize, Debug)]
#[serde(untagged)]
enum ErrorDetails {
    Message(String),
    Fields(BTreeMap<String, String>),
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    status_code: u16,
    timestamp: NaiveDateTime,
    error_category: String,
    request_path: String,
    details: ErrorDetails,
}

impl IntoResponse for PathedApiError {
    fn into_response(self) -> Response {
        let (status, category) = self.error.status_and_category();
        if status.is_server_error() {
            tracing::error!("{} {}: {}", self.path, category, self.error);
        }
        let body = Json(ErrorBody {
            status_code: status.as_u16(),
            timestamp: Utc::now().naive_utc(),
            error_category: category,
            request_path: self.path,
            details: self.error.into_details(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, PathedApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn category_of(err: ApiError) -> (StatusCode, String) {
        err.status_and_category()
    }

    #[test]
    fn test_deal_rejections_are_client_errors() {
        assert_eq!(
            category_of(CoreError::InvalidCurrency("x".into()).into()),
            (StatusCode::BAD_REQUEST, "Invalid Currency".to_string())
        );
        assert_eq!(
            category_of(CoreError::UnknownCurrency("x".into()).into()),
            (StatusCode::BAD_REQUEST, "Unknown Currency".to_string())
        );
        assert_eq!(
            category_of(CoreError::DuplicateDeal("x".into()).into()),
            (StatusCode::BAD_REQUEST, "Duplicate Deal ID".to_string())
        );
    }

    #[test]
    fn test_storage_failure_reports_kind() {
        let err: ApiError =
            CoreError::Database(DatabaseError::QueryFailed("disk I/O error".into())).into();
        assert_eq!(
            category_of(err),
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "QueryFailed".to_string()
            )
        );
    }

    #[test]
    fn test_not_found_details_are_bare_message() {
        let err: ApiError =
            CoreError::Database(DatabaseError::NotFound("Deal not found: X".into())).into();
        match err.into_details() {
            ErrorDetails::Message(msg) => assert_eq!(msg, "Deal not found: X"),
            other => panic!("unexpected details: {:?}", other),
        }
    }
}
