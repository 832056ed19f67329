//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use sedes_domain::error::{ENTITY_NAME, InvalidRequestError, SedesError};

/// Problem body returned by API endpoints on 4xx/5xx.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProblemBody {
    title: String,
    status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    entity_name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_key: Option<&'static str>,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<&'static str>,
}

impl ProblemBody {
    fn bad_request(err: InvalidRequestError) -> Self {
        Self {
            title: err.to_string(),
            status: StatusCode::BAD_REQUEST.as_u16(),
            entity_name: Some(ENTITY_NAME),
            error_key: Some(err.error_key()),
            message: format!("error.{}", err.error_key()),
            params: Some(ENTITY_NAME),
        }
    }

    fn internal() -> Self {
        Self {
            title: "Internal Server Error".to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            entity_name: None,
            error_key: None,
            message: "error.http.500".to_string(),
            params: None,
        }
    }
}

/// Maps [`SedesError`] to an HTTP response with appropriate status code.
///
/// - `InvalidRequest` → 400 with a problem body carrying the error key
/// - `NotFound` → 404 with an empty body
/// - `Storage` → 500, logged
#[derive(Debug)]
pub struct ApiError(SedesError);

impl From<SedesError> for ApiError {
    fn from(err: SedesError) -> Self {
        Self(err)
    }
}

impl From<InvalidRequestError> for ApiError {
    fn from(err: InvalidRequestError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            SedesError::InvalidRequest(err) => {
                tracing::debug!(error_key = err.error_key(), "rejecting sede request");
                (StatusCode::BAD_REQUEST, Json(ProblemBody::bad_request(err))).into_response()
            }
            SedesError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            SedesError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ProblemBody::internal()),
                )
                    .into_response()
            }
        }
    }
}
