//! Request extractors.

use axum::Json;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;

const MERGE_PATCH_TYPES: [&str; 2] = ["application/json", "application/merge-patch+json"];

/// JSON body of a merge-patch request.
///
/// Only `application/json` and `application/merge-patch+json` are accepted,
/// anything else is rejected with `415 Unsupported Media Type`.
pub struct MergePatch<T>(pub T);

impl<T, S> FromRequest<S> for MergePatch<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_merge_patch(req.headers()) {
            return Err((
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Expected request with `Content-Type: application/json` or `application/merge-patch+json`",
            )
                .into_response());
        }
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;
        Ok(Self(value))
    }
}

fn is_merge_patch(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    MERGE_PATCH_TYPES
        .iter()
        .any(|accepted| essence.eq_ignore_ascii_case(accepted))
}
