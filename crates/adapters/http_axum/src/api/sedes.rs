//! JSON REST handlers for sedes.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use sedes_app::ports::SedeRepository;
use sedes_domain::error::{ENTITY_NAME, InvalidRequestError};
use sedes_domain::id::SedeId;
use sedes_domain::sede::Sede;

use crate::error::ApiError;
use crate::extract::MergePatch;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Sede>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Sede>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(HeaderMap, Json<Sede>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(headers, json) => (StatusCode::CREATED, headers, json).into_response(),
        }
    }
}

/// Possible responses from the update and partial update endpoints.
pub enum UpdateResponse {
    Ok(HeaderMap, Json<Sede>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(headers, json) => (headers, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent(HeaderMap),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent(headers) => (StatusCode::NO_CONTENT, headers).into_response(),
        }
    }
}

fn parse_id(raw: &str) -> Result<SedeId, ApiError> {
    SedeId::from_str(raw).map_err(|_| ApiError::from(InvalidRequestError::IdInvalid))
}

/// `GET /api/sedes`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: SedeRepository + Send + Sync + 'static,
{
    tracing::debug!("REST request to get all Sedes");
    let sedes = state.sede_service.list_sedes().await?;
    Ok(ListResponse::Ok(Json(sedes)))
}

/// `GET /api/sedes/:id`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: SedeRepository + Send + Sync + 'static,
{
    tracing::debug!(%id, "REST request to get Sede");
    let sede_id = parse_id(&id)?;
    let sede = state.sede_service.get_sede(sede_id).await?;
    Ok(GetResponse::Ok(Json(sede)))
}

/// `POST /api/sedes`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Json(sede): Json<Sede>,
) -> Result<CreateResponse, ApiError>
where
    R: SedeRepository + Send + Sync + 'static,
{
    tracing::debug!(?sede, "REST request to save Sede");
    let created = state.sede_service.create_sede(sede).await?;

    let id = created.id.map(|id| id.to_string()).unwrap_or_default();
    let mut headers = state.alerts.created(ENTITY_NAME, &id);
    if let Ok(location) = HeaderValue::from_str(&format!("/api/sedes/{id}")) {
        headers.insert(LOCATION, location);
    }
    Ok(CreateResponse::Created(headers, Json(created)))
}

/// `PUT /api/sedes/:id` — full replacement.
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    Json(sede): Json<Sede>,
) -> Result<UpdateResponse, ApiError>
where
    R: SedeRepository + Send + Sync + 'static,
{
    tracing::debug!(%id, ?sede, "REST request to update Sede");
    let sede_id = parse_id(&id)?;
    let updated = state.sede_service.update_sede(sede_id, sede).await?;
    let headers = state.alerts.updated(ENTITY_NAME, &sede_id.to_string());
    Ok(UpdateResponse::Ok(headers, Json(updated)))
}

/// `PATCH /api/sedes/:id` — merge patch, accepts `application/json` and
/// `application/merge-patch+json`.
pub async fn partial_update<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    MergePatch(patch): MergePatch<Sede>,
) -> Result<UpdateResponse, ApiError>
where
    R: SedeRepository + Send + Sync + 'static,
{
    tracing::debug!(%id, ?patch, "REST request to partial update Sede");
    let sede_id = parse_id(&id)?;
    let merged = state
        .sede_service
        .partial_update_sede(sede_id, patch)
        .await?;
    let headers = state.alerts.updated(ENTITY_NAME, &sede_id.to_string());
    Ok(UpdateResponse::Ok(headers, Json(merged)))
}

/// `DELETE /api/sedes/:id`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: SedeRepository + Send + Sync + 'static,
{
    tracing::debug!(%id, "REST request to delete Sede");
    let sede_id = parse_id(&id)?;
    state.sede_service.delete_sede(sede_id).await?;
    Ok(DeleteResponse::NoContent(
        state.alerts.deleted(ENTITY_NAME, &sede_id.to_string()),
    ))
}
