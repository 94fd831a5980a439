//! JSON REST handlers for locations.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use clientele_app::ports::{CustomerRepository, LocationRepository};
use clientele_domain::id::LocationId;
use clientele_domain::location::{Location, LocationDraft};

use crate::api::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Location>>),
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
    Ok(Json<Location>),
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
    Created(Json<Location>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<Location>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /locations`
pub async fn list<CR, LR>(
    State(state): State<AppState<CR, LR>>,
) -> Result<ListResponse, ApiError>
where
    CR: CustomerRepository + Send + Sync + 'static,
    LR: LocationRepository + Send + Sync + 'static,
{
    let locations = state.location_service.list_locations().await?;
    Ok(ListResponse::Ok(Json(locations)))
}

/// `POST /locations`
pub async fn create<CR, LR>(
    State(state): State<AppState<CR, LR>>,
    Json(draft): Json<LocationDraft>,
) -> Result<CreateResponse, ApiError>
where
    CR: CustomerRepository + Send + Sync + 'static,
    LR: LocationRepository + Send + Sync + 'static,
{
    let created = state.location_service.create_location(draft).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `GET /locations/{id}`
pub async fn get<CR, LR>(
    State(state): State<AppState<CR, LR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    CR: CustomerRepository + Send + Sync + 'static,
    LR: LocationRepository + Send + Sync + 'static,
{
    let location_id: LocationId = parse_id(&id, "Location")?;
    let location = state.location_service.get_location(location_id).await?;
    Ok(GetResponse::Ok(Json(location)))
}

/// `PUT /locations/{id}`
pub async fn update<CR, LR>(
    State(state): State<AppState<CR, LR>>,
    Path(id): Path<String>,
    Json(draft): Json<LocationDraft>,
) -> Result<UpdateResponse, ApiError>
where
    CR: CustomerRepository + Send + Sync + 'static,
    LR: LocationRepository + Send + Sync + 'static,
{
    let location_id: LocationId = parse_id(&id, "Location")?;
    let updated = state
        .location_service
        .update_location(location_id, draft)
        .await?;
    Ok(UpdateResponse::Ok(Json(updated)))
}

/// `DELETE /locations/{id}`
pub async fn delete<CR, LR>(
    State(state): State<AppState<CR, LR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    CR: CustomerRepository + Send + Sync + 'static,
    LR: LocationRepository + Send + Sync + 'static,
{
    let location_id: LocationId = parse_id(&id, "Location")?;
    state.location_service.delete_location(location_id).await?;
    Ok(DeleteResponse::NoContent)
}
