//! JSON REST handlers for customers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use clientele_app::ports::{CustomerRepository, LocationRepository};
use clientele_domain::customer::{Customer, CustomerDraft};
use clientele_domain::id::CustomerId;

use crate::api::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Customer>>),
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
    Ok(Json<Customer>),
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
    Created(Json<Customer>),
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
    Ok(Json<Customer>),
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

/// `GET /customers`
pub async fn list<CR, LR>(
    State(state): State<AppState<CR, LR>>,
) -> Result<ListResponse, ApiError>
where
    CR: CustomerRepository + Send + Sync + 'static,
    LR: LocationRepository + Send + Sync + 'static,
{
    let customers = state.customer_service.list_customers().await?;
    Ok(ListResponse::Ok(Json(customers)))
}

/// `POST /customers`
pub async fn create<CR, LR>(
    State(state): State<AppState<CR, LR>>,
    Json(draft): Json<CustomerDraft>,
) -> Result<CreateResponse, ApiError>
where
    CR: CustomerRepository + Send + Sync + 'static,
    LR: LocationRepository + Send + Sync + 'static,
{
    let created = state.customer_service.create_customer(draft).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `GET /customers/{id}`
pub async fn get<CR, LR>(
    State(state): State<AppState<CR, LR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    CR: CustomerRepository + Send + Sync + 'static,
    LR: LocationRepository + Send + Sync + 'static,
{
    let customer_id: CustomerId = parse_id(&id, "Customer")?;
    let customer = state.customer_service.get_customer(customer_id).await?;
    Ok(GetResponse::Ok(Json(customer)))
}

/// `PUT /customers/{id}`
pub async fn update<CR, LR>(
    State(state): State<AppState<CR, LR>>,
    Path(id): Path<String>,
    Json(draft): Json<CustomerDraft>,
) -> Result<UpdateResponse, ApiError>
where
    CR: CustomerRepository + Send + Sync + 'static,
    LR: LocationRepository + Send + Sync + 'static,
{
    let customer_id: CustomerId = parse_id(&id, "Customer")?;
    let updated = state
        .customer_service
        .update_customer(customer_id, draft)
        .await?;
    Ok(UpdateResponse::Ok(Json(updated)))
}

/// `DELETE /customers/{id}`
pub async fn delete<CR, LR>(
    State(state): State<AppState<CR, LR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    CR: CustomerRepository + Send + Sync + 'static,
    LR: LocationRepository + Send + Sync + 'static,
{
    let customer_id: CustomerId = parse_id(&id, "Customer")?;
    state.customer_service.delete_customer(customer_id).await?;
    Ok(DeleteResponse::NoContent)
}
