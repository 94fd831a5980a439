//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod customers;
#[allow(clippy::missing_errors_doc)]
pub mod locations;

use std::str::FromStr;

use axum::Router;
use axum::routing::get;

use clientele_app::ports::{CustomerRepository, LocationRepository};
use clientele_domain::error::{ClienteleError, NotFoundError};

use crate::error::ApiError;
use crate::state::AppState;

/// Build the API router.
pub fn routes<CR, LR>() -> Router<AppState<CR, LR>>
where
    CR: CustomerRepository + Send + Sync + 'static,
    LR: LocationRepository + Send + Sync + 'static,
{
    Router::new()
        // Customers
        .route(
            "/customers",
            get(customers::list::<CR, LR>).post(customers::create::<CR, LR>),
        )
        .route(
            "/customers/{id}",
            get(customers::get::<CR, LR>)
                .put(customers::update::<CR, LR>)
                .delete(customers::delete::<CR, LR>),
        )
        // Locations
        .route(
            "/locations",
            get(locations::list::<CR, LR>).post(locations::create::<CR, LR>),
        )
        .route(
            "/locations/{id}",
            get(locations::get::<CR, LR>)
                .put(locations::update::<CR, LR>)
                .delete(locations::delete::<CR, LR>),
        )
}

/// Parse an id path segment. A non-integer segment cannot name any record,
/// so it maps to the not-found response rather than a transport error.
fn parse_id<T: FromStr>(raw: &str, entity: &'static str) -> Result<T, ApiError> {
    raw.parse().map_err(|_| {
        ApiError::from(ClienteleError::from(NotFoundError {
            entity,
            id: raw.to_owned(),
        }))
    })
}
