//! Shared application state for axum handlers.

use std::sync::Arc;

use clientele_app::ports::{CustomerRepository, LocationRepository};
use clientele_app::services::customer_service::CustomerService;
use clientele_app::services::location_service::LocationService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch. `Clone` is
/// implemented manually so the underlying types themselves do not need to be
/// `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<CR, LR> {
    /// Customer CRUD service.
    pub customer_service: Arc<CustomerService<CR>>,
    /// Location CRUD service.
    pub location_service: Arc<LocationService<LR, CR>>,
}

impl<CR, LR> Clone for AppState<CR, LR> {
    fn clone(&self) -> Self {
        Self {
            customer_service: Arc::clone(&self.customer_service),
            location_service: Arc::clone(&self.location_service),
        }
    }
}

impl<CR, LR> AppState<CR, LR>
where
    CR: CustomerRepository + Send + Sync + 'static,
    LR: LocationRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        customer_service: CustomerService<CR>,
        location_service: LocationService<LR, CR>,
    ) -> Self {
        Self {
            customer_service: Arc::new(customer_service),
            location_service: Arc::new(location_service),
        }
    }
}
