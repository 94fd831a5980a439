//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use clientele_app::ports::{CustomerRepository, LocationRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the resource routes at the root and includes a [`TraceLayer`] that
/// logs each HTTP request/response at the `DEBUG` level using the `tracing`
/// ecosystem.
pub fn build<CR, LR>(state: AppState<CR, LR>) -> Router
where
    CR: CustomerRepository + Send + Sync + 'static,
    LR: LocationRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use clientele_app::services::customer_service::CustomerService;
    use clientele_app::services::location_service::LocationService;
    use clientele_domain::customer::{Customer, CustomerDraft};
    use clientele_domain::error::ClienteleError;
    use clientele_domain::id::{CustomerId, LocationId};
    use clientele_domain::location::{Location, LocationDraft};
    use tower::ServiceExt;

    #[derive(Clone)]
    struct StubCustomerRepo;
    struct StubLocationRepo;

    impl CustomerRepository for StubCustomerRepo {
        async fn insert(&self, draft: CustomerDraft) -> Result<Customer, ClienteleError> {
            Ok(Customer {
                id: CustomerId::from_i64(1),
                first_name: draft.first_name,
                last_name: draft.last_name,
                email: draft.email,
                phone: draft.phone,
                locations: Vec::new(),
            })
        }
        async fn get_by_id(&self, _id: CustomerId) -> Result<Option<Customer>, ClienteleError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<Customer>, ClienteleError> {
            Ok(vec![])
        }
        async fn update(
            &self,
            id: CustomerId,
            draft: CustomerDraft,
        ) -> Result<Customer, ClienteleError> {
            Ok(Customer {
                id,
                first_name: draft.first_name,
                last_name: draft.last_name,
                email: draft.email,
                phone: draft.phone,
                locations: Vec::new(),
            })
        }
        async fn delete(&self, _id: CustomerId) -> Result<bool, ClienteleError> {
            Ok(false)
        }
        async fn exists(&self, _id: CustomerId) -> Result<bool, ClienteleError> {
            Ok(false)
        }
        async fn email_taken(
            &self,
            _email: &str,
            _except: Option<CustomerId>,
        ) -> Result<bool, ClienteleError> {
            Ok(false)
        }
    }

    impl LocationRepository for StubLocationRepo {
        async fn insert(
            &self,
            draft: LocationDraft,
            customer: CustomerId,
        ) -> Result<Location, ClienteleError> {
            Ok(Location {
                id: LocationId::from_i64(1),
                address: draft.address,
                city: draft.city,
                state: draft.state,
                zip: draft.zip,
                customer_id: customer,
            })
        }
        async fn get_by_id(&self, _id: LocationId) -> Result<Option<Location>, ClienteleError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<Location>, ClienteleError> {
            Ok(vec![])
        }
        async fn update(
            &self,
            id: LocationId,
            draft: LocationDraft,
            customer: CustomerId,
        ) -> Result<Location, ClienteleError> {
            Ok(Location {
                id,
                address: draft.address,
                city: draft.city,
                state: draft.state,
                zip: draft.zip,
                customer_id: customer,
            })
        }
        async fn delete(&self, _id: LocationId) -> Result<bool, ClienteleError> {
            Ok(false)
        }
    }

    fn test_app() -> Router {
        build(AppState::new(
            CustomerService::new(StubCustomerRepo),
            LocationService::new(StubLocationRepo, StubCustomerRepo),
        ))
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_customer() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/customers/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_not_found_for_non_integer_id() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/customers/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_unprocessable_for_empty_customer_payload() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/customers")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
