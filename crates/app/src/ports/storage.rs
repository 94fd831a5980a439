//! Storage port — repository traits for persistence.

use std::future::Future;

use clientele_domain::customer::{Customer, CustomerDraft};
use clientele_domain::error::ClienteleError;
use clientele_domain::id::{CustomerId, LocationId};
use clientele_domain::location::{Location, LocationDraft};

/// Repository for persisting and querying [`Customer`]s.
///
/// Read operations return customers with their locations eagerly attached.
pub trait CustomerRepository {
    /// Insert a new customer and return it with its store-assigned id and an
    /// empty location list.
    fn insert(
        &self,
        draft: CustomerDraft,
    ) -> impl Future<Output = Result<Customer, ClienteleError>> + Send;

    /// Get a customer by id, locations included.
    fn get_by_id(
        &self,
        id: CustomerId,
    ) -> impl Future<Output = Result<Option<Customer>, ClienteleError>> + Send;

    /// Get all customers, locations included.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Customer>, ClienteleError>> + Send;

    /// Overwrite the mutable fields of an existing customer and return the
    /// updated record.
    fn update(
        &self,
        id: CustomerId,
        draft: CustomerDraft,
    ) -> impl Future<Output = Result<Customer, ClienteleError>> + Send;

    /// Delete a customer by id. Returns `false` when no row matched.
    fn delete(&self, id: CustomerId) -> impl Future<Output = Result<bool, ClienteleError>> + Send;

    /// Whether a customer with this id exists. Backs the `exists` rule on
    /// `locations.customer_id`.
    fn exists(&self, id: CustomerId) -> impl Future<Output = Result<bool, ClienteleError>> + Send;

    /// Whether another customer already uses this email. `except` scopes the
    /// uniqueness rule to exclude the record being updated.
    fn email_taken(
        &self,
        email: &str,
        except: Option<CustomerId>,
    ) -> impl Future<Output = Result<bool, ClienteleError>> + Send;
}

/// Repository for persisting and querying [`Location`]s.
pub trait LocationRepository {
    /// Insert a new location owned by `customer` and return it with its
    /// store-assigned id.
    fn insert(
        &self,
        draft: LocationDraft,
        customer: CustomerId,
    ) -> impl Future<Output = Result<Location, ClienteleError>> + Send;

    /// Get a location by id.
    fn get_by_id(
        &self,
        id: LocationId,
    ) -> impl Future<Output = Result<Option<Location>, ClienteleError>> + Send;

    /// Get all locations, flat.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Location>, ClienteleError>> + Send;

    /// Overwrite the mutable fields of an existing location and return the
    /// updated record.
    fn update(
        &self,
        id: LocationId,
        draft: LocationDraft,
        customer: CustomerId,
    ) -> impl Future<Output = Result<Location, ClienteleError>> + Send;

    /// Delete a location by id. Returns `false` when no row matched.
    fn delete(&self, id: LocationId) -> impl Future<Output = Result<bool, ClienteleError>> + Send;
}
