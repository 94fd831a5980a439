//! Location service — use-cases for managing locations.

use clientele_domain::error::{ClienteleError, NotFoundError};
use clientele_domain::id::{CustomerId, LocationId};
use clientele_domain::location::{Location, LocationDraft};
use clientele_domain::validate::{self, ValidationErrors};

use crate::ports::{CustomerRepository, LocationRepository};

/// Application service for location CRUD operations.
///
/// Holds a customer repository alongside the location repository so the
/// `exists` rule on `customer_id` can be checked before any write.
pub struct LocationService<LR, CR> {
    locations: LR,
    customers: CR,
}

impl<LR: LocationRepository, CR: CustomerRepository> LocationService<LR, CR> {
    /// Create a new service backed by the given repositories.
    pub fn new(locations: LR, customers: CR) -> Self {
        Self { locations, customers }
    }

    /// List all locations, flat.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_locations(&self) -> Result<Vec<Location>, ClienteleError> {
        self.locations.get_all().await
    }

    /// Create a new location after running the full rule set, including the
    /// parent-customer existence pre-check.
    ///
    /// # Errors
    ///
    /// Returns [`ClienteleError::Validation`] carrying every violation, or a
    /// storage error from the repositories.
    pub async fn create_location(&self, draft: LocationDraft) -> Result<Location, ClienteleError> {
        let mut errors = rule_violations(&draft);
        let customer = self.resolve_customer(&draft, &mut errors).await?;
        // `customer` is always resolved when no violation was recorded.
        match (customer, errors.is_empty()) {
            (Some(customer), true) => self.locations.insert(draft, customer).await,
            _ => Err(errors.into()),
        }
    }

    /// Look up a location by id.
    ///
    /// # Errors
    ///
    /// Returns [`ClienteleError::NotFound`] when no location with `id`
    /// exists, or a storage error from the repository.
    pub async fn get_location(&self, id: LocationId) -> Result<Location, ClienteleError> {
        self.locations.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Location",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Update an existing location. Existence is checked before validation;
    /// the submitted `customer_id` must reference an existing customer.
    ///
    /// # Errors
    ///
    /// Returns [`ClienteleError::NotFound`] when `id` does not exist,
    /// [`ClienteleError::Validation`] on rule violations, or a storage error.
    pub async fn update_location(
        &self,
        id: LocationId,
        draft: LocationDraft,
    ) -> Result<Location, ClienteleError> {
        if self.locations.get_by_id(id).await?.is_none() {
            return Err(NotFoundError {
                entity: "Location",
                id: id.to_string(),
            }
            .into());
        }
        let mut errors = rule_violations(&draft);
        let customer = self.resolve_customer(&draft, &mut errors).await?;
        match (customer, errors.is_empty()) {
            (Some(customer), true) => self.locations.update(id, draft, customer).await,
            _ => Err(errors.into()),
        }
    }

    /// Delete a location by id.
    ///
    /// # Errors
    ///
    /// Returns [`ClienteleError::NotFound`] when `id` does not exist, or a
    /// storage error from the repository.
    pub async fn delete_location(&self, id: LocationId) -> Result<(), ClienteleError> {
        if self.locations.delete(id).await? {
            Ok(())
        } else {
            Err(NotFoundError {
                entity: "Location",
                id: id.to_string(),
            }
            .into())
        }
    }

    /// Resolve the submitted `customer_id` to an existing customer,
    /// recording the `exists`-rule violation when it cannot be. Empty values
    /// are skipped, the required rule already covers those.
    async fn resolve_customer(
        &self,
        draft: &LocationDraft,
        errors: &mut ValidationErrors,
    ) -> Result<Option<CustomerId>, ClienteleError> {
        if draft.customer_id.is_empty() {
            return Ok(None);
        }
        let resolved = match draft.customer_ref() {
            Some(id) => self.customers.exists(id).await?.then_some(id),
            None => None,
        };
        if resolved.is_none() {
            errors.add(
                "customer_id",
                validate::invalid_selection_message("customer_id"),
            );
        }
        Ok(resolved)
    }
}

fn rule_violations(draft: &LocationDraft) -> ValidationErrors {
    match draft.validate() {
        Ok(()) => ValidationErrors::default(),
        Err(errors) => errors,
    }
}
