//! Customer service — use-cases for managing customers.

use clientele_domain::customer::{Customer, CustomerDraft};
use clientele_domain::error::{ClienteleError, NotFoundError};
use clientele_domain::id::CustomerId;
use clientele_domain::validate::{self, ValidationErrors};

use crate::ports::CustomerRepository;

/// Application service for customer CRUD operations.
pub struct CustomerService<R> {
    repo: R,
}

impl<R: CustomerRepository> CustomerService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all customers with their locations attached.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_customers(&self) -> Result<Vec<Customer>, ClienteleError> {
        self.repo.get_all().await
    }

    /// Create a new customer after running the full rule set, including the
    /// unscoped email uniqueness pre-check.
    ///
    /// # Errors
    ///
    /// Returns [`ClienteleError::Validation`] carrying every violation, or a
    /// storage error from the repository.
    pub async fn create_customer(&self, draft: CustomerDraft) -> Result<Customer, ClienteleError> {
        let mut errors = rule_violations(&draft);
        self.check_email_unique(&draft, None, &mut errors).await?;
        if !errors.is_empty() {
            return Err(errors.into());
        }
        self.repo.insert(draft).await
    }

    /// Look up a customer by id, locations included.
    ///
    /// # Errors
    ///
    /// Returns [`ClienteleError::NotFound`] when no customer with `id`
    /// exists, or a storage error from the repository.
    pub async fn get_customer(&self, id: CustomerId) -> Result<Customer, ClienteleError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Customer",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Update an existing customer. Existence is checked before validation,
    /// and the uniqueness rule excludes the customer's own email.
    ///
    /// # Errors
    ///
    /// Returns [`ClienteleError::NotFound`] when `id` does not exist,
    /// [`ClienteleError::Validation`] on rule violations, or a storage error.
    pub async fn update_customer(
        &self,
        id: CustomerId,
        draft: CustomerDraft,
    ) -> Result<Customer, ClienteleError> {
        if !self.repo.exists(id).await? {
            return Err(NotFoundError {
                entity: "Customer",
                id: id.to_string(),
            }
            .into());
        }
        let mut errors = rule_violations(&draft);
        self.check_email_unique(&draft, Some(id), &mut errors).await?;
        if !errors.is_empty() {
            return Err(errors.into());
        }
        self.repo.update(id, draft).await
    }

    /// Delete a customer by id.
    ///
    /// # Errors
    ///
    /// Returns [`ClienteleError::NotFound`] when `id` does not exist, or a
    /// storage error from the repository.
    pub async fn delete_customer(&self, id: CustomerId) -> Result<(), ClienteleError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(NotFoundError {
                entity: "Customer",
                id: id.to_string(),
            }
            .into())
        }
    }

    /// Append the uniqueness violation when another customer already uses
    /// the submitted email. Skipped for empty values, which the required
    /// rule already covers.
    async fn check_email_unique(
        &self,
        draft: &CustomerDraft,
        except: Option<CustomerId>,
        errors: &mut ValidationErrors,
    ) -> Result<(), ClienteleError> {
        if !draft.email.is_empty() && self.repo.email_taken(&draft.email, except).await? {
            errors.add("email", validate::taken_message("email"));
        }
        Ok(())
    }
}

fn rule_violations(draft: &CustomerDraft) -> ValidationErrors {
    match draft.validate() {
        Ok(()) => ValidationErrors::default(),
        Err(errors) => errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};

    #[derive(Default, Clone)]
    struct InMemoryCustomerRepo {
        state: Arc<Mutex<RepoState>>,
    }

    #[derive(Default)]
    struct RepoState {
        next_id: i64,
        rows: BTreeMap<i64, Customer>,
    }

    impl CustomerRepository for InMemoryCustomerRepo {
        async fn insert(&self, draft: CustomerDraft) -> Result<Customer, ClienteleError> {
            let mut state = self.state.lock().unwrap();
            state.next_id += 1;
            let customer = Customer {
                id: CustomerId::from_i64(state.next_id),
                first_name: draft.first_name,
                last_name: draft.last_name,
                email: draft.email,
                phone: draft.phone,
                locations: Vec::new(),
            };
            state.rows.insert(customer.id.as_i64(), customer.clone());
            Ok(customer)
        }

        async fn get_by_id(&self, id: CustomerId) -> Result<Option<Customer>, ClienteleError> {
            let state = self.state.lock().unwrap();
            Ok(state.rows.get(&id.as_i64()).cloned())
        }

        async fn get_all(&self) -> Result<Vec<Customer>, ClienteleError> {
            let state = self.state.lock().unwrap();
            Ok(state.rows.values().cloned().collect())
        }

        async fn update(
            &self,
            id: CustomerId,
            draft: CustomerDraft,
        ) -> Result<Customer, ClienteleError> {
            let mut state = self.state.lock().unwrap();
            let customer = Customer {
                id,
                first_name: draft.first_name,
                last_name: draft.last_name,
                email: draft.email,
                phone: draft.phone,
                locations: Vec::new(),
            };
            state.rows.insert(id.as_i64(), customer.clone());
            Ok(customer)
        }

        async fn delete(&self, id: CustomerId) -> Result<bool, ClienteleError> {
            let mut state = self.state.lock().unwrap();
            Ok(state.rows.remove(&id.as_i64()).is_some())
        }

        async fn exists(&self, id: CustomerId) -> Result<bool, ClienteleError> {
            let state = self.state.lock().unwrap();
            Ok(state.rows.contains_key(&id.as_i64()))
        }

        async fn email_taken(
            &self,
            email: &str,
            except: Option<CustomerId>,
        ) -> Result<bool, ClienteleError> {
            let state = self.state.lock().unwrap();
            Ok(state
                .rows
                .values()
                .any(|c| c.email == email && Some(c.id) != except))
        }
    }

    fn make_service() -> CustomerService<InMemoryCustomerRepo> {
        CustomerService::new(InMemoryCustomerRepo::default())
    }

    fn valid_draft() -> CustomerDraft {
        CustomerDraft {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
        }
    }

    #[tokio::test]
    async fn should_create_customer_when_valid() {
        let svc = make_service();

        let created = svc.create_customer(valid_draft()).await.unwrap();
        assert_eq!(created.id.as_i64(), 1);
        assert!(created.locations.is_empty());

        let fetched = svc.get_customer(created.id).await.unwrap();
        assert_eq!(fetched.email, "jane.doe@example.com");
    }

    #[tokio::test]
    async fn should_reject_create_when_fields_empty() {
        let svc = make_service();

        let result = svc.create_customer(CustomerDraft::default()).await;
        let Err(ClienteleError::Validation(errors)) = result else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.fields().count(), 4);
    }

    #[tokio::test]
    async fn should_reject_create_when_email_taken() {
        let svc = make_service();
        svc.create_customer(valid_draft()).await.unwrap();

        let duplicate = CustomerDraft {
            first_name: "John".to_string(),
            ..valid_draft()
        };
        let result = svc.create_customer(duplicate).await;
        let Err(ClienteleError::Validation(errors)) = result else {
            panic!("expected validation failure");
        };
        assert_eq!(
            errors.field("email"),
            ["The email has already been taken."]
        );
    }

    #[tokio::test]
    async fn should_allow_update_keeping_own_email() {
        let svc = make_service();
        let created = svc.create_customer(valid_draft()).await.unwrap();

        let updated = svc
            .update_customer(
                created.id,
                CustomerDraft {
                    first_name: "Janet".to_string(),
                    ..valid_draft()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.first_name, "Janet");
        assert_eq!(updated.email, "jane.doe@example.com");
    }

    #[tokio::test]
    async fn should_reject_update_to_another_customers_email() {
        let svc = make_service();
        svc.create_customer(valid_draft()).await.unwrap();
        let other = svc
            .create_customer(CustomerDraft {
                email: "john.doe@example.com".to_string(),
                ..valid_draft()
            })
            .await
            .unwrap();

        let result = svc.update_customer(other.id, valid_draft()).await;
        let Err(ClienteleError::Validation(errors)) = result else {
            panic!("expected validation failure");
        };
        assert_eq!(
            errors.field("email"),
            ["The email has already been taken."]
        );
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_customer() {
        let svc = make_service();
        let result = svc
            .update_customer(CustomerId::from_i64(999), valid_draft())
            .await;
        assert!(matches!(result, Err(ClienteleError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_before_validating_on_update() {
        let svc = make_service();
        let result = svc
            .update_customer(CustomerId::from_i64(999), CustomerDraft::default())
            .await;
        assert!(matches!(result, Err(ClienteleError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_when_customer_missing() {
        let svc = make_service();
        let result = svc.get_customer(CustomerId::from_i64(1)).await;
        assert!(matches!(result, Err(ClienteleError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_all_customers() {
        let svc = make_service();
        svc.create_customer(valid_draft()).await.unwrap();
        svc.create_customer(CustomerDraft {
            email: "john.doe@example.com".to_string(),
            ..valid_draft()
        })
        .await
        .unwrap();

        let all = svc.list_customers().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn should_delete_customer() {
        let svc = make_service();
        let created = svc.create_customer(valid_draft()).await.unwrap();

        svc.delete_customer(created.id).await.unwrap();

        let result = svc.get_customer(created.id).await;
        assert!(matches!(result, Err(ClienteleError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_customer() {
        let svc = make_service();
        let result = svc.delete_customer(CustomerId::from_i64(999)).await;
        assert!(matches!(result, Err(ClienteleError::NotFound(_))));
    }
}
