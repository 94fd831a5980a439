//! `SQLite` implementation of [`CustomerRepository`].
//!
//! Read paths eager-load each customer's locations with a secondary query
//! grouped in memory, so representations always carry the `locations` field.

use std::collections::HashMap;
use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use clientele_app::ports::CustomerRepository;
use clientele_domain::customer::{Customer, CustomerDraft};
use clientele_domain::error::{ClienteleError, NotFoundError};
use clientele_domain::id::CustomerId;
use clientele_domain::location::Location;
use clientele_domain::validate::{self, ValidationErrors};

use crate::error::StorageError;
use crate::location_repo::LocationRow;

/// Wrapper for converting database rows into domain [`Customer`], locations
/// left empty for the caller to attach.
struct CustomerRow(Customer);

impl FromRow<'_, SqliteRow> for CustomerRow {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Customer {
            id: CustomerId::from_i64(row.try_get("id")?),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
            locations: Vec::new(),
        }))
    }
}

const INSERT: &str = "INSERT INTO customers (first_name, last_name, email, phone) VALUES (?, ?, ?, ?) RETURNING id, first_name, last_name, email, phone";
const SELECT_BY_ID: &str = "SELECT id, first_name, last_name, email, phone FROM customers WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, first_name, last_name, email, phone FROM customers ORDER BY id";
const UPDATE: &str = "UPDATE customers SET first_name = ?, last_name = ?, email = ?, phone = ? WHERE id = ? RETURNING id, first_name, last_name, email, phone";
const DELETE_BY_ID: &str = "DELETE FROM customers WHERE id = ?";
const COUNT_BY_ID: &str = "SELECT COUNT(*) FROM customers WHERE id = ?";
const COUNT_EMAIL: &str = "SELECT COUNT(*) FROM customers WHERE email = ?";
const COUNT_EMAIL_EXCEPT: &str = "SELECT COUNT(*) FROM customers WHERE email = ? AND id <> ?";
const SELECT_LOCATIONS_BY_CUSTOMER: &str = "SELECT id, address, city, state, zip, customer_id FROM locations WHERE customer_id = ? ORDER BY id";
const SELECT_ALL_LOCATIONS: &str =
    "SELECT id, address, city, state, zip, customer_id FROM locations ORDER BY id";

/// Map a write failure, turning a unique-constraint violation (a create or
/// update racing past the pre-check) into the same shape the uniqueness
/// pre-check produces. The unique index is the authoritative backstop.
fn map_write_err(err: sqlx::Error) -> ClienteleError {
    if err
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation())
    {
        let mut errors = ValidationErrors::default();
        errors.add("email", validate::taken_message("email"));
        return errors.into();
    }
    StorageError::from(err).into()
}

async fn load_locations(
    pool: &SqlitePool,
    customer: CustomerId,
) -> Result<Vec<Location>, ClienteleError> {
    let rows: Vec<LocationRow> = sqlx::query_as(SELECT_LOCATIONS_BY_CUSTOMER)
        .bind(customer.as_i64())
        .fetch_all(pool)
        .await
        .map_err(StorageError::from)?;

    Ok(rows.into_iter().map(|w| w.0).collect())
}

/// `SQLite`-backed customer repository.
pub struct SqliteCustomerRepository {
    pool: SqlitePool,
}

impl SqliteCustomerRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CustomerRepository for SqliteCustomerRepository {
    fn insert(
        &self,
        draft: CustomerDraft,
    ) -> impl Future<Output = Result<Customer, ClienteleError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: CustomerRow = sqlx::query_as(INSERT)
                .bind(&draft.first_name)
                .bind(&draft.last_name)
                .bind(&draft.email)
                .bind(&draft.phone)
                .fetch_one(&pool)
                .await
                .map_err(map_write_err)?;

            Ok(row.0)
        }
    }

    fn get_by_id(
        &self,
        id: CustomerId,
    ) -> impl Future<Output = Result<Option<Customer>, ClienteleError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<CustomerRow> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            match row {
                Some(CustomerRow(mut customer)) => {
                    customer.locations = load_locations(&pool, customer.id).await?;
                    Ok(Some(customer))
                }
                None => Ok(None),
            }
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Customer>, ClienteleError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<CustomerRow> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            let locations: Vec<LocationRow> = sqlx::query_as(SELECT_ALL_LOCATIONS)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            let mut by_customer: HashMap<i64, Vec<Location>> = HashMap::new();
            for LocationRow(location) in locations {
                by_customer
                    .entry(location.customer_id.as_i64())
                    .or_default()
                    .push(location);
            }

            Ok(rows
                .into_iter()
                .map(|CustomerRow(mut customer)| {
                    customer.locations = by_customer
                        .remove(&customer.id.as_i64())
                        .unwrap_or_default();
                    customer
                })
                .collect())
        }
    }

    fn update(
        &self,
        id: CustomerId,
        draft: CustomerDraft,
    ) -> impl Future<Output = Result<Customer, ClienteleError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<CustomerRow> = sqlx::query_as(UPDATE)
                .bind(&draft.first_name)
                .bind(&draft.last_name)
                .bind(&draft.email)
                .bind(&draft.phone)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(map_write_err)?;

            match row {
                Some(CustomerRow(mut customer)) => {
                    customer.locations = load_locations(&pool, customer.id).await?;
                    Ok(customer)
                }
                None => Err(NotFoundError {
                    entity: "Customer",
                    id: id.to_string(),
                }
                .into()),
            }
        }
    }

    fn delete(&self, id: CustomerId) -> impl Future<Output = Result<bool, ClienteleError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }

    fn exists(&self, id: CustomerId) -> impl Future<Output = Result<bool, ClienteleError>> + Send {
        let pool = self.pool.clone();
        async move {
            let count: i64 = sqlx::query_scalar(COUNT_BY_ID)
                .bind(id.as_i64())
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(count > 0)
        }
    }

    fn email_taken(
        &self,
        email: &str,
        except: Option<CustomerId>,
    ) -> impl Future<Output = Result<bool, ClienteleError>> + Send {
        let pool = self.pool.clone();
        let email = email.to_owned();
        async move {
            let count: i64 = match except {
                Some(id) => sqlx::query_scalar(COUNT_EMAIL_EXCEPT)
                    .bind(&email)
                    .bind(id.as_i64())
                    .fetch_one(&pool)
                    .await
                    .map_err(StorageError::from)?,
                None => sqlx::query_scalar(COUNT_EMAIL)
                    .bind(&email)
                    .fetch_one(&pool)
                    .await
                    .map_err(StorageError::from)?,
            };

            Ok(count > 0)
        }
    }
}
