//! `SQLite` implementation of [`LocationRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use clientele_app::ports::LocationRepository;
use clientele_domain::error::{ClienteleError, NotFoundError};
use clientele_domain::id::{CustomerId, LocationId};
use clientele_domain::location::{Location, LocationDraft};
use clientele_domain::validate::{self, ValidationErrors};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Location`].
pub(crate) struct LocationRow(pub(crate) Location);

impl FromRow<'_, SqliteRow> for LocationRow {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Location {
            id: LocationId::from_i64(row.try_get("id")?),
            address: row.try_get("address")?,
            city: row.try_get("city")?,
            state: row.try_get("state")?,
            zip: row.try_get("zip")?,
            customer_id: CustomerId::from_i64(row.try_get("customer_id")?),
        }))
    }
}

const INSERT: &str = "INSERT INTO locations (address, city, state, zip, customer_id) VALUES (?, ?, ?, ?, ?) RETURNING id, address, city, state, zip, customer_id";
const SELECT_BY_ID: &str = "SELECT id, address, city, state, zip, customer_id FROM locations WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, address, city, state, zip, customer_id FROM locations ORDER BY id";
const UPDATE: &str = "UPDATE locations SET address = ?, city = ?, state = ?, zip = ?, customer_id = ? WHERE id = ? RETURNING id, address, city, state, zip, customer_id";
const DELETE_BY_ID: &str = "DELETE FROM locations WHERE id = ?";

/// Map a write failure, turning a foreign-key violation (a customer deleted
/// between the pre-check and the write) into the same `exists`-rule shape
/// the pre-check produces.
fn map_write_err(err: sqlx::Error) -> ClienteleError {
    if err
        .as_database_error()
        .is_some_and(|db| db.is_foreign_key_violation())
    {
        let mut errors = ValidationErrors::default();
        errors.add(
            "customer_id",
            validate::invalid_selection_message("customer_id"),
        );
        return errors.into();
    }
    StorageError::from(err).into()
}

/// `SQLite`-backed location repository.
pub struct SqliteLocationRepository {
    pool: SqlitePool,
}

impl SqliteLocationRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl LocationRepository for SqliteLocationRepository {
    fn insert(
        &self,
        draft: LocationDraft,
        customer: CustomerId,
    ) -> impl Future<Output = Result<Location, ClienteleError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: LocationRow = sqlx::query_as(INSERT)
                .bind(&draft.address)
                .bind(&draft.city)
                .bind(&draft.state)
                .bind(&draft.zip)
                .bind(customer.as_i64())
                .fetch_one(&pool)
                .await
                .map_err(map_write_err)?;

            Ok(row.0)
        }
    }

    fn get_by_id(
        &self,
        id: LocationId,
    ) -> impl Future<Output = Result<Option<Location>, ClienteleError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<LocationRow> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Location>, ClienteleError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<LocationRow> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        id: LocationId,
        draft: LocationDraft,
        customer: CustomerId,
    ) -> impl Future<Output = Result<Location, ClienteleError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<LocationRow> = sqlx::query_as(UPDATE)
                .bind(&draft.address)
                .bind(&draft.city)
                .bind(&draft.state)
                .bind(&draft.zip)
                .bind(customer.as_i64())
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(map_write_err)?;

            row.map(|w| w.0).ok_or_else(|| {
                NotFoundError {
                    entity: "Location",
                    id: id.to_string(),
                }
                .into()
            })
        }
    }

    fn delete(&self, id: LocationId) -> impl Future<Output = Result<bool, ClienteleError>> + Send {
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
}
