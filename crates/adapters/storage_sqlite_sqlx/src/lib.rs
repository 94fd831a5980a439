//! # clientele-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `clientele-app::ports::storage`
//! - Manage the `SQLite` connection pool lifecycle (foreign keys enabled)
//! - Run database migrations (sqlx embedded migrations)
//! - Map between domain types and database rows
//! - Map constraint violations (unique email, dangling `customer_id`) to the
//!   same validation shape the pre-checks produce, so a lost race surfaces
//!   identically to a failed pre-check
//!
//! ## Dependency rule
//! Depends on `clientele-app` (for port traits) and `clientele-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

pub mod customer_repo;
pub mod error;
pub mod location_repo;
pub mod pool;

pub use customer_repo::SqliteCustomerRepository;
pub use error::StorageError;
pub use location_repo::SqliteLocationRepository;
pub use pool::{Config, Database};
