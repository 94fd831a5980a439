//! # clientele-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `CustomerRepository` — CRUD plus uniqueness/existence lookups
//!   - `LocationRepository` — CRUD for locations
//! - Define **driving/inbound ports** as use-case structs:
//!   - `CustomerService` — list, create, get, update, delete customers
//!   - `LocationService` — the same five operations for locations
//! - Run the store-backed validation rules (`unique`, `exists`) through the
//!   ports and merge their violations with the in-memory rule results
//!
//! ## Dependency rule
//! Depends on `clientele-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
