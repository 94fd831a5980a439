//! # clientele-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON REST API (`/customers`, `/locations`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses: 200/201/204 on success,
//!   404 with a fixed message body for missing records, 422 with the
//!   per-field violation map for invalid input
//!
//! ## Dependency rule
//! Depends on `clientele-app` (for port traits and services) and
//! `clientele-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
