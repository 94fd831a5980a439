//! # clientele-domain
//!
//! Pure domain model for the clientele customer-management service.
//!
//! ## Responsibilities
//! - Foundational types: typed integer identifiers, error conventions
//! - Define **Customers** (people who own zero or more locations)
//! - Define **Locations** (addresses, each belonging to exactly one customer)
//! - Provide the **validation engine**: data-driven per-field rule tables
//!   producing ordered, human-readable violation messages
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod validate;

pub mod customer;
pub mod location;
