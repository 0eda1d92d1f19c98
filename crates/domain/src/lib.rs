//! # fieldguard-domain
//!
//! Constraint validation and the constrained data records it guards.
//!
//! - **Validator** - walks a record's field registry, short-circuits on the
//!   first failing constraint, and writes one diagnostic line per check
//! - **Records** - `DataModel` (checked by its consumer) and
//!   `SelfValidatingDataModel` (checked while being constructed)
//! - **Errors** - `ConstraintViolation`, `ValidationError`, `ConstructionError`
//!
//! ## Dependency Rules
//!
//! - Depends only on the `shared` and `validate-derive` crates
//! - No storage, no configuration, no I/O beyond the injected diagnostic sink

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

// Re-export shared types for convenience
pub use fieldguard_shared::shared_crate_version;

// =============================================================================
// DOMAIN MODULES
// =============================================================================

pub mod errors;
pub mod model;
pub mod validator;

pub use errors::{ConstraintViolation, ConstructionError, ValidationError};
pub use model::{DataModel, DataModelInput, SelfValidatingDataModel};
pub use validator::Validator;

/// Returns the domain crate version.
#[must_use]
pub const fn domain_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// =============================================================================
// TESTS
// =============================================================================
