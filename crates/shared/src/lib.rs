//! # fieldguard-shared
//!
//! Shared foundations for the fieldguard workspace.
//!
//! This crate provides the types every other crate builds on:
//!
//! - Result and error envelope types
//! - The integer constraint capability (`IntConstraint`, `MinimumInt`, `MaximumInt`)
//! - The static per-field constraint registry (`Constrained`, `FieldDeclaration`)
//! - Diagnostic line rendering and sinks
//!
//! ## Design Principles
//!
//! 1. **No workspace dependencies** - This crate only depends on external crates
//! 2. **No reflection** - Field metadata is declared once, at type definition time
//! 3. **Pure checks** - Constraints never mutate the value or themselves

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod constraint;
pub mod diagnostics;
pub mod errors;
pub mod invariants;
pub mod result;
pub mod validation;

pub use constraint::{ConstraintDescriptor, IntConstraint, MaximumInt, MinimumInt};
pub use diagnostics::{
    CheckDiagnostic, CheckOutcome, DiagnosticFormat, DiagnosticSink, MemoryDiagnosticSink,
    SilentDiagnosticSink, StderrDiagnosticSink, StdoutDiagnosticSink,
};
pub use errors::{ErrorClass, ErrorCode, ErrorEnvelope, ErrorKind, ErrorMetadata};
pub use invariants::Validated;
pub use result::Result;
pub use validation::{
    Constrained, FieldDeclaration, FieldDescriptor, MissingFieldValue, describe_fields,
};

/// Returns the shared crate version.
#[must_use]
pub const fn shared_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// =============================================================================
// TESTS
// =============================================================================
