//! Constraint validator.
//!
//! Walks a record's field registry in declaration order and evaluates every
//! attached constraint, stopping at the first failure. One diagnostic line
//! is written per evaluated constraint, the failing one included.
//!
//! Two entry points share that traversal:
//! - [`Validator::validate`] checks a record that already exists (external
//!   validation, used by stores before accepting a record).
//! - [`Validator::construct`] is the construction gate for self-validating
//!   records: a failing candidate is consumed and never handed back.

use crate::errors::{ConstraintViolation, ConstructionError, ValidationError};
use fieldguard_shared::{
    CheckDiagnostic, CheckOutcome, Constrained, DiagnosticFormat, DiagnosticSink,
    SilentDiagnosticSink, StdoutDiagnosticSink, Validated, describe_fields,
};
use std::fmt;
use std::sync::Arc;

/// Evaluates field constraints and reports each check to a diagnostic sink.
#[derive(Clone)]
pub struct Validator {
    sink: Arc<dyn DiagnosticSink>,
    format: DiagnosticFormat,
}

impl Validator {
    /// Create a validator writing text diagnostics to `sink`.
    #[must_use]
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            sink,
            format: DiagnosticFormat::Text,
        }
    }

    /// Validator writing text diagnostics to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(Arc::new(StdoutDiagnosticSink))
    }

    /// Validator that discards diagnostics.
    #[must_use]
    pub fn silent() -> Self {
        Self::new(Arc::new(SilentDiagnosticSink))
    }

    /// Set the diagnostic line format.
    #[must_use]
    pub const fn with_format(mut self, format: DiagnosticFormat) -> Self {
        self.format = format;
        self
    }

    /// Diagnostic line format in use.
    #[must_use]
    pub const fn format(&self) -> DiagnosticFormat {
        self.format
    }

    /// Check every constraint on every field, stopping at the first failure.
    ///
    /// A required field that reports no value fails before any check runs.
    pub fn validate<T: Constrained>(&self, record: &T) -> Result<(), ValidationError> {
        let fields = describe_fields(record).inspect_err(|missing| {
            tracing::error!(
                event = "validator.missing_value",
                record = missing.record,
                field = missing.field,
                "declared field reported no value"
            );
        })?;

        for field in fields {
            for constraint in field.constraints {
                let passed = constraint.check(field.value);
                let parameters = constraint.parameters();
                self.emit(&CheckDiagnostic {
                    outcome: CheckOutcome::from_passed(passed),
                    constraint: constraint.name(),
                    field: field.name,
                    value: field.value,
                    parameters: &parameters,
                });

                if !passed {
                    tracing::warn!(
                        event = "validator.check",
                        record = T::RECORD,
                        field = field.name,
                        constraint = constraint.name(),
                        value = field.value,
                        parameters = %parameters,
                        "constraint failed"
                    );
                    return Err(ConstraintViolation::new(
                        T::RECORD,
                        field.name,
                        constraint,
                        field.value,
                    )
                    .into());
                }

                tracing::debug!(
                    event = "validator.check",
                    record = T::RECORD,
                    field = field.name,
                    constraint = constraint.name(),
                    value = field.value,
                    parameters = %parameters,
                    "constraint passed"
                );
            }
        }

        Ok(())
    }

    /// Admit `candidate` only if it satisfies every constraint.
    pub fn construct<T: Constrained>(
        &self,
        candidate: T,
    ) -> Result<Validated<T>, ConstructionError> {
        match self.validate(&candidate) {
            Ok(()) => Ok(Validated::new(candidate)),
            Err(error) => Err(ConstructionError::InvariantViolation(error)),
        }
    }

    fn emit(&self, diagnostic: &CheckDiagnostic<'_>) {
        self.sink.write_line(&diagnostic.render(self.format));
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Validator")
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}
