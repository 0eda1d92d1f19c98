//! Validation error types mapped into `ErrorEnvelope`.

use fieldguard_shared::{ConstraintDescriptor, ErrorCode, ErrorEnvelope, MissingFieldValue};
use std::fmt;

/// A field value failed one attached constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintViolation {
    /// Record type that carried the field.
    pub record: &'static str,
    /// Field name that failed.
    pub field: &'static str,
    /// Constraint kind label (e.g. `MinimumInt`).
    pub constraint: &'static str,
    /// Value given.
    pub value: i64,
    /// Parameters the value was checked against.
    pub parameters: String,
}

impl ConstraintViolation {
    /// Build a violation for `constraint` failing on `value`.
    #[must_use]
    pub fn new(
        record: &'static str,
        field: &'static str,
        constraint: &ConstraintDescriptor,
        value: i64,
    ) -> Self {
        Self {
            record,
            field,
            constraint: constraint.name(),
            value,
            parameters: constraint.parameters(),
        }
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}.{} failed {}: value given: {} checked against: {}",
            self.record, self.field, self.constraint, self.value, self.parameters
        )
    }
}

impl std::error::Error for ConstraintViolation {}

impl From<ConstraintViolation> for ErrorEnvelope {
    fn from(error: ConstraintViolation) -> Self {
        let message = error.to_string();
        Self::expected(ErrorCode::new("domain", "constraint_violation"), message)
            .with_metadata("record", error.record)
            .with_metadata("field", error.field)
            .with_metadata("constraint", error.constraint)
            .with_metadata("value", error.value.to_string())
            .with_metadata("parameters", error.parameters)
    }
}

/// A record failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A field value failed one attached constraint.
    Violation(ConstraintViolation),
    /// A required field reported no value to check.
    MissingValue(MissingFieldValue),
}

impl ValidationError {
    /// Record type that failed.
    #[must_use]
    pub const fn record(&self) -> &'static str {
        match self {
            Self::Violation(violation) => violation.record,
            Self::MissingValue(missing) => missing.record,
        }
    }

    /// Field that failed.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Violation(violation) => violation.field,
            Self::MissingValue(missing) => missing.field,
        }
    }

    /// The failed constraint, if a value was checked at all.
    #[must_use]
    pub const fn violation(&self) -> Option<&ConstraintViolation> {
        match self {
            Self::Violation(violation) => Some(violation),
            Self::MissingValue(_) => None,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Violation(violation) => fmt::Display::fmt(violation, formatter),
            Self::MissingValue(missing) => fmt::Display::fmt(missing, formatter),
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Violation(violation) => Some(violation),
            Self::MissingValue(missing) => Some(missing),
        }
    }
}

impl From<ConstraintViolation> for ValidationError {
    fn from(violation: ConstraintViolation) -> Self {
        Self::Violation(violation)
    }
}

impl From<MissingFieldValue> for ValidationError {
    fn from(missing: MissingFieldValue) -> Self {
        Self::MissingValue(missing)
    }
}

impl From<ValidationError> for ErrorEnvelope {
    fn from(error: ValidationError) -> Self {
        match error {
            ValidationError::Violation(violation) => violation.into(),
            ValidationError::MissingValue(missing) => Self::invariant(
                ErrorCode::new("domain", "missing_field_value"),
                missing.to_string(),
            )
            .with_metadata("record", missing.record)
            .with_metadata("field", missing.field),
        }
    }
}

/// A self-validating record could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// A field broke the record's invariants during construction.
    InvariantViolation(ValidationError),
}

impl ConstructionError {
    /// The validation failure that stopped construction.
    #[must_use]
    pub const fn cause(&self) -> &ValidationError {
        match self {
            Self::InvariantViolation(error) => error,
        }
    }

    /// The failed constraint, if a value was checked at all.
    #[must_use]
    pub const fn violation(&self) -> Option<&ConstraintViolation> {
        self.cause().violation()
    }
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvariantViolation(error) => write!(
                formatter,
                "{} cannot be constructed: {error}",
                error.record()
            ),
        }
    }
}

impl std::error::Error for ConstructionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvariantViolation(error) => Some(error),
        }
    }
}

impl From<ConstructionError> for ErrorEnvelope {
    fn from(error: ConstructionError) -> Self {
        let message = error.to_string();
        let ConstructionError::InvariantViolation(cause) = error;
        let envelope = Self::invariant(ErrorCode::new("domain", "construction_invariant"), message)
            .with_metadata("record", cause.record())
            .with_metadata("field", cause.field());
        match cause {
            ValidationError::Violation(violation) => envelope
                .with_metadata("constraint", violation.constraint)
                .with_metadata("value", violation.value.to_string())
                .with_metadata("parameters", violation.parameters),
            ValidationError::MissingValue(_) => envelope,
        }
    }
}
