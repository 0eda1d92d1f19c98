//! Static per-field constraint registry.
//!
//! Records declare their constrained fields once, at type definition time,
//! usually through `#[derive(Constrained)]`. Validators read the registry
//! and the current field values; the record does nothing else.

use crate::constraint::ConstraintDescriptor;
use std::fmt;

/// A declared field and its ordered constraints.
#[derive(Debug, Clone, Copy)]
pub struct FieldDeclaration {
    /// Field name used in diagnostics.
    pub name: &'static str,
    /// Whether the field may hold no value (an `Option` field).
    pub optional: bool,
    /// Constraints in declaration order.
    pub constraints: &'static [ConstraintDescriptor],
}

impl FieldDeclaration {
    /// A field that always holds a value.
    #[must_use]
    pub const fn required(
        name: &'static str,
        constraints: &'static [ConstraintDescriptor],
    ) -> Self {
        Self {
            name,
            optional: false,
            constraints,
        }
    }

    /// A field whose constraints are skipped while it holds no value.
    #[must_use]
    pub const fn optional(
        name: &'static str,
        constraints: &'static [ConstraintDescriptor],
    ) -> Self {
        Self {
            name,
            optional: true,
            constraints,
        }
    }
}

/// Record type exposing its field declarations.
pub trait Constrained {
    /// Record type name used in diagnostics.
    const RECORD: &'static str;

    /// Declared integer fields in declaration order.
    const FIELDS: &'static [FieldDeclaration];

    /// Current value of the declared field `name`.
    fn field_value(&self, name: &str) -> Option<i64>;
}

/// A field of a concrete record: name, current value, and constraints.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    /// Field name used in diagnostics.
    pub name: &'static str,
    /// Current value.
    pub value: i64,
    /// Constraints in declaration order.
    pub constraints: &'static [ConstraintDescriptor],
}

/// A required field reported no value.
///
/// Raised when a record's `field_value` does not answer for a name its own
/// registry declares, so the field's constraints cannot be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingFieldValue {
    /// Record type that declared the field.
    pub record: &'static str,
    /// Declared field name.
    pub field: &'static str,
}

impl fmt::Display for MissingFieldValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}.{} is declared but reported no value",
            self.record, self.field
        )
    }
}

impl std::error::Error for MissingFieldValue {}

/// Describe every declared field of `record` that holds a value, in
/// declaration order.
///
/// Unset optional fields are skipped. A required field without a value is
/// an error.
pub fn describe_fields<T: Constrained>(
    record: &T,
) -> Result<Vec<FieldDescriptor>, MissingFieldValue> {
    let mut described = Vec::with_capacity(T::FIELDS.len());
    for field in T::FIELDS {
        match record.field_value(field.name) {
            Some(value) => described.push(FieldDescriptor {
                name: field.name,
                value,
                constraints: field.constraints,
            }),
            None if field.optional => {},
            None => {
                return Err(MissingFieldValue {
                    record: T::RECORD,
                    field: field.name,
                });
            },
        }
    }
    Ok(described)
}
