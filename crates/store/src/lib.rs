//! # fieldguard-store
//!
//! Last-in-first-out record store.
//!
//! Every insertion names its trust level:
//!
//! - [`DataStore::push_validated`] runs the validator and only appends records
//!   whose constraints all pass. A record that fails a constraint, or leaves
//!   a required field without a value, is dropped and the error is returned
//!   to the caller.
//! - [`DataStore::push_trusted`] appends without checking.
//!
//! [`DataStore::check`] runs the same validation without inserting, for
//! callers that treat a violation as fatal on their own terms. Records
//! already held are never re-validated.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use fieldguard_domain::{ValidationError, Validator};
use fieldguard_shared::Constrained;

/// Ordered collection of records, popped in reverse insertion order.
///
/// Mutation takes `&mut self`; share a store across threads only behind a
/// lock that serializes `push_*` and `pop`.
#[derive(Debug, Clone)]
pub struct DataStore<T> {
    records: Vec<T>,
    validator: Validator,
}

impl<T: Constrained> DataStore<T> {
    /// Create an empty store that checks records with `validator`.
    #[must_use]
    pub const fn new(validator: Validator) -> Self {
        Self {
            records: Vec::new(),
            validator,
        }
    }

    /// Validate `record` and append it when every constraint passes.
    pub fn push_validated(&mut self, record: T) -> Result<(), ValidationError> {
        if let Err(error) = self.validator.validate(&record) {
            tracing::info!(
                event = "store.push.rejected",
                record = T::RECORD,
                field = error.field(),
                error = %error,
                len = self.records.len(),
                "record rejected"
            );
            return Err(error);
        }

        self.records.push(record);
        tracing::debug!(
            event = "store.push.accepted",
            record = T::RECORD,
            len = self.records.len(),
            "record accepted"
        );
        Ok(())
    }

    /// Append `record` without validating it.
    pub fn push_trusted(&mut self, record: T) {
        self.records.push(record);
        tracing::debug!(
            event = "store.push.trusted",
            record = T::RECORD,
            len = self.records.len(),
            "record appended without validation"
        );
    }

    /// Validate `record` without inserting it.
    pub fn check(&self, record: &T) -> Result<(), ValidationError> {
        self.validator.validate(record)
    }

    /// Remove and return the most recently pushed record.
    pub fn pop(&mut self) -> Option<T> {
        let record = self.records.pop();
        tracing::debug!(
            event = "store.pop",
            record = T::RECORD,
            found = record.is_some(),
            len = self.records.len(),
            "record popped"
        );
        record
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Constrained> Default for DataStore<T> {
    fn default() -> Self {
        Self::new(Validator::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldguard_domain::DataModel;
    use fieldguard_shared::{ConstraintDescriptor, FieldDeclaration, MissingFieldValue};

    fn store() -> DataStore<DataModel> {
        DataStore::new(Validator::silent())
    }

    #[test]
    fn empty_store_pops_none() {
        let mut store = store();
        assert!(store.is_empty());
        assert_eq!(store.pop(), None);
    }

    #[test]
    fn validated_pushes_pop_in_reverse_order() -> Result<(), ValidationError> {
        let mut store = store();
        let first = DataModel::new(1, 41);
        let second = DataModel::new(2, 42);
        let third = DataModel::new(3, 43);
        store.push_validated(first)?;
        store.push_validated(second)?;
        store.push_validated(third)?;

        assert_eq!(store.len(), 3);
        assert_eq!(store.pop(), Some(third));
        assert_eq!(store.pop(), Some(second));
        assert_eq!(store.pop(), Some(first));
        assert_eq!(store.pop(), None);
        Ok(())
    }

    #[test]
    fn rejected_push_leaves_store_unchanged() {
        let mut store = store();
        let result = store.push_validated(DataModel::new(3, 30));

        assert!(result.is_err_and(|error| error.field() == "number2"));
        assert!(store.is_empty());
        assert_eq!(store.pop(), None);
    }

    #[test]
    fn trusted_push_skips_validation() {
        let mut store = store();
        let invalid = DataModel::new(31, 0);
        assert!(store.check(&invalid).is_err());

        store.push_trusted(invalid);
        assert_eq!(store.len(), 1);
        assert_eq!(store.pop(), Some(invalid));
    }

    #[test]
    fn check_does_not_insert() {
        let store = store();
        assert!(store.check(&DataModel::new(10, 45)).is_ok());
        assert!(store.is_empty());
    }

    /// Declares `numberOne` while its accessor only knows `number1`.
    #[derive(Debug, PartialEq, Eq)]
    struct Handwritten {
        number1: i64,
    }

    impl Constrained for Handwritten {
        const RECORD: &'static str = "Handwritten";
        const FIELDS: &'static [FieldDeclaration] = &[FieldDeclaration::required(
            "numberOne",
            &[ConstraintDescriptor::maximum(30)],
        )];

        fn field_value(&self, name: &str) -> Option<i64> {
            (name == "number1").then_some(self.number1)
        }
    }

    #[test]
    fn record_with_unreachable_required_field_is_not_stored() {
        let mut store = DataStore::new(Validator::silent());
        let result = store.push_validated(Handwritten { number1: 999 });

        assert_eq!(
            result,
            Err(ValidationError::MissingValue(MissingFieldValue {
                record: "Handwritten",
                field: "numberOne",
            }))
        );
        assert!(store.is_empty());
        assert_eq!(store.pop(), None);
    }
}
