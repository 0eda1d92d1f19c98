//! Proof wrapper for values whose invariants have been checked.

/// Marks a value that a validation gate has accepted.
///
/// The gates are `Validator::construct` for constrained records and
/// `FieldguardConfig::validate` for config. The marker is a convention, not
/// an enforced guarantee: [`Validated::new`] checks nothing, so code outside
/// those gates should not call it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated<T>(T);

impl<T> Validated<T> {
    /// Wrap `value` as-is. Performs no checks; call only after validating.
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Borrow the inner value.
    pub const fn as_ref(&self) -> &T {
        &self.0
    }

    /// Consume and return the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Validated<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
