//! Integer constraint capability and the standard bound checks.
//!
//! A constraint is a pure rule evaluated against a single field value. The
//! two standard variants are inclusive bounds; anything else plugs in
//! through [`IntConstraint`] and [`ConstraintDescriptor::Custom`].

use std::fmt;

/// Check an integer value against a rule.
///
/// Implementations must be pure: `check` never mutates the value or the
/// constraint, and is defined for every `i64`.
pub trait IntConstraint: fmt::Debug + Send + Sync {
    /// Constraint kind label used in diagnostics (e.g. `MaximumInt`).
    fn name(&self) -> &'static str;

    /// Declared parameters, rendered as text for diagnostics.
    fn parameters(&self) -> String;

    /// Returns true when `value` satisfies the rule.
    fn check(&self, value: i64) -> bool;
}

/// Inclusive lower bound: passes iff `value >= threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinimumInt {
    threshold: i64,
}

impl MinimumInt {
    /// Create a lower bound.
    pub const fn new(threshold: i64) -> Self {
        Self { threshold }
    }

    /// Returns the inclusive lower bound.
    pub const fn threshold(self) -> i64 {
        self.threshold
    }
}

impl IntConstraint for MinimumInt {
    fn name(&self) -> &'static str {
        "MinimumInt"
    }

    fn parameters(&self) -> String {
        self.threshold.to_string()
    }

    fn check(&self, value: i64) -> bool {
        value >= self.threshold
    }
}

/// Inclusive upper bound: passes iff `value <= threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaximumInt {
    threshold: i64,
}

impl MaximumInt {
    /// Create an upper bound.
    pub const fn new(threshold: i64) -> Self {
        Self { threshold }
    }

    /// Returns the inclusive upper bound.
    pub const fn threshold(self) -> i64 {
        self.threshold
    }
}

impl IntConstraint for MaximumInt {
    fn name(&self) -> &'static str {
        "MaximumInt"
    }

    fn parameters(&self) -> String {
        self.threshold.to_string()
    }

    fn check(&self, value: i64) -> bool {
        value <= self.threshold
    }
}

/// A constraint attached to a field: kind plus immutable parameters.
///
/// Every constructor is `const` so field registries can be assembled at
/// compile time by `#[derive(Constrained)]`.
#[derive(Debug, Clone, Copy)]
pub enum ConstraintDescriptor {
    /// Inclusive lower bound.
    Minimum(MinimumInt),
    /// Inclusive upper bound.
    Maximum(MaximumInt),
    /// User-supplied rule.
    Custom(&'static dyn IntConstraint),
}

impl ConstraintDescriptor {
    /// Attach an inclusive lower bound.
    pub const fn minimum(threshold: i64) -> Self {
        Self::Minimum(MinimumInt::new(threshold))
    }

    /// Attach an inclusive upper bound.
    pub const fn maximum(threshold: i64) -> Self {
        Self::Maximum(MaximumInt::new(threshold))
    }

    /// Attach a user-supplied rule.
    pub const fn custom(constraint: &'static dyn IntConstraint) -> Self {
        Self::Custom(constraint)
    }

    /// Borrow the underlying rule.
    #[must_use]
    pub fn constraint(&self) -> &dyn IntConstraint {
        match self {
            Self::Minimum(minimum) => minimum,
            Self::Maximum(maximum) => maximum,
            Self::Custom(custom) => *custom,
        }
    }

    /// Constraint kind label.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.constraint().name()
    }

    /// Declared parameters as text.
    #[must_use]
    pub fn parameters(&self) -> String {
        self.constraint().parameters()
    }

    /// Evaluate the rule against `value`.
    #[must_use]
    pub fn check(&self, value: i64) -> bool {
        self.constraint().check(value)
    }
}

impl fmt::Display for ConstraintDescriptor {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}({})", self.name(), self.parameters())
    }
}
