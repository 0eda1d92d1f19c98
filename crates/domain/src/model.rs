//! Constrained data records.
//!
//! Both records carry the same declarations: `number1` is capped at 30 and
//! `number2` must sit inside `[40, 50]`. They differ in who validates:
//! [`DataModel`] is always constructible and is checked by its consumer,
//! [`SelfValidatingDataModel`] refuses to exist unless it is valid.

use crate::errors::ConstructionError;
use crate::validator::Validator;
use fieldguard_shared::Validated;
use fieldguard_validate_derive::Constrained;
use serde::{Deserialize, Serialize};

/// Plain record checked externally (e.g. by a store before insertion).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Constrained)]
pub struct DataModel {
    /// At most 30.
    #[constraint(maximum = 30)]
    pub number1: i32,
    /// Between 40 and 50, inclusive.
    #[constraint(minimum = 40, maximum = 50)]
    pub number2: i32,
}

impl DataModel {
    /// Build a record. Never fails; validation is the consumer's job.
    pub const fn new(number1: i32, number2: i32) -> Self {
        Self { number1, number2 }
    }
}

/// Named field values for building a record; missing names default to `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataModelInput {
    /// Value for `number1`.
    pub number1: i32,
    /// Value for `number2`.
    pub number2: i32,
}

impl DataModelInput {
    /// Build a self-validating record from these values.
    pub fn into_self_validating(
        self,
        validator: &Validator,
    ) -> Result<SelfValidatingDataModel, ConstructionError> {
        SelfValidatingDataModel::try_new(self.number1, self.number2, validator)
    }
}

impl From<DataModelInput> for DataModel {
    fn from(input: DataModelInput) -> Self {
        Self::new(input.number1, input.number2)
    }
}

/// Record that validates itself while being constructed.
///
/// Fields are private and the only constructor is [`Self::try_new`], so every
/// instance a caller can hold has passed all of its constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Constrained)]
pub struct SelfValidatingDataModel {
    #[constraint(maximum = 30)]
    number1: i32,
    #[constraint(minimum = 40, maximum = 50)]
    number2: i32,
}

impl SelfValidatingDataModel {
    /// Construct the record, failing on the first violated constraint.
    pub fn try_new(
        number1: i32,
        number2: i32,
        validator: &Validator,
    ) -> Result<Self, ConstructionError> {
        validator
            .construct(Self { number1, number2 })
            .map(Validated::into_inner)
    }

    /// Value of `number1`.
    pub const fn number1(&self) -> i32 {
        self.number1
    }

    /// Value of `number2`.
    pub const fn number2(&self) -> i32 {
        self.number2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldguard_shared::{Constrained, ConstraintDescriptor};

    #[test]
    fn derived_registry_matches_declarations() {
        let fields = DataModel::FIELDS;
        let names: Vec<&str> = fields.iter().map(|field| field.name).collect();
        assert_eq!(names, ["number1", "number2"]);

        let number2: Vec<String> = fields
            .iter()
            .filter(|field| field.name == "number2")
            .flat_map(|field| field.constraints.iter())
            .map(ConstraintDescriptor::to_string)
            .collect();
        assert_eq!(number2, ["MinimumInt(40)", "MaximumInt(50)"]);
        assert_eq!(DataModel::RECORD, "DataModel");
    }

    #[test]
    fn data_model_is_constructible_even_when_invalid() {
        let model = DataModel::new(31, 30);
        assert_eq!(model.field_value("number1"), Some(31));
        assert_eq!(model.field_value("number2"), Some(30));
        assert_eq!(model.field_value("missing"), None);
    }

    #[test]
    fn input_defaults_missing_names_to_zero() -> Result<(), serde_json::Error> {
        let input: DataModelInput = serde_json::from_str(r#"{"number2": 44}"#)?;
        assert_eq!(DataModel::from(input), DataModel::new(0, 44));
        Ok(())
    }

    #[test]
    fn input_rejects_unknown_names() {
        let parsed = serde_json::from_str::<DataModelInput>(r#"{"number3": 1}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn self_validating_record_exposes_accepted_values() -> Result<(), ConstructionError> {
        let model = SelfValidatingDataModel::try_new(30, 50, &Validator::silent())?;
        assert_eq!(model.number1(), 30);
        assert_eq!(model.number2(), 50);
        Ok(())
    }

    #[test]
    fn self_validating_record_refuses_invalid_values() {
        let result = DataModelInput {
            number1: 31,
            number2: 44,
        }
        .into_self_validating(&Validator::silent());

        let Err(error) = result else {
            unreachable!("number1 exceeds its maximum");
        };
        assert_eq!(error.cause().field(), "number1");
        assert_eq!(
            error.violation().map(|violation| violation.constraint),
            Some("MaximumInt")
        );
    }
}
