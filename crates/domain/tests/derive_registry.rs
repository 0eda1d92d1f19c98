//! Integration coverage for `#[derive(Constrained)]` registries.

use fieldguard_domain::Validator;
use fieldguard_shared::{
    Constrained, ConstraintDescriptor, DiagnosticSink, IntConstraint, MemoryDiagnosticSink,
    MissingFieldValue, describe_fields,
};
use fieldguard_validate_derive::Constrained;
use std::sync::Arc;

#[derive(Debug)]
struct MultipleOf(i64);

impl IntConstraint for MultipleOf {
    fn name(&self) -> &'static str {
        "MultipleOf"
    }

    fn parameters(&self) -> String {
        self.0.to_string()
    }

    fn check(&self, value: i64) -> bool {
        value % self.0 == 0
    }
}

const MULTIPLE_OF_FIVE: MultipleOf = MultipleOf(5);
const FLOOR: i64 = -10;

#[derive(Debug, Constrained)]
struct Reading {
    #[constraint(field = "temperatureC", minimum = FLOOR, maximum = 60)]
    temperature: i16,
    #[constraint(custom = "MULTIPLE_OF_FIVE")]
    #[constraint(maximum = 100)]
    step: u8,
    offset: i64,
    #[constraint(minimum = 1)]
    retries: Option<u32>,
    label: String,
}

fn reading(temperature: i16, step: u8, retries: Option<u32>) -> Reading {
    Reading {
        temperature,
        step,
        offset: 0,
        retries,
        label: "rooftop".to_string(),
    }
}

fn capturing() -> (Validator, Arc<MemoryDiagnosticSink>) {
    let sink = Arc::new(MemoryDiagnosticSink::default());
    let shared: Arc<dyn DiagnosticSink> = sink.clone();
    (Validator::new(shared), sink)
}

#[test]
fn registry_lists_integer_fields_in_declaration_order() {
    let names: Vec<&str> = Reading::FIELDS.iter().map(|field| field.name).collect();
    assert_eq!(names, ["temperatureC", "step", "offset", "retries"]);
    assert_eq!(Reading::RECORD, "Reading");
}

#[test]
fn constraints_keep_written_order_across_attributes() {
    let step: Vec<String> = Reading::FIELDS
        .iter()
        .filter(|field| field.name == "step")
        .flat_map(|field| field.constraints.iter())
        .map(ConstraintDescriptor::to_string)
        .collect();
    assert_eq!(step, ["MultipleOf(5)", "MaximumInt(100)"]);
}

#[test]
fn non_integer_fields_are_not_registered() {
    let record = reading(20, 10, None);
    assert_eq!(record.field_value("label"), None);
    assert_eq!(record.label, "rooftop");
}

#[test]
fn only_option_fields_are_declared_optional() {
    let optional: Vec<&str> = Reading::FIELDS
        .iter()
        .filter(|field| field.optional)
        .map(|field| field.name)
        .collect();
    assert_eq!(optional, ["retries"]);
}

#[test]
fn unset_optional_fields_are_skipped() -> Result<(), MissingFieldValue> {
    let fields = describe_fields(&reading(20, 10, None))?;
    assert!(fields.iter().all(|field| field.name != "retries"));

    let fields = describe_fields(&reading(20, 10, Some(0)))?;
    assert!(fields.iter().any(|field| field.name == "retries" && field.value == 0));
    Ok(())
}

#[test]
fn renamed_field_and_negative_bound_reach_diagnostics() {
    let (validator, sink) = capturing();
    let result = validator.validate(&reading(-11, 10, None));

    assert!(result.is_err_and(|error| error.field() == "temperatureC"));
    assert_eq!(
        sink.lines(),
        ["Check failed on MinimumInt (temperatureC), value given: -11 checked against: -10"]
    );
}

#[test]
fn custom_rule_participates_in_validation() {
    let (validator, sink) = capturing();
    let result = validator.validate(&reading(20, 7, None));

    assert!(result.is_err_and(|error| {
        error
            .violation()
            .is_some_and(|violation| violation.constraint == "MultipleOf")
    }));
    assert_eq!(
        sink.lines().last().map(String::as_str),
        Some("Check failed on MultipleOf (step), value given: 7 checked against: 5")
    );
}

#[test]
fn fully_valid_reading_passes_every_check() {
    let (validator, sink) = capturing();
    assert!(validator.validate(&reading(25, 50, Some(3))).is_ok());
    // temperature: 2, step: 2, offset: 0, retries: 1
    assert_eq!(sink.lines().len(), 5);
}
