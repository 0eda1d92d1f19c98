//! Store behavior under checked insertion.

use fieldguard_domain::{DataModel, Validator};
use fieldguard_shared::{DiagnosticSink, MemoryDiagnosticSink};
use fieldguard_store::DataStore;
use fieldguard_validate_derive::Constrained;
use proptest::prelude::*;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Constrained)]
struct Level {
    #[constraint(minimum = 0, maximum = 10)]
    value: i32,
}

#[test]
fn rejected_scenario_reports_and_keeps_store_empty() {
    let sink = Arc::new(MemoryDiagnosticSink::default());
    let shared: Arc<dyn DiagnosticSink> = sink.clone();
    let mut store = DataStore::new(Validator::new(shared));

    let result = store.push_validated(DataModel::new(3, 30));

    assert!(result.is_err_and(|error| {
        error.violation().is_some_and(|violation| {
            violation.field == "number2" && violation.constraint == "MinimumInt"
        })
    }));
    assert!(store.is_empty());
    assert_eq!(
        sink.lines().last().map(String::as_str),
        Some("Check failed on MinimumInt (number2), value given: 30 checked against: 40")
    );
}

#[test]
fn accepted_scenario_pops_the_exact_record() {
    let mut store = DataStore::new(Validator::silent());
    let record = DataModel::new(10, 45);

    assert!(store.push_validated(record).is_ok());
    assert_eq!(store.pop(), Some(record));
    assert!(store.is_empty());
}

proptest! {
    #[test]
    fn only_valid_records_are_stored_and_pop_is_lifo(values in proptest::collection::vec(-5_i32..15, 0..32)) {
        let mut store = DataStore::new(Validator::silent());
        let mut accepted = Vec::new();
        for value in values {
            let before = store.len();
            let record = Level { value };
            match store.push_validated(record) {
                Ok(()) => accepted.push(record),
                Err(_) => prop_assert_eq!(store.len(), before),
            }
        }

        prop_assert_eq!(store.len(), accepted.len());
        while let Some(expected) = accepted.pop() {
            prop_assert_eq!(store.pop(), Some(expected));
        }
        prop_assert_eq!(store.pop(), None);
    }
}
