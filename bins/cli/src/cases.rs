//! Replay of the two demonstration cases.
//!
//! Case 1 pushes an invalid plain record through the checked store. Case 2
//! builds a self-validating record from invalid values. A final pop shows
//! the store never admitted the rejected record.

use crate::error::CliError;
use fieldguard_domain::{DataModel, DataModelInput, Validator};
use fieldguard_shared::ErrorEnvelope;
use fieldguard_store::DataStore;
use std::io::Write;

/// Values pushed through the checked store: `number2` is below its minimum.
pub const CHECKED_PUSH_INPUT: DataModelInput = DataModelInput {
    number1: 3,
    number2: 30,
};

/// Values given to the self-validating record: `number1` exceeds its maximum.
pub const SELF_VALIDATING_INPUT: DataModelInput = DataModelInput {
    number1: 31,
    number2: 44,
};

/// What each case ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseSummary {
    pub checked_push_accepted: bool,
    pub construction_succeeded: bool,
    pub store_empty_after_pop: bool,
}

pub fn run_cases(
    validator: &Validator,
    strict: bool,
    out: &mut dyn Write,
) -> Result<CaseSummary, CliError> {
    let mut store: DataStore<DataModel> = DataStore::new(validator.clone());

    let checked_push_accepted = match store.push_validated(CHECKED_PUSH_INPUT.into()) {
        Ok(()) => {
            writeln!(out, "case 1: checked push accepted (store size {})", store.len())?;
            true
        },
        Err(violation) => {
            if strict {
                return Err(CliError::Violation(ErrorEnvelope::from(violation)));
            }
            writeln!(out, "case 1: checked push rejected: {violation}")?;
            false
        },
    };

    let construction_succeeded = match SELF_VALIDATING_INPUT.into_self_validating(validator) {
        Ok(record) => {
            writeln!(
                out,
                "case 2: constructed record with number1={} number2={}",
                record.number1(),
                record.number2()
            )?;
            true
        },
        Err(error) => {
            if strict {
                return Err(CliError::Violation(ErrorEnvelope::from(error)));
            }
            writeln!(out, "case 2: construction failed: {error}")?;
            false
        },
    };

    let popped = store.pop();
    match popped {
        Some(record) => writeln!(
            out,
            "store: popped record with number1={} number2={}",
            record.number1, record.number2
        )?,
        None => writeln!(out, "store: empty")?,
    }

    tracing::info!(
        event = "cases.completed",
        checked_push_accepted,
        construction_succeeded,
        "demonstration cases replayed"
    );

    Ok(CaseSummary {
        checked_push_accepted,
        construction_succeeded,
        store_empty_after_pop: store.is_empty() && popped.is_none(),
    })
}
