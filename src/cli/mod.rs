//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer. Raw strings
//! from the command line are parsed into typed values here, before anything
//! reaches a service or calculator.

pub mod budget;
pub mod calc;
pub mod export;
pub mod goal;
pub mod learn;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use calc::{handle_calc_command, CalcCommands};
pub use export::{handle_export_command, ExportArgs};
pub use goal::{handle_goal_command, GoalCommands};
pub use learn::{handle_learn_command, LearnArgs};
pub use report::{handle_dashboard_command, handle_summary_command};
pub use transaction::{handle_transaction_command, TransactionCommands};

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{FinwiseError, FinwiseResult};
use crate::models::{BudgetMonth, Money};

/// Today's date in local time
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub(crate) fn parse_amount(input: &str) -> FinwiseResult<Money> {
    Money::parse(input).map_err(|e| {
        FinwiseError::Validation(format!(
            "Invalid amount: '{}'. Use a format like '50' or '1,250.00' ({})",
            input, e
        ))
    })
}

pub(crate) fn parse_date(input: &str) -> FinwiseResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        FinwiseError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", input))
    })
}

/// Parse "YYYY-MM", defaulting to the current month
pub(crate) fn parse_month_or_current(input: Option<&str>) -> FinwiseResult<BudgetMonth> {
    match input {
        Some(s) if !s.eq_ignore_ascii_case("current") => Ok(BudgetMonth::parse(s)?),
        _ => Ok(BudgetMonth::current()),
    }
}

/// Parse a plain decimal such as a rate or a calculator amount
///
/// Accepts an optional leading `$`, thousands separators and a trailing `%`.
pub(crate) fn parse_decimal(field: &str, input: &str) -> FinwiseResult<Decimal> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .trim_end_matches('%')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    Decimal::from_str(&cleaned)
        .map_err(|_| FinwiseError::Validation(format!("Invalid {}: '{}'", field, input)))
}
