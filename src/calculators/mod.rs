//! Loan and investment calculators
//!
//! Pure functions over `Decimal` inputs. Intermediate math keeps full decimal
//! precision; the returned figures are rounded to cents.

pub mod amortization;
pub mod growth;

pub use amortization::{amortize, amortize_with_schedule, AmortizationPeriod, LoanSummary};
pub use growth::{project, GrowthPoint, GrowthSummary};

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Number of schedule rows produced by [`amortize`]
pub const DEFAULT_SCHEDULE_LEN: u32 = 12;

/// Longest loan term accepted, in months
pub const MAX_TERM_MONTHS: u32 = 1200;

/// Longest projection accepted, in years
pub const MAX_YEARS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: &'static str,
    },
}

impl CalculatorError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::InvalidInput { field, reason }
    }
}

/// Annual percentage rate to a monthly fraction
pub(crate) fn monthly_rate(annual_rate_percent: Decimal) -> Decimal {
    annual_rate_percent / Decimal::ONE_HUNDRED / Decimal::from(12)
}

pub(crate) fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
