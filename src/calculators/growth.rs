//! Investment growth projection with monthly compounding

use rust_decimal::Decimal;
use serde::Serialize;

use super::{monthly_rate, round_cents, CalculatorError, MAX_YEARS};

/// Balance snapshot at the end of a year
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrowthPoint {
    pub period: u32,
    pub balance: Decimal,
    pub total_contributed: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrowthSummary {
    pub final_value: Decimal,
    pub total_contributed: Decimal,
    pub total_earnings: Decimal,
    pub points: Vec<GrowthPoint>,
}

/// Project a balance forward `years` years with a fixed monthly contribution
///
/// Interest is applied before each month's contribution.
pub fn project(
    initial: Decimal,
    monthly_contribution: Decimal,
    annual_rate_percent: Decimal,
    years: u32,
) -> Result<GrowthSummary, CalculatorError> {
    if initial.is_sign_negative() && !initial.is_zero() {
        return Err(CalculatorError::invalid("initial", "cannot be negative"));
    }
    if monthly_contribution.is_sign_negative() && !monthly_contribution.is_zero() {
        return Err(CalculatorError::invalid("contribution", "cannot be negative"));
    }
    if annual_rate_percent.is_sign_negative() && !annual_rate_percent.is_zero() {
        return Err(CalculatorError::invalid("rate", "cannot be negative"));
    }
    if years == 0 {
        return Err(CalculatorError::invalid("years", "must be at least one"));
    }
    if years > MAX_YEARS {
        return Err(CalculatorError::invalid("years", "cannot exceed 100"));
    }

    let factor = Decimal::ONE + monthly_rate(annual_rate_percent);
    let mut balance = initial;
    let mut contributed = initial;
    let mut points = Vec::with_capacity(years as usize);

    for year in 1..=years {
        for _ in 0..12 {
            balance = balance
                .checked_mul(factor)
                .and_then(|b| b.checked_add(monthly_contribution))
                .ok_or(CalculatorError::invalid("years", "projection overflowed"))?;
            contributed += monthly_contribution;
        }
        points.push(GrowthPoint {
            period: year,
            balance: round_cents(balance),
            total_contributed: round_cents(contributed),
        });
    }

    tracing::debug!(
        %initial,
        %monthly_contribution,
        years,
        final_value = %balance,
        "Projected growth"
    );

    let final_value = round_cents(balance);
    let total_contributed = round_cents(contributed);
    Ok(GrowthSummary {
        final_value,
        total_contributed,
        total_earnings: final_value - total_contributed,
        points,
    })
}
