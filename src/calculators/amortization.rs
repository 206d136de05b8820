//! Fixed-rate loan amortization

use rust_decimal::{Decimal, MathematicalOps};
use serde::Serialize;

use super::{
    monthly_rate, round_cents, CalculatorError, DEFAULT_SCHEDULE_LEN, MAX_TERM_MONTHS,
};

/// One month of a repayment schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmortizationPeriod {
    pub period: u32,
    pub principal_portion: Decimal,
    pub interest_portion: Decimal,
    pub remaining_balance: Decimal,
}

/// Result of a loan calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoanSummary {
    pub monthly_payment: Decimal,
    pub total_payment: Decimal,
    pub total_interest: Decimal,
    pub schedule: Vec<AmortizationPeriod>,
}

/// Compute the payment plan with the first twelve months of schedule
pub fn amortize(
    principal: Decimal,
    annual_rate_percent: Decimal,
    term_months: u32,
) -> Result<LoanSummary, CalculatorError> {
    amortize_with_schedule(
        principal,
        annual_rate_percent,
        term_months,
        DEFAULT_SCHEDULE_LEN,
    )
}

/// Compute the payment plan with up to `schedule_len` schedule rows
///
/// The schedule never runs past the loan term.
pub fn amortize_with_schedule(
    principal: Decimal,
    annual_rate_percent: Decimal,
    term_months: u32,
    schedule_len: u32,
) -> Result<LoanSummary, CalculatorError> {
    if principal <= Decimal::ZERO {
        return Err(CalculatorError::invalid(
            "principal",
            "must be greater than zero",
        ));
    }
    if annual_rate_percent.is_sign_negative() && !annual_rate_percent.is_zero() {
        return Err(CalculatorError::invalid("rate", "cannot be negative"));
    }
    if term_months == 0 {
        return Err(CalculatorError::invalid("term", "must be at least one month"));
    }
    if term_months > MAX_TERM_MONTHS {
        return Err(CalculatorError::invalid("term", "cannot exceed 1200 months"));
    }

    let rate = monthly_rate(annual_rate_percent);
    let months = Decimal::from(term_months);
    let payment = monthly_payment(principal, rate, term_months)?;

    let total_payment = payment
        .checked_mul(months)
        .map(round_cents)
        .ok_or(CalculatorError::invalid("principal", "is too large"))?;
    let total_interest = total_payment - principal;

    tracing::debug!(
        %principal,
        %annual_rate_percent,
        term_months,
        %payment,
        "Computed loan payment"
    );

    let mut schedule = Vec::new();
    let mut balance = principal;
    for period in 1..=schedule_len.min(term_months) {
        let interest = balance * rate;
        let principal_portion = payment - interest;
        balance -= principal_portion;
        if balance.is_sign_negative() {
            balance = Decimal::ZERO;
        }
        schedule.push(AmortizationPeriod {
            period,
            principal_portion: round_cents(principal_portion),
            interest_portion: round_cents(interest),
            remaining_balance: round_cents(balance),
        });
    }

    Ok(LoanSummary {
        monthly_payment: round_cents(payment),
        total_payment,
        total_interest,
        schedule,
    })
}

fn monthly_payment(
    principal: Decimal,
    rate: Decimal,
    term_months: u32,
) -> Result<Decimal, CalculatorError> {
    if rate.is_zero() {
        return Ok(principal / Decimal::from(term_months));
    }

    let growth = (Decimal::ONE + rate)
        .checked_powu(u64::from(term_months))
        .ok_or(CalculatorError::invalid("term", "is too long for this rate"))?;
    let numerator = principal
        .checked_mul(rate)
        .and_then(|v| v.checked_mul(growth))
        .ok_or(CalculatorError::invalid("principal", "is too large"))?;

    numerator
        .checked_div(growth - Decimal::ONE)
        .ok_or(CalculatorError::invalid("rate", "is too small for this term"))
}
