//! Calculator result formatting

use rust_decimal::Decimal;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::calculators::{GrowthSummary, LoanSummary};
use crate::config::Settings;

fn amount(value: Decimal, settings: &Settings) -> String {
    if value.is_sign_negative() && !value.is_zero() {
        format!("-{}{:.2}", settings.currency_symbol, value.abs())
    } else {
        format!("{}{:.2}", settings.currency_symbol, value)
    }
}

#[derive(Tabled)]
struct ScheduleRow {
    #[tabled(rename = "Month")]
    period: u32,
    #[tabled(rename = "Principal")]
    principal: String,
    #[tabled(rename = "Interest")]
    interest: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

#[derive(Tabled)]
struct GrowthRow {
    #[tabled(rename = "Year")]
    period: u32,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Contributed")]
    contributed: String,
    #[tabled(rename = "Earnings")]
    earnings: String,
}

/// Format a loan calculation with its schedule
pub fn format_loan(loan: &LoanSummary, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Monthly payment: {}\n",
        amount(loan.monthly_payment, settings)
    ));
    output.push_str(&format!(
        "Total payment:   {}\n",
        amount(loan.total_payment, settings)
    ));
    output.push_str(&format!(
        "Total interest:  {}\n",
        amount(loan.total_interest, settings)
    ));

    if !loan.schedule.is_empty() {
        let rows = loan.schedule.iter().map(|p| ScheduleRow {
            period: p.period,
            principal: amount(p.principal_portion, settings),
            interest: amount(p.interest_portion, settings),
            balance: amount(p.remaining_balance, settings),
        });
        output.push('\n');
        output.push_str(&Table::new(rows).with(Style::rounded()).to_string());
        output.push('\n');
    }

    output
}

/// Format an investment projection year by year
pub fn format_growth(growth: &GrowthSummary, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Final value:       {}\n",
        amount(growth.final_value, settings)
    ));
    output.push_str(&format!(
        "Total contributed: {}\n",
        amount(growth.total_contributed, settings)
    ));
    output.push_str(&format!(
        "Total earnings:    {}\n",
        amount(growth.total_earnings, settings)
    ));

    let rows = growth.points.iter().map(|p| GrowthRow {
        period: p.period,
        balance: amount(p.balance, settings),
        contributed: amount(p.total_contributed, settings),
        earnings: amount(p.balance - p.total_contributed, settings),
    });
    output.push('\n');
    output.push_str(&Table::new(rows).with(Style::rounded()).to_string());
    output.push('\n');

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::{amortize, project};
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_loan() {
        let loan = amortize(dec!(10000), dec!(5), 36).unwrap();
        let output = format_loan(&loan, &Settings::default());
        assert!(output.contains("Monthly payment: $299.71"));
        assert!(output.contains("Total interest:  $789.52"));
        assert!(output.contains("$9741.96"));
    }

    #[test]
    fn test_format_growth() {
        let growth = project(dec!(5000), dec!(200), dec!(7), 10).unwrap();
        let output = format_growth(&growth, &Settings::default());
        assert!(output.contains("Final value:       $44665.27"));
        assert!(output.contains("Total contributed: $29000.00"));
    }

    #[test]
    fn test_amount_pads_cents() {
        let settings = Settings::default();
        assert_eq!(amount(dec!(100), &settings), "$100.00");
        assert_eq!(amount(dec!(-2.5), &settings), "-$2.50");
    }
}
