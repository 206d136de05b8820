//! Report formatting utilities for terminal output
//!
//! Shared helpers plus the monthly summary and dashboard views.

use chrono::Datelike;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::config::Settings;
use crate::models::Money;
use crate::reports::{Dashboard, MonthlySummary};

/// Format a money amount with the configured currency symbol
pub fn format_money(amount: Money, settings: &Settings) -> String {
    amount.format_with_symbol(&settings.currency_symbol)
}

/// Format a percentage with one decimal place
pub fn format_percentage(pct: Decimal) -> String {
    format!("{}%", pct.round_dp(1).normalize())
}

/// Create a simple bar; values above 100 percent fill the bar
pub fn format_bar(pct: Decimal, width: usize) -> String {
    let ratio = (pct / Decimal::ONE_HUNDRED)
        .max(Decimal::ZERO)
        .min(Decimal::ONE);
    let filled = (ratio * Decimal::from(width))
        .round()
        .to_usize()
        .unwrap_or(0)
        .min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format the monthly summary with its category breakdown
pub fn format_monthly_summary(summary: &MonthlySummary, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", summary.month.label()));
    output.push_str(&separator(48));
    output.push('\n');
    output.push_str(&format!(
        "  Income:        {:>14}  ({} records)\n",
        format_money(summary.total_income, settings),
        summary.income_count
    ));
    output.push_str(&format!(
        "  Expenses:      {:>14}  ({} records)\n",
        format_money(summary.total_expense, settings),
        summary.expense_count
    ));
    output.push_str(&format!(
        "  Net:           {:>14}\n",
        format_money(summary.net, settings)
    ));
    output.push_str(&format!(
        "  Savings rate:  {:>14}\n",
        format_percentage(summary.savings_rate)
    ));

    if !summary.categories.is_empty() {
        output.push_str("\nSpending by category\n");
        for spending in &summary.categories {
            output.push_str(&format!(
                "  {:<22} {:>12} {:>7}  {}\n",
                spending.category.label(),
                format_money(spending.total, settings),
                format_percentage(spending.share),
                format_bar(spending.share, 20)
            ));
        }
    }

    output
}

/// Format the full dashboard
pub fn format_dashboard(dashboard: &Dashboard, settings: &Settings) -> String {
    let mut output = format_monthly_summary(&dashboard.summary, settings);

    output.push_str(&format!(
        "\nTotal savings across goals: {}\n",
        format_money(dashboard.total_savings, settings)
    ));

    output.push_str("\nRecent transactions\n");
    if dashboard.recent.is_empty() {
        output.push_str("  No transactions yet.\n");
    }
    for txn in &dashboard.recent {
        let signed = format_money(txn.signed_amount(), settings);
        let signed = if txn.is_income() {
            format!("+{}", signed)
        } else {
            signed
        };
        output.push_str(&format!(
            "  {}  {:<22} {:>12}  {}\n",
            settings.format_date(txn.date),
            txn.category.label(),
            signed,
            truncate(&txn.description, 30)
        ));
    }

    output.push_str("\nSavings goals\n");
    if dashboard.goals.is_empty() {
        output.push_str("  No savings goals yet.\n");
    }
    for goal in &dashboard.goals {
        output.push_str(&format!(
            "  {:<24} {} {:>7}\n",
            truncate(&goal.goal.title, 24),
            format_bar(goal.progress, 20),
            format_percentage(goal.progress)
        ));
    }

    output.push_str(&format!("\nLast {} days\n", dashboard.trend.len()));
    for day in &dashboard.trend {
        output.push_str(&format!(
            "  {} {:>2}  in {:>11}  out {:>11}  net {:>11}\n",
            day.date.format("%b"),
            day.date.day(),
            format_money(day.income, settings),
            format_money(day.expense, settings),
            format_money(day.net, settings)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetMonth, Category, Transaction, TransactionKind};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(dec!(50), 4), "██░░");
        assert_eq!(format_bar(dec!(150), 4), "████");
        assert_eq!(format_bar(dec!(-5), 4), "░░░░");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(dec!(51.4285)), "51.4%");
        assert_eq!(format_percentage(dec!(25.00)), "25%");
        assert_eq!(format_percentage(dec!(0)), "0%");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a much longer description", 10), "a much ...");
    }

    #[test]
    fn test_monthly_summary_uses_currency_symbol() {
        let settings = Settings {
            currency_symbol: "€".into(),
            ..Settings::default()
        };
        let txn = Transaction::new(
            TransactionKind::Expense,
            Money::from_cents(1_250),
            Category::Food,
            NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
        );
        let summary =
            MonthlySummary::from_transactions(&[txn], BudgetMonth::new(2025, 1).unwrap());

        let output = format_monthly_summary(&summary, &settings);
        assert!(output.contains("January 2025"));
        assert!(output.contains("€12.50"));
        assert!(output.contains("Food & Dining"));
    }
}
