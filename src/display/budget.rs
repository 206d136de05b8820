//! Budget display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::reports::BudgetStatusReport;

use super::report::{format_bar, format_money, format_percentage};

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "")]
    bar: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Format the budget status report for a month
pub fn format_budget_status(report: &BudgetStatusReport, settings: &Settings) -> String {
    let mut output = format!("Budgets for {}\n", report.month.label());

    if report.rows.is_empty() {
        output.push_str(&format!(
            "No budgets set for {}.\n\nUse 'finwise budget set <category> <limit>' to add one.\n",
            report.month
        ));
        return output;
    }

    let rows = report.rows.iter().map(|row| BudgetRow {
        id: row.budget_id.to_string(),
        category: row.category.label().to_string(),
        spent: format_money(row.spent, settings),
        limit: format_money(row.limit, settings),
        remaining: format_money(row.remaining, settings),
        used: format_percentage(row.percentage),
        bar: format_bar(row.percentage, 12),
        status: row.state.to_string(),
    });
    output.push_str(&Table::new(rows).with(Style::rounded()).to_string());
    output.push('\n');

    output.push_str(&format!(
        "\nTotal: {} of {} ({}), {} remaining\n",
        format_money(report.total_spent, settings),
        format_money(report.total_limit, settings),
        format_percentage(report.total_percentage),
        format_money(report.total_remaining, settings)
    ));

    if !report.available_categories.is_empty() {
        let labels: Vec<&str> = report
            .available_categories
            .iter()
            .map(|c| c.label())
            .collect();
        output.push_str(&format!("Unbudgeted: {}\n", labels.join(", ")));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, BudgetMonth, Category, Money, Transaction, TransactionKind};
    use chrono::NaiveDate;

    #[test]
    fn test_empty_report() {
        let report = BudgetStatusReport::compute(&[], &[], BudgetMonth::new(2025, 1).unwrap());
        let output = format_budget_status(&report, &Settings::default());
        assert!(output.contains("No budgets set for 2025-01"));
    }

    #[test]
    fn test_over_budget_row() {
        let month = BudgetMonth::new(2025, 1).unwrap();
        let budgets = vec![Budget::new(Category::Food, Money::from_cents(10_000), month)];
        let transactions = vec![Transaction::new(
            TransactionKind::Expense,
            Money::from_cents(12_000),
            Category::Food,
            NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
        )];
        let report = BudgetStatusReport::compute(&budgets, &transactions, month);

        let output = format_budget_status(&report, &Settings::default());
        assert!(output.contains("Over budget"));
        assert!(output.contains("-$20.00"));
        assert!(output.contains("Unbudgeted: Transportation"));
    }
}
