//! Transaction display formatting
//!
//! Table view for listings and a detail view for single records.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Transaction;

use super::report::{format_money, truncate};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format a list of transactions as a table
pub fn format_transaction_list(transactions: &[Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions found.".to_string();
    }

    let rows = transactions.iter().map(|txn| TransactionRow {
        id: txn.id.to_string(),
        date: settings.format_date(txn.date),
        kind: txn.kind.to_string(),
        category: txn.category.label().to_string(),
        amount: format_money(txn.amount, settings),
        description: truncate(&txn.description, 32),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("  Type:        {}\n", txn.kind));
    output.push_str(&format!("  Date:        {}\n", settings.format_date(txn.date)));
    output.push_str(&format!(
        "  Amount:      {}\n",
        format_money(txn.amount, settings)
    ));
    output.push_str(&format!("  Category:    {}\n", txn.category.label()));

    if !txn.description.is_empty() {
        output.push_str(&format!("  Description: {}\n", txn.description));
    }

    output.push_str(&format!(
        "  Created:     {}\n",
        txn.created_at.format("%Y-%m-%d %H:%M")
    ));

    output
}
