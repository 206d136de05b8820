//! Transaction CLI commands
//!
//! Implements CLI commands for recording and browsing income and expenses.

use clap::Subcommand;

use super::{parse_amount, parse_date, parse_month_or_current, today};
use crate::config::settings::Settings;
use crate::display::report::format_money;
use crate::display::transaction::{format_transaction_details, format_transaction_list};
use crate::error::{FinwiseError, FinwiseResult};
use crate::models::{Category, TransactionKind};
use crate::services::transaction::{
    CreateTransactionInput, TransactionFilter, UpdateTransactionInput,
};
use crate::services::TransactionService;
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new income or expense
    Add {
        /// "income" or "expense"
        kind: String,
        /// Amount (e.g., "50" or "1,250.00")
        amount: String,
        /// Category key or name (e.g., "food", "salary")
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(short = 'D', long)]
        description: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Only "income" or "expense"
        #[arg(short, long)]
        kind: Option<String>,
        /// Filter by category
        #[arg(short = 'C', long)]
        category: Option<String>,
        /// Only this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Show a single transaction
    Show {
        /// Transaction ID (or prefix)
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID (or prefix)
        id: String,
        #[arg(short, long)]
        kind: Option<String>,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short = 'C', long)]
        category: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short = 'D', long)]
        description: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID (or prefix)
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

fn parse_kind(input: &str) -> FinwiseResult<TransactionKind> {
    input
        .parse::<TransactionKind>()
        .map_err(|e| FinwiseError::Validation(e.to_string()))
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FinwiseResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            date,
            description,
        } => {
            let input = CreateTransactionInput {
                kind: parse_kind(&kind)?,
                amount: parse_amount(&amount)?,
                category: Category::parse(&category)?,
                date: match date {
                    Some(d) => parse_date(&d)?,
                    None => today(),
                },
                description,
            };

            let txn = service.create(input)?;

            println!("Recorded {}:", txn.kind.to_string().to_lowercase());
            println!("  ID:       {}", txn.id);
            println!("  Date:     {}", settings.format_date(txn.date));
            println!("  Amount:   {}", format_money(txn.amount, settings));
            println!("  Category: {}", txn.category);
            if !txn.description.is_empty() {
                println!("  Note:     {}", txn.description);
            }
        }

        TransactionCommands::List {
            kind,
            category,
            month,
            limit,
        } => {
            let mut filter = TransactionFilter::new().limit(limit);
            if let Some(kind) = kind {
                filter = filter.kind(parse_kind(&kind)?);
            }
            if let Some(category) = category {
                filter = filter.category(Category::parse(&category)?);
            }
            if let Some(month) = month {
                filter = filter.month(parse_month_or_current(Some(&month))?);
            }

            let transactions = service.list(filter)?;
            print!("{}", format_transaction_list(&transactions, settings));
            println!("\nShowing {} transactions", transactions.len());
        }

        TransactionCommands::Show { id } => {
            let txn = service.resolve(&id)?;
            print!("{}", format_transaction_details(&txn, settings));
        }

        TransactionCommands::Edit {
            id,
            kind,
            amount,
            category,
            date,
            description,
        } => {
            let txn = service.resolve(&id)?;

            let input = UpdateTransactionInput {
                kind: kind.as_deref().map(parse_kind).transpose()?,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                category: category.as_deref().map(Category::parse).transpose()?,
                date: date.as_deref().map(parse_date).transpose()?,
                description,
            };

            let updated = service.update(txn.id, input)?;
            println!("Updated transaction: {}", updated.id);
            println!("  Date:     {}", settings.format_date(updated.date));
            println!("  Amount:   {}", format_money(updated.amount, settings));
            println!("  Category: {}", updated.category);
        }

        TransactionCommands::Delete { id, force } => {
            let txn = service.resolve(&id)?;

            if !force {
                println!("About to delete transaction:");
                println!("  Date:     {}", settings.format_date(txn.date));
                println!("  Amount:   {}", format_money(txn.amount, settings));
                println!("  Category: {}", txn.category);
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(txn.id)?;
            println!(
                "Deleted transaction: {} ({} {})",
                deleted.id,
                settings.format_date(deleted.date),
                format_money(deleted.amount, settings)
            );
        }
    }

    Ok(())
}
