//! Budget CLI commands
//!
//! Implements CLI commands for monthly category limits and the budget status
//! report.

use clap::Subcommand;

use super::{parse_amount, parse_month_or_current};
use crate::config::settings::Settings;
use crate::display::budget::format_budget_status;
use crate::display::report::format_money;
use crate::error::FinwiseResult;
use crate::models::Category;
use crate::reports::BudgetStatusReport;
use crate::services::budget::UpdateBudgetInput;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly limit for an expense category
    ///
    /// Replaces the limit when the category already has one for that month.
    Set {
        /// Expense category key or name (e.g., "food")
        category: String,
        /// Monthly limit (e.g., "500" or "1,200.00")
        limit: String,
        /// Budget month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show spending against each limit
    Status {
        /// Budget month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Edit a budget
    Edit {
        /// Budget ID (or prefix)
        id: String,
        #[arg(short = 'C', long)]
        category: Option<String>,
        #[arg(short, long)]
        limit: Option<String>,
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Delete a budget
    Delete {
        /// Budget ID (or prefix)
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> FinwiseResult<()> {
    let service = BudgetService::new(storage);

    match cmd {
        BudgetCommands::Set {
            category,
            limit,
            month,
        } => {
            let category = Category::parse(&category)?;
            let limit = parse_amount(&limit)?;
            let month = parse_month_or_current(month.as_deref())?;

            let budget = match storage.budgets.find(category, &month)? {
                Some(existing) => service.update(
                    existing.id,
                    UpdateBudgetInput {
                        monthly_limit: Some(limit),
                        ..Default::default()
                    },
                )?,
                None => service.create(category, limit, month)?,
            };

            println!(
                "Budget for {} in {}: {}",
                budget.category,
                budget.month.label(),
                format_money(budget.monthly_limit, settings)
            );
            println!("  ID: {}", budget.id);
        }

        BudgetCommands::Status { month } => {
            let month = parse_month_or_current(month.as_deref())?;
            let report = BudgetStatusReport::generate(storage, month)?;
            print!("{}", format_budget_status(&report, settings));
        }

        BudgetCommands::Edit {
            id,
            category,
            limit,
            month,
        } => {
            let budget = service.resolve(&id)?;

            let input = UpdateBudgetInput {
                category: category.as_deref().map(Category::parse).transpose()?,
                monthly_limit: limit.as_deref().map(parse_amount).transpose()?,
                month: month
                    .as_deref()
                    .map(|m| parse_month_or_current(Some(m)))
                    .transpose()?,
            };

            let updated = service.update(budget.id, input)?;
            println!("Updated budget: {}", updated.id);
            println!("  Category: {}", updated.category);
            println!("  Month:    {}", updated.month);
            println!(
                "  Limit:    {}",
                format_money(updated.monthly_limit, settings)
            );
        }

        BudgetCommands::Delete { id, force } => {
            let budget = service.resolve(&id)?;

            if !force {
                println!("About to delete budget:");
                println!("  Category: {}", budget.category);
                println!("  Month:    {}", budget.month);
                println!(
                    "  Limit:    {}",
                    format_money(budget.monthly_limit, settings)
                );
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(budget.id)?;
            println!(
                "Deleted budget: {} ({} {})",
                deleted.id, deleted.category, deleted.month
            );
        }
    }

    Ok(())
}
