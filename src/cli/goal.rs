//! Savings goal CLI commands

use clap::Subcommand;

use super::{parse_amount, parse_date, today};
use crate::config::settings::Settings;
use crate::display::goal::{format_goal_details, format_goal_list};
use crate::display::report::{format_money, format_percentage};
use crate::error::FinwiseResult;
use crate::reports::{GoalProgress, GoalsReport};
use crate::services::goal::{CreateGoalInput, UpdateGoalInput};
use crate::services::GoalService;
use crate::storage::Storage;

/// Savings goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a savings goal
    Add {
        /// Goal title (e.g., "Emergency fund")
        title: String,
        /// Target amount
        target: String,
        /// Amount already saved
        #[arg(short, long)]
        current: Option<String>,
        /// Target date (YYYY-MM-DD)
        #[arg(short = 't', long)]
        target_date: Option<String>,
        /// Icon name
        #[arg(short, long)]
        icon: Option<String>,
    },

    /// List goals with progress
    List,

    /// Show a single goal
    Show {
        /// Goal ID (or prefix)
        id: String,
    },

    /// Edit a goal
    Edit {
        /// Goal ID (or prefix)
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        target: Option<String>,
        #[arg(short, long)]
        current: Option<String>,
        /// New target date (YYYY-MM-DD), or "none" to clear it
        #[arg(short = 't', long)]
        target_date: Option<String>,
        #[arg(short, long)]
        icon: Option<String>,
    },

    /// Add money to a goal (a negative amount withdraws)
    Contribute {
        /// Goal ID (or prefix)
        id: String,
        /// Amount (e.g., "100" or "-25")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Delete a goal
    Delete {
        /// Goal ID (or prefix)
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a savings goal command
pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> FinwiseResult<()> {
    let service = GoalService::new(storage);

    match cmd {
        GoalCommands::Add {
            title,
            target,
            current,
            target_date,
            icon,
        } => {
            let input = CreateGoalInput {
                title,
                target_amount: parse_amount(&target)?,
                current_amount: current.as_deref().map(parse_amount).transpose()?,
                target_date: target_date.as_deref().map(parse_date).transpose()?,
                icon,
            };

            let goal = service.create(input)?;
            println!("Created goal: {}", goal.title);
            println!("  ID:     {}", goal.id);
            println!(
                "  Target: {}",
                format_money(goal.target_amount, settings)
            );
            if let Some(date) = goal.target_date {
                println!("  By:     {}", settings.format_date(date));
            }
        }

        GoalCommands::List => {
            let report = GoalsReport::generate(storage, today())?;
            print!("{}", format_goal_list(&report, settings));
        }

        GoalCommands::Show { id } => {
            let goal = service.resolve(&id)?;
            let progress = GoalProgress::new(goal, today());
            print!("{}", format_goal_details(&progress, settings));
        }

        GoalCommands::Edit {
            id,
            title,
            target,
            current,
            target_date,
            icon,
        } => {
            let goal = service.resolve(&id)?;

            let target_date = match target_date.as_deref() {
                None => None,
                Some(s) if s.eq_ignore_ascii_case("none") || s.is_empty() => Some(None),
                Some(s) => Some(Some(parse_date(s)?)),
            };

            let input = UpdateGoalInput {
                title,
                target_amount: target.as_deref().map(parse_amount).transpose()?,
                current_amount: current.as_deref().map(parse_amount).transpose()?,
                target_date,
                icon,
            };

            let updated = service.update(goal.id, input)?;
            println!("Updated goal: {}", updated.title);
            println!(
                "  Saved: {} of {}",
                format_money(updated.current_amount, settings),
                format_money(updated.target_amount, settings)
            );
        }

        GoalCommands::Contribute { id, amount } => {
            let goal = service.resolve(&id)?;
            let amount = parse_amount(&amount)?;

            let updated = service.contribute(goal.id, amount)?;
            let action = if amount.is_negative() {
                "Withdrew"
            } else {
                "Added"
            };
            println!(
                "{} {} {} {}",
                action,
                format_money(amount.abs(), settings),
                if amount.is_negative() { "from" } else { "to" },
                updated.title
            );
            println!(
                "  Saved: {} of {} ({})",
                format_money(updated.current_amount, settings),
                format_money(updated.target_amount, settings),
                format_percentage(updated.progress())
            );
            if updated.is_complete() && !goal.is_complete() {
                println!("  Goal reached!");
            }
        }

        GoalCommands::Delete { id, force } => {
            let goal = service.resolve(&id)?;

            if !force {
                println!("About to delete goal:");
                println!("  Title: {}", goal.title);
                println!(
                    "  Saved: {} of {}",
                    format_money(goal.current_amount, settings),
                    format_money(goal.target_amount, settings)
                );
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(goal.id)?;
            println!("Deleted goal: {} ({})", deleted.id, deleted.title);
        }
    }

    Ok(())
}
