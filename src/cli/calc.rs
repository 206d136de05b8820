//! Calculator CLI commands
//!
//! Loan payment and investment growth calculators. Nothing is stored.

use clap::Subcommand;

use super::parse_decimal;
use crate::calculators::{amortize, amortize_with_schedule, project};
use crate::config::settings::Settings;
use crate::display::calculator::{format_growth, format_loan};
use crate::error::FinwiseResult;

/// Calculator subcommands
#[derive(Subcommand)]
pub enum CalcCommands {
    /// Monthly payment and repayment schedule for a fixed-rate loan
    Loan {
        /// Amount borrowed
        principal: String,
        /// Annual interest rate in percent (e.g., "5" or "4.25%")
        rate: String,
        /// Term in months
        months: u32,
        /// Show every month instead of the first twelve
        #[arg(long)]
        full: bool,
    },

    /// Project an investment with monthly contributions
    Invest {
        /// Starting balance
        initial: String,
        /// Contribution added each month
        monthly: String,
        /// Expected annual return in percent
        rate: String,
        /// Number of years
        years: u32,
    },
}

/// Handle a calculator command
pub fn handle_calc_command(settings: &Settings, cmd: CalcCommands) -> FinwiseResult<()> {
    match cmd {
        CalcCommands::Loan {
            principal,
            rate,
            months,
            full,
        } => {
            let principal = parse_decimal("principal", &principal)?;
            let rate = parse_decimal("rate", &rate)?;

            let loan = if full {
                amortize_with_schedule(principal, rate, months, months)?
            } else {
                amortize(principal, rate, months)?
            };
            print!("{}", format_loan(&loan, settings));
        }

        CalcCommands::Invest {
            initial,
            monthly,
            rate,
            years,
        } => {
            let initial = parse_decimal("initial amount", &initial)?;
            let monthly = parse_decimal("monthly contribution", &monthly)?;
            let rate = parse_decimal("rate", &rate)?;

            let growth = project(initial, monthly, rate, years)?;
            print!("{}", format_growth(&growth, settings));
        }
    }

    Ok(())
}
