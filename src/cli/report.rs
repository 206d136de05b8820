//! CLI commands for reports
//!
//! The dashboard overview and the plain monthly summary.

use super::{parse_month_or_current, today};
use crate::config::settings::Settings;
use crate::display::report::{format_dashboard, format_monthly_summary};
use crate::error::FinwiseResult;
use crate::reports::{Dashboard, DashboardOptions, MonthlySummary};
use crate::storage::Storage;

/// Print the dashboard for a month (defaults to the current month)
pub fn handle_dashboard_command(
    storage: &Storage,
    settings: &Settings,
    month: Option<String>,
) -> FinwiseResult<()> {
    let month = parse_month_or_current(month.as_deref())?;
    let options = DashboardOptions::from_settings(settings, today());

    let dashboard = Dashboard::generate(storage, month, options)?;
    print!("{}", format_dashboard(&dashboard, settings));
    Ok(())
}

/// Print income, expenses and category breakdown for a month
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    month: Option<String>,
) -> FinwiseResult<()> {
    let month = parse_month_or_current(month.as_deref())?;

    let summary = MonthlySummary::generate(storage, month)?;
    print!("{}", format_monthly_summary(&summary, settings));
    Ok(())
}
