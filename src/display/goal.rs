//! Savings goal display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::reports::{GoalProgress, GoalsReport};

use super::report::{format_bar, format_money, format_percentage, truncate};

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Goal")]
    title: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Due")]
    due: String,
}

fn format_due(goal: &GoalProgress, settings: &Settings) -> String {
    match (goal.goal.target_date, goal.days_left) {
        (Some(date), _) if goal.is_complete => format!("{} (done)", settings.format_date(date)),
        (Some(date), Some(days)) if days < 0 => {
            format!("{} ({} days overdue)", settings.format_date(date), -days)
        }
        (Some(date), Some(days)) => format!("{} ({} days)", settings.format_date(date), days),
        _ => "-".to_string(),
    }
}

/// Format all goals with totals
pub fn format_goal_list(report: &GoalsReport, settings: &Settings) -> String {
    if report.goals.is_empty() {
        return "No savings goals yet.\n\nUse 'finwise goal add <title> <target>' to create one."
            .to_string();
    }

    let rows = report.goals.iter().map(|g| GoalRow {
        id: g.goal.id.to_string(),
        title: truncate(&g.goal.title, 28),
        saved: format_money(g.goal.current_amount, settings),
        target: format_money(g.goal.target_amount, settings),
        progress: format!(
            "{} {}",
            format_bar(g.progress, 10),
            format_percentage(g.progress)
        ),
        due: format_due(g, settings),
    });

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push_str(&format!(
        "\n\nSaved {} of {} ({}), {} of {} goals reached\n",
        format_money(report.total_saved, settings),
        format_money(report.total_target, settings),
        format_percentage(report.overall_progress),
        report.completed,
        report.goals.len()
    ));
    output
}

/// Format a single goal's details
pub fn format_goal_details(goal: &GoalProgress, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Goal: {}\n", goal.goal.title));
    output.push_str(&format!("  ID:        {}\n", goal.goal.id));
    output.push_str(&format!("  Icon:      {}\n", goal.goal.icon));
    output.push_str(&format!(
        "  Saved:     {} of {}\n",
        format_money(goal.goal.current_amount, settings),
        format_money(goal.goal.target_amount, settings)
    ));
    output.push_str(&format!(
        "  Progress:  {} {}\n",
        format_bar(goal.progress, 20),
        format_percentage(goal.progress)
    ));

    if goal.is_complete {
        output.push_str("  Goal reached!\n");
    } else {
        output.push_str(&format!(
            "  Remaining: {}\n",
            format_money(goal.remaining, settings)
        ));
    }

    if goal.goal.target_date.is_some() {
        output.push_str(&format!("  Due:       {}\n", format_due(goal, settings)));
    }

    output
}
