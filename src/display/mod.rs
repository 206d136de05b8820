//! Display formatting for terminal output
//!
//! Provides utilities for formatting models and reports for terminal
//! display, including tables, bars and detail views.

pub mod budget;
pub mod calculator;
pub mod goal;
pub mod report;
pub mod tip;
pub mod transaction;

pub use budget::format_budget_status;
pub use calculator::{format_growth, format_loan};
pub use goal::{format_goal_details, format_goal_list};
pub use report::{format_dashboard, format_monthly_summary};
pub use tip::format_tips;
pub use transaction::{format_transaction_details, format_transaction_list};
