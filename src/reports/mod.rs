//! Reports module for finwise
//!
//! Aggregations over stored records: monthly summary, budget status, savings
//! goals and the dashboard. Each report has a pure constructor over in-memory
//! records and a `generate` that reads from storage.

pub mod budget_status;
pub mod dashboard;
pub mod goals;
pub mod summary;

pub use budget_status::{BudgetState, BudgetStatusReport, BudgetStatusRow};
pub use dashboard::{Dashboard, DashboardOptions, DailyTrend};
pub use goals::{GoalProgress, GoalsReport};
pub use summary::{CategorySpending, MonthlySummary};
