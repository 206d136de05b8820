//! Core data models for finwise
//!
//! Value types for the personal-finance domain: transactions, monthly budget
//! limits, savings goals, the category catalog and the tips catalog.

pub mod budget;
pub mod category;
pub mod goal;
pub mod ids;
pub mod money;
pub mod period;
pub mod tip;
pub mod transaction;

pub use budget::Budget;
pub use category::{Category, CategoryInfo};
pub use goal::SavingsGoal;
pub use ids::{BudgetId, GoalId, TransactionId};
pub use money::Money;
pub use period::BudgetMonth;
pub use tip::{Difficulty, FinancialTip, TipTopic};
pub use transaction::{Transaction, TransactionKind};
