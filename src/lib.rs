//! finwise - Terminal personal-finance tracker
//!
//! This library provides the core of the finwise application: recording
//! income and expenses, monthly budget limits per category, savings goals,
//! and two calculators (loan amortization and investment growth).
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `calculators`: Loan amortization and growth projection (pure functions)
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, budgets, goals, categories, tips)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `reports`: Monthly summary, budget status, goals and dashboard
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use finwise::calculators::amortize;
//! use rust_decimal_macros::dec;
//!
//! let loan = amortize(dec!(10000), dec!(5), 36).unwrap();
//! assert_eq!(loan.monthly_payment, dec!(299.71));
//! ```

pub mod calculators;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod log;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinwiseError, FinwiseResult};
