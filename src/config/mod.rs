//! Configuration module for finwise
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FinwisePaths;
pub use settings::Settings;
