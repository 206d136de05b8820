//! Transaction categories
//!
//! Categories are a fixed catalog. Each one carries its display metadata
//! (label, icon, chart colour slot) and whether it applies to income or
//! expense records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::transaction::TransactionKind;

/// A transaction category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Salary,
    Freelance,
    Investment,
    OtherIncome,
    Food,
    Transportation,
    Housing,
    Utilities,
    Entertainment,
    Shopping,
    Healthcare,
    Education,
    Savings,
    OtherExpense,
}

/// Display metadata for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub kind: TransactionKind,
    /// Chart palette slot (1-5)
    pub color: u8,
}

impl Category {
    /// Every category, income first
    pub const ALL: [Category; 14] = [
        Category::Salary,
        Category::Freelance,
        Category::Investment,
        Category::OtherIncome,
        Category::Food,
        Category::Transportation,
        Category::Housing,
        Category::Utilities,
        Category::Entertainment,
        Category::Shopping,
        Category::Healthcare,
        Category::Education,
        Category::Savings,
        Category::OtherExpense,
    ];

    pub fn info(&self) -> CategoryInfo {
        use TransactionKind::{Expense, Income};

        let (key, label, icon, kind, color) = match self {
            Self::Salary => ("salary", "Salary", "wallet", Income, 1),
            Self::Freelance => ("freelance", "Freelance", "briefcase", Income, 2),
            Self::Investment => ("investment", "Investment", "trending-up", Income, 3),
            Self::OtherIncome => ("other-income", "Other Income", "plus-circle", Income, 4),
            Self::Food => ("food", "Food & Dining", "utensils-crossed", Expense, 1),
            Self::Transportation => ("transportation", "Transportation", "car", Expense, 2),
            Self::Housing => ("housing", "Housing", "home", Expense, 3),
            Self::Utilities => ("utilities", "Utilities", "zap", Expense, 4),
            Self::Entertainment => ("entertainment", "Entertainment", "film", Expense, 5),
            Self::Shopping => ("shopping", "Shopping", "shopping-bag", Expense, 1),
            Self::Healthcare => ("healthcare", "Healthcare", "heart", Expense, 2),
            Self::Education => ("education", "Education", "graduation-cap", Expense, 3),
            Self::Savings => ("savings", "Savings", "piggy-bank", Expense, 4),
            Self::OtherExpense => ("other-expense", "Other", "more-horizontal", Expense, 5),
        };

        CategoryInfo {
            key,
            label,
            icon,
            kind,
            color,
        }
    }

    pub fn key(&self) -> &'static str {
        self.info().key
    }

    pub fn label(&self) -> &'static str {
        self.info().label
    }

    pub fn kind(&self) -> TransactionKind {
        self.info().kind
    }

    pub fn is_expense(&self) -> bool {
        self.kind() == TransactionKind::Expense
    }

    /// Categories usable for income records
    pub fn income() -> impl Iterator<Item = Category> {
        Self::ALL.into_iter().filter(|c| !c.is_expense())
    }

    /// Categories usable for expense records and budgets
    pub fn expense() -> impl Iterator<Item = Category> {
        Self::ALL.into_iter().filter(|c| c.is_expense())
    }

    /// Parse from the catalog key or the display label (case-insensitive)
    pub fn parse(s: &str) -> Result<Self, CategoryParseError> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| {
                let info = c.info();
                info.key.eq_ignore_ascii_case(needle) || info.label.eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| CategoryParseError::Unknown(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryParseError {
    #[error("Unknown category: {0}")]
    Unknown(String),
}
