//! Service layer for finwise
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, short-id lookup and persistence.

pub mod budget;
pub mod goal;
pub mod transaction;

pub use budget::BudgetService;
pub use goal::GoalService;
pub use transaction::TransactionService;

use crate::error::{FinwiseError, FinwiseResult};

/// Pick the single item whose id matches a user-supplied reference
///
/// Returns `Ok(None)` when nothing matches and a validation error when the
/// reference is ambiguous.
pub(crate) fn resolve_reference<T>(
    items: Vec<T>,
    reference: &str,
    entity: &str,
    matches: impl Fn(&T, &str) -> bool,
) -> FinwiseResult<Option<T>> {
    let mut found: Vec<T> = items
        .into_iter()
        .filter(|item| matches(item, reference))
        .collect();

    match found.len() {
        0 => Ok(None),
        1 => Ok(found.pop()),
        n => Err(FinwiseError::Validation(format!(
            "'{}' matches {} {}s, use a longer id",
            reference,
            n,
            entity.to_lowercase()
        ))),
    }
}
