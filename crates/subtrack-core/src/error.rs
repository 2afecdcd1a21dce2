use thiserror::Error;

/// Errors surfaced by the strict rule-string APIs.
///
/// The lenient boundaries (`RecurrenceRule::parse_or_default`, the free
/// functions in [`crate::recurrence`] and [`crate::projection`]) recover
/// from these instead of propagating them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("Invalid recurrence rule: {0}")]
    InvalidRule(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
