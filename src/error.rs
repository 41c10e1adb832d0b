//! Error types for the tree-building surface
//!
//! The tree itself has no failure modes: shapes that would violate the
//! grammar are unrepresentable and traversal dispatch is total. The only
//! fallible operation the crate exposes is mapping an operator token to its
//! per-level operator enum, which the external parser uses while building
//! binary nodes.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AstError {
    #[error("`{token}` is not a valid {level} operator")]
    UnknownOperator { level: &'static str, token: String },
}

impl AstError {
    pub(crate) fn unknown_operator(level: &'static str, token: &str) -> Self {
        AstError::UnknownOperator {
            level,
            token: token.to_string(),
        }
    }
}
