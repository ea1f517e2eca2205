use std::fmt;

/// Errors from building expressions and sort descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// Malformed sort descriptor.
    InvalidSort(String),
    /// Operator applied to incompatibly-sorted operands.
    SortMismatch {
        /// Operator name (e.g. `">"`, `"contains"`).
        operation: &'static str,
        /// What the operator requires.
        expected: String,
        /// What was supplied.
        found: String,
    },
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprError::InvalidSort(detail) => write!(f, "invalid sort: {detail}"),
            ExprError::SortMismatch {
                operation,
                expected,
                found,
            } => write!(
                f,
                "sort mismatch in `{operation}`: expected {expected}, found {found}"
            ),
        }
    }
}

impl std::error::Error for ExprError {}
