use std::fmt;

use predsat_expr::{ExprError, Sort};

/// Errors from the encoding layer and session lifecycle.
///
/// All variants are local construction/validation errors raised
/// synchronously at the point of misuse — never deferred into the
/// satisfiability check. An `Unknown` check outcome is *not* an error; see
/// [`crate::CheckResult`].
#[derive(Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Malformed sort descriptor.
    InvalidSort(String),
    /// A variable name was re-declared with a different sort.
    SortConflict {
        name: String,
        declared: Sort,
        requested: Sort,
    },
    /// Operator applied to incompatibly-sorted operands.
    SortMismatch {
        operation: &'static str,
        expected: String,
        found: String,
    },
    /// A non-boolean expression was asserted.
    NotBoolean(Sort),
    /// Operation on a session that has been torn down.
    SessionClosed,
    /// The satisfiability engine reported an internal failure.
    OracleFailure(String),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::InvalidSort(detail) => write!(f, "invalid sort: {detail}"),
            SolverError::SortConflict {
                name,
                declared,
                requested,
            } => write!(
                f,
                "variable `{name}` already declared with sort {declared}, cannot re-declare as {requested}"
            ),
            SolverError::SortMismatch {
                operation,
                expected,
                found,
            } => write!(
                f,
                "sort mismatch in `{operation}`: expected {expected}, found {found}"
            ),
            SolverError::NotBoolean(sort) => {
                write!(f, "asserted expression must be Bool, found {sort}")
            }
            SolverError::SessionClosed => write!(f, "session is closed"),
            SolverError::OracleFailure(detail) => write!(f, "solver oracle failure: {detail}"),
        }
    }
}

impl std::error::Error for SolverError {}

impl From<ExprError> for SolverError {
    fn from(err: ExprError) -> SolverError {
        match err {
            ExprError::InvalidSort(detail) => SolverError::InvalidSort(detail),
            ExprError::SortMismatch {
                operation,
                expected,
                found,
            } => SolverError::SortMismatch {
                operation,
                expected,
                found,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_sort() {
        let err = SolverError::InvalidSort("empty name".to_string());
        assert_eq!(err.to_string(), "invalid sort: empty name");
    }

    #[test]
    fn display_sort_conflict() {
        let err = SolverError::SortConflict {
            name: "rating".to_string(),
            declared: Sort::Int,
            requested: Sort::Text,
        };
        assert_eq!(
            err.to_string(),
            "variable `rating` already declared with sort Int, cannot re-declare as Text"
        );
    }

    #[test]
    fn display_not_boolean() {
        let err = SolverError::NotBoolean(Sort::Int);
        assert_eq!(err.to_string(), "asserted expression must be Bool, found Int");
    }

    #[test]
    fn display_session_closed() {
        assert_eq!(SolverError::SessionClosed.to_string(), "session is closed");
    }

    #[test]
    fn display_oracle_failure() {
        let err = SolverError::OracleFailure("no model".to_string());
        assert_eq!(err.to_string(), "solver oracle failure: no model");
    }

    #[test]
    fn from_expr_error_preserves_variant() {
        let invalid: SolverError = ExprError::InvalidSort("x".to_string()).into();
        assert!(matches!(invalid, SolverError::InvalidSort(_)));

        let mismatch: SolverError = ExprError::SortMismatch {
            operation: ">",
            expected: "Int operands".to_string(),
            found: "Text".to_string(),
        }
        .into();
        assert!(matches!(
            mismatch,
            SolverError::SortMismatch { operation: ">", .. }
        ));
    }

    #[test]
    fn error_equality() {
        assert_eq!(SolverError::SessionClosed, SolverError::SessionClosed);
        assert_ne!(
            SolverError::SessionClosed,
            SolverError::OracleFailure("x".to_string())
        );
    }
}
