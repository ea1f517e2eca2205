use std::fmt;

use crate::error::ExprError;

/// Value domain of a symbolic expression.
///
/// Two sorts are equal iff their structural description is equal;
/// uninterpreted sorts are distinguished by name within a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sort {
    /// Boolean sort
    Bool,
    /// Mathematical integer sort
    Int,
    /// Unicode text sort
    Text,
    /// Uninterpreted sort: no structure beyond identity
    Uninterpreted(String),
    /// Sequence sort over an element sort
    Seq(Box<Sort>),
}

impl Sort {
    /// Convenience constructor for `Seq`.
    pub fn seq_of(element: Sort) -> Sort {
        Sort::Seq(Box::new(element))
    }

    /// Whether ordering comparisons apply to this sort.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Sort::Int)
    }

    /// Validate this descriptor.
    ///
    /// Rejected: an uninterpreted sort with an empty name, and a sequence
    /// whose element is itself a sequence. Sequence constants are declared
    /// from a scalar element sort at the oracle boundary, so a nested
    /// sequence is an invalid inner sort.
    pub fn validate(&self) -> Result<(), ExprError> {
        match self {
            Sort::Bool | Sort::Int | Sort::Text => Ok(()),
            Sort::Uninterpreted(name) => {
                if name.is_empty() {
                    Err(ExprError::InvalidSort(
                        "uninterpreted sort requires a non-empty name".to_string(),
                    ))
                } else {
                    Ok(())
                }
            }
            Sort::Seq(element) => {
                if matches!(**element, Sort::Seq(_)) {
                    return Err(ExprError::InvalidSort(format!(
                        "sequence element sort must be scalar, got {element}"
                    )));
                }
                element.validate()
            }
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sort::Bool => write!(f, "Bool"),
            Sort::Int => write!(f, "Int"),
            Sort::Text => write!(f, "Text"),
            Sort::Uninterpreted(name) => write!(f, "{name}"),
            Sort::Seq(element) => write!(f, "(Seq {element})"),
        }
    }
}
