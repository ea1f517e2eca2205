use std::collections::HashMap;

use predsat_expr::Sort;
use z3::{Sort as Z3Sort, Symbol};

use crate::error::SolverError;

/// Oracle-level handle for a sort descriptor.
///
/// Sequence constants are declared from their *element* sort at the oracle
/// boundary, so a sequence descriptor resolves to the element's handle.
#[derive(Debug, Clone)]
pub(crate) enum SortHandle {
    Scalar(Z3Sort),
    /// Element sort of a sequence.
    Sequence(Z3Sort),
}

/// Maps sort descriptors to oracle sort handles.
///
/// Uninterpreted sorts are registered by name on first request and cached:
/// a later request with the same name returns the previously registered
/// handle, never a fresh one. Distinct handles for the "same" name would
/// make equality constraints over that sort meaningless.
#[derive(Debug, Default)]
pub(crate) struct SortRegistry {
    named: HashMap<String, Z3Sort>,
}

impl SortRegistry {
    pub fn new() -> SortRegistry {
        SortRegistry {
            named: HashMap::new(),
        }
    }

    /// Resolve a descriptor to an oracle handle. Idempotent.
    pub fn sort_for(&mut self, sort: &Sort) -> Result<SortHandle, SolverError> {
        sort.validate()?;
        match sort {
            Sort::Bool => Ok(SortHandle::Scalar(Z3Sort::bool())),
            Sort::Int => Ok(SortHandle::Scalar(Z3Sort::int())),
            Sort::Text => Ok(SortHandle::Scalar(Z3Sort::string())),
            Sort::Uninterpreted(name) => Ok(SortHandle::Scalar(self.named(name))),
            Sort::Seq(element) => match self.sort_for(element)? {
                SortHandle::Scalar(handle) => Ok(SortHandle::Sequence(handle)),
                SortHandle::Sequence(_) => Err(SolverError::InvalidSort(format!(
                    "sequence element sort must be scalar, got {element}"
                ))),
            },
        }
    }

    fn named(&mut self, name: &str) -> Z3Sort {
        self.named
            .entry(name.to_string())
            .or_insert_with(|| Z3Sort::uninterpreted(Symbol::String(name.to_string())))
            .clone()
    }
}
