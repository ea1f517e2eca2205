use std::collections::HashMap;

use predsat_expr::{Sort, Variable};
use z3::Symbol;
use z3::ast::{Bool, Dynamic, Int, Seq, String as TextAst};

use crate::error::SolverError;
use crate::sorts::{SortHandle, SortRegistry};
use crate::term::OracleTerm;

/// Maps variable names to oracle constant declarations.
///
/// One declaration per (name, sort) pair per session: the first call for a
/// name creates and caches the constant, a later call with the same name and
/// sort returns the cached term, and a later call with a different sort
/// fails with `SortConflict`. Declaration order is preserved for model
/// decoding.
#[derive(Debug, Default)]
pub(crate) struct SymbolTable {
    declared: Vec<(Variable, OracleTerm)>,
    index: HashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable {
            declared: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Declare a variable, or return its cached declaration.
    pub fn declare(
        &mut self,
        registry: &mut SortRegistry,
        variable: &Variable,
    ) -> Result<OracleTerm, SolverError> {
        if let Some(&slot) = self.index.get(variable.name()) {
            let (declared, term) = &self.declared[slot];
            if declared.sort() == variable.sort() {
                return Ok(term.clone());
            }
            return Err(SolverError::SortConflict {
                name: variable.name().to_string(),
                declared: declared.sort().clone(),
                requested: variable.sort().clone(),
            });
        }

        let handle = registry.sort_for(variable.sort())?;
        let name = variable.name();
        let term = match (variable.sort(), handle) {
            (Sort::Bool, _) => OracleTerm::Bool(Bool::new_const(name)),
            (Sort::Int, _) => OracleTerm::Int(Int::new_const(name)),
            (Sort::Text, _) => OracleTerm::Text(TextAst::new_const(name)),
            (Sort::Uninterpreted(_), SortHandle::Scalar(sort)) => OracleTerm::Opaque(
                Dynamic::new_const(Symbol::String(name.to_string()), &sort),
            ),
            (Sort::Seq(_), SortHandle::Sequence(element)) => {
                OracleTerm::Seq(Seq::new_const(name, &element))
            }
            (sort, _) => {
                return Err(SolverError::InvalidSort(format!(
                    "cannot declare constant of sort {sort}"
                )));
            }
        };

        self.index.insert(name.to_string(), self.declared.len());
        self.declared.push((variable.clone(), term.clone()));
        Ok(term)
    }

    /// All declarations, in declaration order.
    pub fn declared(&self) -> &[(Variable, OracleTerm)] {
        &self.declared
    }
}
