use std::collections::HashMap;

use predsat_expr::Expr;
use z3::ast::{Bool, Int, Seq, String as TextAst};

use crate::error::SolverError;
use crate::sorts::SortRegistry;
use crate::symbols::SymbolTable;
use crate::term::OracleTerm;

/// Compiles predicate expressions into oracle terms.
///
/// Compilation is a pure bottom-up fold, memoized per session: a
/// sub-expression referenced twice compiles once. Operand sorts are
/// re-validated at the oracle boundary even though `Expr` constructors
/// already enforce them.
#[derive(Debug, Default)]
pub(crate) struct Encoder {
    registry: SortRegistry,
    symbols: SymbolTable,
    memo: HashMap<Expr, OracleTerm>,
}

impl Encoder {
    pub fn new() -> Encoder {
        Encoder {
            registry: SortRegistry::new(),
            symbols: SymbolTable::new(),
            memo: HashMap::new(),
        }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn compile(&mut self, expr: &Expr) -> Result<OracleTerm, SolverError> {
        if let Some(term) = self.memo.get(expr) {
            return Ok(term.clone());
        }
        let term = self.compile_node(expr)?;
        self.memo.insert(expr.clone(), term.clone());
        Ok(term)
    }

    fn compile_node(&mut self, expr: &Expr) -> Result<OracleTerm, SolverError> {
        match expr {
            Expr::Var(variable) => self.symbols.declare(&mut self.registry, variable),

            Expr::IntLit(value) => Ok(OracleTerm::Int(Int::from_i64(*value))),
            Expr::StrLit(value) => Ok(OracleTerm::Text(TextAst::from(value.as_str()))),

            Expr::Eq(lhs, rhs) => {
                let lhs = self.compile(lhs)?;
                let rhs = self.compile(rhs)?;
                match lhs.eq_term(&rhs) {
                    Some(term) => Ok(OracleTerm::Bool(term)),
                    None => Err(mismatch("=", "operands of one sort", &lhs, Some(&rhs))),
                }
            }

            Expr::Gt(lhs, rhs) => self.compare(">", lhs, rhs, |a, b| a.gt(b)),
            Expr::Ge(lhs, rhs) => self.compare(">=", lhs, rhs, |a, b| a.ge(b)),
            Expr::Lt(lhs, rhs) => self.compare("<", lhs, rhs, |a, b| a.lt(b)),
            Expr::Le(lhs, rhs) => self.compare("<=", lhs, rhs, |a, b| a.le(b)),

            Expr::And(operands) => {
                let bools = self.booleans("and", operands)?;
                // Empty conjunction is trivially true; the oracle's n-ary
                // constructor is not relied on for the empty case.
                if bools.is_empty() {
                    return Ok(OracleTerm::Bool(Bool::from_bool(true)));
                }
                let refs: Vec<&Bool> = bools.iter().collect();
                Ok(OracleTerm::Bool(Bool::and(&refs)))
            }
            Expr::Or(operands) => {
                let bools = self.booleans("or", operands)?;
                // Empty disjunction is trivially false.
                if bools.is_empty() {
                    return Ok(OracleTerm::Bool(Bool::from_bool(false)));
                }
                let refs: Vec<&Bool> = bools.iter().collect();
                Ok(OracleTerm::Bool(Bool::or(&refs)))
            }

            Expr::Not(operand) => {
                let term = self.compile(operand)?;
                match term {
                    OracleTerm::Bool(b) => Ok(OracleTerm::Bool(b.not())),
                    other => Err(mismatch("not", "a Bool operand", &other, None)),
                }
            }

            Expr::Contains { haystack, needle } => {
                let haystack = self.compile(haystack)?;
                let needle = self.compile(needle)?;
                match (&haystack, &needle) {
                    (OracleTerm::Text(h), OracleTerm::Text(n)) => {
                        Ok(OracleTerm::Bool(h.contains(n)))
                    }
                    _ => Err(mismatch(
                        "contains",
                        "Text operands",
                        &haystack,
                        Some(&needle),
                    )),
                }
            }

            Expr::HasSuffix { suffix, whole } => {
                let suffix = self.compile(suffix)?;
                let whole = self.compile(whole)?;
                match (&suffix, &whole) {
                    // The oracle's suffix primitive takes (suffix, whole)
                    // argument order.
                    (OracleTerm::Text(s), OracleTerm::Text(w)) => {
                        Ok(OracleTerm::Bool(s.suffix(w)))
                    }
                    _ => Err(mismatch(
                        "has-suffix",
                        "Text operands",
                        &suffix,
                        Some(&whole),
                    )),
                }
            }

            Expr::SeqContains { seq, element } => {
                let seq = self.compile(seq)?;
                let element = self.compile(element)?;
                match seq {
                    // Element membership is sequence containment of the unit
                    // sequence holding the element.
                    OracleTerm::Seq(s) => {
                        let unit = Seq::unit(&element.into_dynamic());
                        Ok(OracleTerm::Bool(s.contains(&unit)))
                    }
                    other => Err(mismatch(
                        "seq-contains",
                        "a sequence-sorted first operand",
                        &other,
                        None,
                    )),
                }
            }
        }
    }

    fn compare<F>(
        &mut self,
        operation: &'static str,
        lhs: &Expr,
        rhs: &Expr,
        op: F,
    ) -> Result<OracleTerm, SolverError>
    where
        F: FnOnce(&Int, &Int) -> Bool,
    {
        let lhs = self.compile(lhs)?;
        let rhs = self.compile(rhs)?;
        match (&lhs, &rhs) {
            (OracleTerm::Int(a), OracleTerm::Int(b)) => Ok(OracleTerm::Bool(op(a, b))),
            _ => Err(mismatch(operation, "Int operands", &lhs, Some(&rhs))),
        }
    }

    fn booleans(
        &mut self,
        operation: &'static str,
        operands: &[Expr],
    ) -> Result<Vec<Bool>, SolverError> {
        let mut bools = Vec::with_capacity(operands.len());
        for operand in operands {
            match self.compile(operand)? {
                OracleTerm::Bool(b) => bools.push(b),
                other => return Err(mismatch(operation, "Bool operands", &other, None)),
            }
        }
        Ok(bools)
    }
}

fn mismatch(
    operation: &'static str,
    expected: &str,
    lhs: &OracleTerm,
    rhs: Option<&OracleTerm>,
) -> SolverError {
    let found = match rhs {
        Some(rhs) => format!("{} and {}", lhs.kind(), rhs.kind()),
        None => lhs.kind().to_string(),
    };
    SolverError::SortMismatch {
        operation,
        expected: expected.to_string(),
        found,
    }
}
