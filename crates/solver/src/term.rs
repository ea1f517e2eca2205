use z3::ast::{Ast, Bool, Dynamic, Int, Seq, String as TextAst};

/// Oracle-level term: a typed wrapper over the z3 AST values compilation
/// produces.
#[derive(Debug, Clone)]
pub(crate) enum OracleTerm {
    Bool(Bool),
    Int(Int),
    Text(TextAst),
    Seq(Seq),
    /// Constant of an uninterpreted sort.
    Opaque(Dynamic),
}

impl OracleTerm {
    /// Short sort-class name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            OracleTerm::Bool(_) => "Bool",
            OracleTerm::Int(_) => "Int",
            OracleTerm::Text(_) => "Text",
            OracleTerm::Seq(_) => "Seq",
            OracleTerm::Opaque(_) => "uninterpreted",
        }
    }

    /// Equality between two terms of the same sort class, if they match.
    pub fn eq_term(&self, other: &OracleTerm) -> Option<Bool> {
        match (self, other) {
            (OracleTerm::Bool(a), OracleTerm::Bool(b)) => Some(a.eq(b)),
            (OracleTerm::Int(a), OracleTerm::Int(b)) => Some(a.eq(b)),
            (OracleTerm::Text(a), OracleTerm::Text(b)) => Some(a.eq(b)),
            (OracleTerm::Seq(a), OracleTerm::Seq(b)) => Some(a.eq(b)),
            (OracleTerm::Opaque(a), OracleTerm::Opaque(b)) => Some(a.eq(b)),
            _ => None,
        }
    }

    /// Erase the static type, for positions the oracle takes as dynamic.
    pub fn into_dynamic(self) -> Dynamic {
        match self {
            OracleTerm::Bool(b) => Dynamic::from_ast(&b),
            OracleTerm::Int(i) => Dynamic::from_ast(&i),
            OracleTerm::Text(s) => Dynamic::from_ast(&s),
            OracleTerm::Seq(s) => Dynamic::from_ast(&s),
            OracleTerm::Opaque(d) => d,
        }
    }
}
