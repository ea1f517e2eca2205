use crate::error::ExprError;
use crate::sort::Sort;

/// A free symbolic value: a name bound to a sort.
///
/// Within one session a name is bound to exactly one sort; re-declaring the
/// same name with a different sort is rejected by the solver-side symbol
/// table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    name: String,
    sort: Sort,
}

impl Variable {
    /// Create a variable with the given name and sort.
    pub fn new(name: impl Into<String>, sort: Sort) -> Variable {
        Variable {
            name: name.into(),
            sort,
        }
    }

    /// Create a variable named after a member-access path.
    ///
    /// `Variable::path(["author", "role"], Sort::Text)` yields the symbol
    /// `author.role`. The dotted name is an atomic encoding convention for
    /// "a property reachable via member access" — no structural
    /// decomposition is performed on it anywhere in the system.
    pub fn path<'a, I>(segments: I, sort: Sort) -> Variable
    where
        I: IntoIterator<Item = &'a str>,
    {
        let name = segments.into_iter().collect::<Vec<_>>().join(".");
        Variable { name, sort }
    }

    /// The variable's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The variable's sort.
    pub fn sort(&self) -> &Sort {
        &self.sort
    }
}

/// An immutable predicate expression tree.
///
/// Expressions are pure values: building one performs no solver interaction.
/// Use the associated constructors rather than the enum variants directly —
/// the constructors perform the static sort checks, so every `Expr` value
/// is well-sorted by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// Variable reference
    Var(Variable),
    /// Integer literal
    IntLit(i64),
    /// Text literal
    StrLit(String),
    /// Equality over any matching sort
    Eq(Box<Expr>, Box<Expr>),
    /// Numeric `>`
    Gt(Box<Expr>, Box<Expr>),
    /// Numeric `>=`
    Ge(Box<Expr>, Box<Expr>),
    /// Numeric `<`
    Lt(Box<Expr>, Box<Expr>),
    /// Numeric `<=`
    Le(Box<Expr>, Box<Expr>),
    /// N-ary conjunction; empty conjunction is trivially true
    And(Vec<Expr>),
    /// N-ary disjunction; empty disjunction is trivially false
    Or(Vec<Expr>),
    /// Negation
    Not(Box<Expr>),
    /// Text containment: `needle` occurs in `haystack`
    Contains {
        haystack: Box<Expr>,
        needle: Box<Expr>,
    },
    /// Text affix: `suffix` ends `whole`
    HasSuffix {
        suffix: Box<Expr>,
        whole: Box<Expr>,
    },
    /// Sequence membership: `element` occurs in `seq`
    SeqContains {
        seq: Box<Expr>,
        element: Box<Expr>,
    },
}

impl Expr {
    /// Reference a variable.
    pub fn var(variable: Variable) -> Expr {
        Expr::Var(variable)
    }

    /// Integer literal.
    pub fn int(value: i64) -> Expr {
        Expr::IntLit(value)
    }

    /// Text literal.
    pub fn text(value: impl Into<String>) -> Expr {
        Expr::StrLit(value.into())
    }

    /// Equality. Both operands must share a sort.
    pub fn eq(lhs: Expr, rhs: Expr) -> Result<Expr, ExprError> {
        let (ls, rs) = (lhs.sort(), rhs.sort());
        if ls != rs {
            return Err(ExprError::SortMismatch {
                operation: "=",
                expected: "operands of one sort".to_string(),
                found: format!("{ls} and {rs}"),
            });
        }
        Ok(Expr::Eq(Box::new(lhs), Box::new(rhs)))
    }

    /// Numeric `>`.
    pub fn gt(lhs: Expr, rhs: Expr) -> Result<Expr, ExprError> {
        Self::ordering(">", lhs, rhs, Expr::Gt)
    }

    /// Numeric `>=`.
    pub fn ge(lhs: Expr, rhs: Expr) -> Result<Expr, ExprError> {
        Self::ordering(">=", lhs, rhs, Expr::Ge)
    }

    /// Numeric `<`.
    pub fn lt(lhs: Expr, rhs: Expr) -> Result<Expr, ExprError> {
        Self::ordering("<", lhs, rhs, Expr::Lt)
    }

    /// Numeric `<=`.
    pub fn le(lhs: Expr, rhs: Expr) -> Result<Expr, ExprError> {
        Self::ordering("<=", lhs, rhs, Expr::Le)
    }

    fn ordering(
        operation: &'static str,
        lhs: Expr,
        rhs: Expr,
        node: fn(Box<Expr>, Box<Expr>) -> Expr,
    ) -> Result<Expr, ExprError> {
        let (ls, rs) = (lhs.sort(), rhs.sort());
        if !ls.is_numeric() || !rs.is_numeric() {
            return Err(ExprError::SortMismatch {
                operation,
                expected: "Int operands".to_string(),
                found: format!("{ls} and {rs}"),
            });
        }
        Ok(node(Box::new(lhs), Box::new(rhs)))
    }

    /// N-ary conjunction of boolean sub-expressions.
    ///
    /// The empty conjunction is trivially true.
    pub fn and(operands: Vec<Expr>) -> Result<Expr, ExprError> {
        Self::connective("and", operands, Expr::And)
    }

    /// N-ary disjunction of boolean sub-expressions.
    ///
    /// The empty disjunction is trivially false.
    pub fn or(operands: Vec<Expr>) -> Result<Expr, ExprError> {
        Self::connective("or", operands, Expr::Or)
    }

    fn connective(
        operation: &'static str,
        operands: Vec<Expr>,
        node: fn(Vec<Expr>) -> Expr,
    ) -> Result<Expr, ExprError> {
        for operand in &operands {
            let sort = operand.sort();
            if sort != Sort::Bool {
                return Err(ExprError::SortMismatch {
                    operation,
                    expected: "Bool operands".to_string(),
                    found: sort.to_string(),
                });
            }
        }
        Ok(node(operands))
    }

    /// Boolean negation.
    pub fn not(operand: Expr) -> Result<Expr, ExprError> {
        let sort = operand.sort();
        if sort != Sort::Bool {
            return Err(ExprError::SortMismatch {
                operation: "not",
                expected: "a Bool operand".to_string(),
                found: sort.to_string(),
            });
        }
        Ok(Expr::Not(Box::new(operand)))
    }

    /// Text containment: `needle` occurs somewhere in `haystack`.
    pub fn contains(haystack: Expr, needle: Expr) -> Result<Expr, ExprError> {
        Self::text_pair("contains", &haystack, &needle)?;
        Ok(Expr::Contains {
            haystack: Box::new(haystack),
            needle: Box::new(needle),
        })
    }

    /// Text affix: `suffix` is a suffix of `whole`.
    pub fn has_suffix(suffix: Expr, whole: Expr) -> Result<Expr, ExprError> {
        Self::text_pair("has-suffix", &suffix, &whole)?;
        Ok(Expr::HasSuffix {
            suffix: Box::new(suffix),
            whole: Box::new(whole),
        })
    }

    fn text_pair(operation: &'static str, a: &Expr, b: &Expr) -> Result<(), ExprError> {
        let (sa, sb) = (a.sort(), b.sort());
        if sa != Sort::Text || sb != Sort::Text {
            return Err(ExprError::SortMismatch {
                operation,
                expected: "Text operands".to_string(),
                found: format!("{sa} and {sb}"),
            });
        }
        Ok(())
    }

    /// Sequence membership: `element` occurs in `seq`.
    ///
    /// `seq` must have sort `Seq(S)` and `element` sort `S`.
    pub fn seq_contains(seq: Expr, element: Expr) -> Result<Expr, ExprError> {
        let seq_sort = seq.sort();
        let element_sort = element.sort();
        match &seq_sort {
            Sort::Seq(inner) if **inner == element_sort => Ok(Expr::SeqContains {
                seq: Box::new(seq),
                element: Box::new(element),
            }),
            Sort::Seq(inner) => Err(ExprError::SortMismatch {
                operation: "seq-contains",
                expected: format!("an element of sort {inner}"),
                found: element_sort.to_string(),
            }),
            other => Err(ExprError::SortMismatch {
                operation: "seq-contains",
                expected: "a sequence-sorted first operand".to_string(),
                found: other.to_string(),
            }),
        }
    }

    /// The result sort of this expression.
    ///
    /// Literals and variables carry their own sort; every operator node is
    /// boolean-valued.
    pub fn sort(&self) -> Sort {
        match self {
            Expr::Var(variable) => variable.sort.clone(),
            Expr::IntLit(_) => Sort::Int,
            Expr::StrLit(_) => Sort::Text,
            Expr::Eq(_, _)
            | Expr::Gt(_, _)
            | Expr::Ge(_, _)
            | Expr::Lt(_, _)
            | Expr::Le(_, _)
            | Expr::And(_)
            | Expr::Or(_)
            | Expr::Not(_)
            | Expr::Contains { .. }
            | Expr::HasSuffix { .. }
            | Expr::SeqContains { .. } => Sort::Bool,
        }
    }
}
