use std::fmt;

use predsat_expr::Variable;

/// A decoded model value for one variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Integer witness.
    Int(i64),
    /// Text witness with the oracle's native quoting stripped.
    Text(String),
    /// Boolean witness.
    Bool(bool),
    /// Sequence-of-text witness, element by element in sequence order.
    Seq(Vec<String>),
    /// Uninterpreted-sort witness in the oracle's display form.
    Opaque(String),
    /// The oracle's model had no usable binding for this variable.
    ///
    /// Legal: the oracle is free to omit variables that do not constrain
    /// satisfiability. Distinct from the variable being absent from the
    /// assignment entirely.
    Unbound,
}

impl Value {
    /// Returns `true` unless this is the `Unbound` marker.
    pub fn is_bound(&self) -> bool {
        !matches!(self, Value::Unbound)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s:?}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Seq(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item:?}")?;
                }
                write!(f, "]")
            }
            Value::Opaque(display) => write!(f, "{display}"),
            Value::Unbound => write!(f, "<unbound>"),
        }
    }
}

/// A satisfying assignment: every declared variable mapped to a decoded
/// value, in declaration order.
///
/// Variables the oracle left without a usable binding appear with
/// [`Value::Unbound`] rather than being omitted, so callers can distinguish
/// "the solver didn't care" from "absent entirely".
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    bindings: Vec<(Variable, Value)>,
}

impl Assignment {
    /// Create an assignment from decoded bindings.
    pub fn new(bindings: Vec<(Variable, Value)>) -> Assignment {
        Assignment { bindings }
    }

    /// Look up a variable's value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings
            .iter()
            .find(|(variable, _)| variable.name() == name)
            .map(|(_, value)| value)
    }

    /// Iterate bindings in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &Value)> {
        self.bindings.iter().map(|(variable, value)| (variable, value))
    }

    /// Number of declared variables in this assignment.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the assignment covers no variables.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use predsat_expr::Sort;

    #[test]
    fn empty_assignment() {
        let assignment = Assignment::new(vec![]);
        assert!(assignment.is_empty());
        assert_eq!(assignment.len(), 0);
        assert_eq!(assignment.get("x"), None);
    }

    #[test]
    fn lookup_by_name() {
        let assignment = Assignment::new(vec![
            (Variable::new("rating", Sort::Int), Value::Int(2)),
            (
                Variable::new("title", Sort::Text),
                Value::Text("Title".to_string()),
            ),
        ]);
        assert_eq!(assignment.len(), 2);
        assert_eq!(assignment.get("rating"), Some(&Value::Int(2)));
        assert_eq!(
            assignment.get("title"),
            Some(&Value::Text("Title".to_string()))
        );
        assert_eq!(assignment.get("missing"), None);
    }

    #[test]
    fn unbound_is_present_but_not_bound() {
        let assignment = Assignment::new(vec![(
            Variable::new("tags", Sort::seq_of(Sort::Text)),
            Value::Unbound,
        )]);
        // Present in the assignment, distinct from absent.
        let value = assignment.get("tags").expect("tags must be present");
        assert!(!value.is_bound());
        assert_eq!(assignment.get("absent"), None);
    }

    #[test]
    fn iteration_preserves_declaration_order() {
        let assignment = Assignment::new(vec![
            (Variable::new("a", Sort::Int), Value::Int(1)),
            (Variable::new("b", Sort::Int), Value::Int(2)),
            (Variable::new("c", Sort::Int), Value::Unbound),
        ]);
        let names: Vec<&str> = assignment.iter().map(|(v, _)| v.name()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn value_display() {
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::Text("Title".to_string()).to_string(), "\"Title\"");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(
            Value::Seq(vec!["a".to_string(), "b".to_string()]).to_string(),
            "[\"a\", \"b\"]"
        );
        assert_eq!(Value::Opaque("Auth!val!0".to_string()).to_string(), "Auth!val!0");
        assert_eq!(Value::Unbound.to_string(), "<unbound>");
    }
}
