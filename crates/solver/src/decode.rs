//! Sort-directed decoding of oracle models into [`Assignment`]s.
//!
//! Every declared variable appears in the decoded assignment. A variable
//! the oracle's model cannot concretize — which is legal, the oracle may
//! omit variables that do not constrain satisfiability, and sequence-sort
//! models are not always reconstructible — decodes to [`Value::Unbound`]
//! rather than erroring or being dropped.

use z3::ast::Int;

use crate::model::{Assignment, Value};
use crate::symbols::SymbolTable;
use crate::term::OracleTerm;

pub(crate) fn decode_model(model: &z3::Model, symbols: &SymbolTable) -> Assignment {
    let mut bindings = Vec::with_capacity(symbols.declared().len());
    for (variable, term) in symbols.declared() {
        let value = decode_term(model, term);
        tracing::trace!(variable = variable.name(), ?value, "decoded binding");
        bindings.push((variable.clone(), value));
    }
    Assignment::new(bindings)
}

fn decode_term(model: &z3::Model, term: &OracleTerm) -> Value {
    match term {
        OracleTerm::Bool(b) => model
            .eval(b, true)
            .and_then(|v| v.as_bool())
            .map(Value::Bool)
            .unwrap_or(Value::Unbound),
        // Integer sorts decode through the oracle's numeral.
        OracleTerm::Int(i) => model
            .eval(i, true)
            .and_then(|v| v.as_i64())
            .map(Value::Int)
            .unwrap_or(Value::Unbound),
        // The literal accessor strips the oracle's native string quoting.
        OracleTerm::Text(s) => model
            .eval(s, true)
            .and_then(|v| v.as_string())
            .map(Value::Text)
            .unwrap_or(Value::Unbound),
        OracleTerm::Seq(s) => decode_seq(model, s).map(Value::Seq).unwrap_or(Value::Unbound),
        // No closed-form meaning for uninterpreted witnesses; keep the
        // oracle's display form.
        OracleTerm::Opaque(d) => model
            .eval(d, true)
            .map(|v| Value::Opaque(v.to_string()))
            .unwrap_or(Value::Unbound),
    }
}

/// Decode a sequence-of-text value element by element, in sequence order.
///
/// Returns `None` whenever the model does not pin the length or an element
/// down to a literal; the caller reports that as `Unbound`.
fn decode_seq(model: &z3::Model, seq: &z3::ast::Seq) -> Option<Vec<String>> {
    let length = model.eval(&seq.length(), true)?.as_i64()?;
    if length < 0 {
        return None;
    }
    let mut items = Vec::with_capacity(length as usize);
    for index in 0..length {
        let element = model.eval(&seq.nth(&Int::from_i64(index)), true)?;
        items.push(element.as_string()?.as_string()?);
    }
    Some(items)
}
