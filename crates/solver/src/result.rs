/// Outcome of a satisfiability check.
///
/// `Unknown` is a valid terminal outcome — the oracle gave up or hit a
/// resource bound — and must be handled distinctly from both `Sat` and
/// `Unsat`. It is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    /// The asserted constraints are satisfiable.
    Sat,
    /// The asserted constraints are unsatisfiable.
    Unsat,
    /// The oracle could not decide (timeout, resource limit, etc.).
    Unknown(String),
}

impl CheckResult {
    /// Returns `true` if the result is `Sat`.
    pub fn is_sat(&self) -> bool {
        matches!(self, CheckResult::Sat)
    }

    /// Returns `true` if the result is `Unsat`.
    pub fn is_unsat(&self) -> bool {
        matches!(self, CheckResult::Unsat)
    }

    /// Returns `true` if the result is `Unknown`.
    pub fn is_unknown(&self) -> bool {
        matches!(self, CheckResult::Unknown(_))
    }
}
