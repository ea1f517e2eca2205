use std::time::Instant;

use predsat_expr::{Expr, Sort};
use z3::{Config, Params, SatResult, Solver};

use crate::decode::decode_model;
use crate::encode::Encoder;
use crate::error::SolverError;
use crate::model::Assignment;
use crate::result::CheckResult;
use crate::term::OracleTerm;

/// Session configuration.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Solver timeout in milliseconds for the `check()` boundary
    /// (0 = unbounded).
    timeout_ms: u32,
}

impl SessionConfig {
    /// Default configuration: no timeout.
    pub fn new() -> SessionConfig {
        SessionConfig { timeout_ms: 0 }
    }

    /// Bound the satisfiability check. Real-world queries are unbounded in
    /// the worst case; a timed-out check returns `Unknown`, not an error.
    pub fn with_timeout(mut self, timeout_ms: u32) -> SessionConfig {
        self.timeout_ms = timeout_ms;
        self
    }

    /// The configured timeout in milliseconds.
    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }
}

/// The per-session oracle resource bundle. Dropping it releases the native
/// solver resources, on success and error paths alike.
#[derive(Debug)]
struct Oracle {
    _config: Config,
    solver: Solver,
    encoder: Encoder,
    asserted: Vec<Expr>,
}

/// One solver-oracle instance driven through an assert–check–decode cycle.
///
/// Lifecycle: created fresh per scenario, asserted against zero or more
/// times, checked, decoded, then closed. [`Session::close`] releases the
/// native resources deterministically; a session dropped without an
/// explicit close releases them on drop. Every operation on a closed
/// session fails with [`SolverError::SessionClosed`].
#[derive(Debug)]
pub struct Session {
    oracle: Option<Oracle>,
    outcome: Option<CheckResult>,
}

impl Session {
    /// Create a session with default configuration.
    pub fn new() -> Session {
        Session::with_config(SessionConfig::new())
    }

    /// Create a session with the given configuration.
    pub fn with_config(config: SessionConfig) -> Session {
        let z3_config = Config::new();
        let solver = Solver::new();
        if config.timeout_ms > 0 {
            let mut params = Params::new();
            params.set_u32("timeout", config.timeout_ms);
            solver.set_params(&params);
        }
        Session {
            oracle: Some(Oracle {
                _config: z3_config,
                solver,
                encoder: Encoder::new(),
                asserted: Vec::new(),
            }),
            outcome: None,
        }
    }

    /// Compile and assert a boolean predicate.
    ///
    /// Fails with `NotBoolean` if the expression's sort is not `Bool`, or
    /// with the compilation error (`SortMismatch`, `SortConflict`,
    /// `InvalidSort`) — all raised here, before any satisfiability check is
    /// paid for.
    pub fn assert(&mut self, expr: &Expr) -> Result<(), SolverError> {
        let oracle = self.oracle.as_mut().ok_or(SolverError::SessionClosed)?;

        let sort = expr.sort();
        if sort != Sort::Bool {
            return Err(SolverError::NotBoolean(sort));
        }
        let OracleTerm::Bool(term) = oracle.encoder.compile(expr)? else {
            return Err(SolverError::NotBoolean(sort));
        };
        oracle.solver.assert(&term);
        oracle.asserted.push(expr.clone());
        // New assertions invalidate any previous check outcome.
        self.outcome = None;
        tracing::trace!(total = oracle.asserted.len(), "constraint asserted");
        Ok(())
    }

    /// Run the satisfiability query.
    ///
    /// This is the only potentially long-running operation in the system.
    /// `Unknown` is a valid terminal outcome, not an error; re-running the
    /// check with the same assertions yields the same class of result.
    pub fn check(&mut self) -> Result<CheckResult, SolverError> {
        let oracle = self.oracle.as_ref().ok_or(SolverError::SessionClosed)?;

        let start = Instant::now();
        let result = match oracle.solver.check() {
            SatResult::Sat => {
                tracing::debug!("check: SAT in {:?}", start.elapsed());
                CheckResult::Sat
            }
            SatResult::Unsat => {
                tracing::debug!("check: UNSAT in {:?}", start.elapsed());
                CheckResult::Unsat
            }
            SatResult::Unknown => {
                tracing::debug!("check: UNKNOWN in {:?}", start.elapsed());
                CheckResult::Unknown("unknown".to_string())
            }
        };
        self.outcome = Some(result.clone());
        Ok(result)
    }

    /// Decode the model into an assignment.
    ///
    /// Returns `Some` only after a check that came back `Sat`; after
    /// `Unsat` or `Unknown` (or before any check) this returns `None`
    /// without invoking the oracle's model accessor — requesting a model
    /// when none exists is the documented misuse this avoids.
    pub fn decode(&self) -> Result<Option<Assignment>, SolverError> {
        let oracle = self.oracle.as_ref().ok_or(SolverError::SessionClosed)?;

        match &self.outcome {
            Some(CheckResult::Sat) => {
                let model = oracle.solver.get_model().ok_or_else(|| {
                    SolverError::OracleFailure(
                        "satisfiable check produced no model".to_string(),
                    )
                })?;
                Ok(Some(decode_model(&model, oracle.encoder.symbols())))
            }
            _ => Ok(None),
        }
    }

    /// Release the native solver resources.
    ///
    /// Closed is terminal: closing twice, like any other operation on a
    /// closed session, fails with `SessionClosed` — it indicates a
    /// lifecycle bug in the caller.
    pub fn close(&mut self) -> Result<(), SolverError> {
        if self.oracle.take().is_none() {
            return Err(SolverError::SessionClosed);
        }
        tracing::debug!("session closed");
        Ok(())
    }

    /// Whether this session has been closed.
    pub fn is_closed(&self) -> bool {
        self.oracle.is_none()
    }

    /// Audit trail: the expressions asserted so far, in order. Empty once
    /// the session is closed.
    pub fn asserted(&self) -> &[Expr] {
        self.oracle
            .as_ref()
            .map(|oracle| oracle.asserted.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for Session {
    fn default() -> Session {
        Session::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use predsat_expr::Variable;

    fn rating_gt(bound: i64) -> Expr {
        Expr::gt(
            Expr::var(Variable::new("rating", Sort::Int)),
            Expr::int(bound),
        )
        .unwrap()
    }

    // ---- Basic cycle ----

    #[test]
    fn assert_check_decode_cycle() {
        let mut session = Session::new();
        session.assert(&rating_gt(1)).unwrap();

        let result = session.check().unwrap();
        assert!(result.is_sat());

        let assignment = session.decode().unwrap().expect("model for sat");
        match assignment.get("rating").expect("rating present") {
            crate::model::Value::Int(n) => assert!(*n >= 2),
            other => panic!("unexpected value: {other:?}"),
        }

        session.close().unwrap();
    }

    #[test]
    fn contradiction_is_unsat_and_decodes_to_no_model() {
        let mut session = Session::new();
        session.assert(&rating_gt(5)).unwrap();
        session
            .assert(
                &Expr::lt(
                    Expr::var(Variable::new("rating", Sort::Int)),
                    Expr::int(3),
                )
                .unwrap(),
            )
            .unwrap();

        assert!(session.check().unwrap().is_unsat());
        assert_eq!(session.decode().unwrap(), None);
        session.close().unwrap();
    }

    // ---- Edge-case connectives ----

    #[test]
    fn empty_and_checks_sat() {
        let mut session = Session::new();
        session.assert(&Expr::and(vec![]).unwrap()).unwrap();
        assert!(session.check().unwrap().is_sat());
        session.close().unwrap();
    }

    #[test]
    fn empty_or_checks_unsat() {
        let mut session = Session::new();
        session.assert(&Expr::or(vec![]).unwrap()).unwrap();
        assert!(session.check().unwrap().is_unsat());
        session.close().unwrap();
    }

    // ---- Misuse ----

    #[test]
    fn asserting_non_boolean_fails_before_check() {
        let mut session = Session::new();
        let err = session.assert(&Expr::int(1)).unwrap_err();
        assert_eq!(err, SolverError::NotBoolean(Sort::Int));
        session.close().unwrap();
    }

    #[test]
    fn sort_conflict_propagates_from_assert() {
        let mut session = Session::new();
        session.assert(&rating_gt(1)).unwrap();
        let clash = Expr::eq(
            Expr::var(Variable::new("rating", Sort::Text)),
            Expr::text("x"),
        )
        .unwrap();
        let err = session.assert(&clash).unwrap_err();
        assert!(matches!(err, SolverError::SortConflict { .. }));
        session.close().unwrap();
    }

    #[test]
    fn decode_before_check_is_no_model() {
        let mut session = Session::new();
        session.assert(&rating_gt(1)).unwrap();
        assert_eq!(session.decode().unwrap(), None);
        session.close().unwrap();
    }

    #[test]
    fn new_assertions_invalidate_the_outcome() {
        let mut session = Session::new();
        session.assert(&rating_gt(1)).unwrap();
        assert!(session.check().unwrap().is_sat());

        session.assert(&rating_gt(10)).unwrap();
        // Back in the asserting state: no model until the next check.
        assert_eq!(session.decode().unwrap(), None);
        assert!(session.check().unwrap().is_sat());
        session.close().unwrap();
    }

    // ---- Closed state ----

    #[test]
    fn closed_session_rejects_every_operation() {
        let mut session = Session::new();
        session.close().unwrap();

        assert!(session.is_closed());
        assert_eq!(
            session.assert(&rating_gt(1)).unwrap_err(),
            SolverError::SessionClosed
        );
        assert_eq!(session.check().unwrap_err(), SolverError::SessionClosed);
        assert_eq!(session.decode().unwrap_err(), SolverError::SessionClosed);
        assert_eq!(session.close().unwrap_err(), SolverError::SessionClosed);
    }

    #[test]
    fn close_is_reachable_after_failed_assert() {
        let mut session = Session::new();
        assert!(session.assert(&Expr::int(1)).is_err());
        assert!(session.close().is_ok());
    }

    // ---- Audit trail ----

    #[test]
    fn audit_trail_preserves_assertion_order() {
        let mut session = Session::new();
        let first = rating_gt(1);
        let second = rating_gt(2);
        session.assert(&first).unwrap();
        session.assert(&second).unwrap();
        assert_eq!(session.asserted(), &[first, second]);
        session.close().unwrap();
        assert!(session.asserted().is_empty());
    }

    // ---- Timeout hook ----

    #[test]
    fn timeout_config_is_applied_without_breaking_easy_checks() {
        let config = SessionConfig::new().with_timeout(30_000);
        assert_eq!(config.timeout_ms(), 30_000);

        let mut session = Session::with_config(config);
        session.assert(&rating_gt(1)).unwrap();
        assert!(session.check().unwrap().is_sat());
        session.close().unwrap();
    }

    #[test]
    fn drop_without_close_is_allowed() {
        let mut session = Session::new();
        session.assert(&rating_gt(1)).unwrap();
        // Resources are released on drop; no explicit close required.
        drop(session);
    }
}
