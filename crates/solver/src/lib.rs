//! # predsat-solver
//!
//! Encodes `predsat-expr` predicates into the Z3 satisfiability engine and
//! materializes satisfying assignments.
//!
//! The central type is [`Session`]: one oracle instance per scenario, driven
//! through an assert–check–decode cycle and torn down deterministically.
//! The oracle itself (the `z3` crate, which links against the system Z3
//! library) is treated as opaque — everything this crate knows about it is
//! confined to the sort registry, the expression compiler, and the model
//! decoder.
//!
//! ## Usage
//!
//! ```no_run
//! use predsat_expr::{Expr, Sort, Variable};
//! use predsat_solver::{CheckResult, Session};
//!
//! let rating = Variable::new("rating", Sort::Int);
//! let pred = Expr::gt(Expr::var(rating), Expr::int(1)).unwrap();
//!
//! let mut session = Session::new();
//! session.assert(&pred).unwrap();
//! match session.check().unwrap() {
//!     CheckResult::Sat => {
//!         let model = session.decode().unwrap().expect("model for sat");
//!         println!("rating = {:?}", model.get("rating"));
//!     }
//!     CheckResult::Unsat => println!("unsatisfiable"),
//!     CheckResult::Unknown(reason) => println!("unknown: {reason}"),
//! }
//! session.close().unwrap();
//! ```

mod decode;
mod encode;
pub mod error;
pub mod model;
pub mod result;
pub mod session;
mod sorts;
mod symbols;
mod term;

// Re-export primary types for ergonomic use
pub use error::SolverError;
pub use model::{Assignment, Value};
pub use result::CheckResult;
pub use session::{Session, SessionConfig};
