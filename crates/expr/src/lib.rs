//! # predsat-expr
//!
//! Typed predicate expressions over record fields, strings, and sequences.
//!
//! This crate defines the pure value types of predsat: [`Sort`] descriptors,
//! [`Variable`]s, and the [`Expr`] tree. Constructors perform static sort
//! checks, so an ill-sorted predicate is rejected the moment it is built
//! rather than when it reaches a solver. Building an expression performs no
//! solver interaction; compilation and satisfiability checking live in
//! `predsat-solver`.
//!
//! ## Usage
//!
//! ```
//! use predsat_expr::{Expr, Sort, Variable};
//!
//! let rating = Variable::new("rating", Sort::Int);
//! let pred = Expr::and(vec![
//!     Expr::gt(Expr::var(rating), Expr::int(1)).unwrap(),
//! ])
//! .unwrap();
//! assert_eq!(pred.sort(), Sort::Bool);
//! ```

pub mod error;
pub mod expr;
pub mod sort;

pub use error::ExprError;
pub use expr::{Expr, Variable};
pub use sort::Sort;
