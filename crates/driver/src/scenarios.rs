//! Named demonstration scenarios.
//!
//! Each scenario owns an independent session and runs a single
//! assert–check–decode cycle to completion before the next begins.

use predsat_expr::{Expr, Sort, Variable};
use predsat_solver::{Assignment, CheckResult, Session, SessionConfig, SolverError};

/// What a scenario checked and what came back.
#[derive(Debug)]
pub struct ScenarioOutcome {
    /// Human-readable rendering of the asserted predicate.
    pub predicate: &'static str,
    pub result: CheckResult,
    /// Decoded model; `None` unless the check was satisfiable.
    pub model: Option<Assignment>,
}

/// A named demonstration scenario.
pub struct Scenario {
    pub name: &'static str,
    predicate: &'static str,
    build: fn() -> Result<Expr, SolverError>,
}

impl Scenario {
    /// Run this scenario to completion in a fresh session.
    pub fn run(&self, config: &SessionConfig) -> Result<ScenarioOutcome, SolverError> {
        let predicate = (self.build)()?;

        let mut session = Session::with_config(config.clone());
        session.assert(&predicate)?;
        let result = session.check()?;
        let model = session.decode()?;
        session.close()?;

        Ok(ScenarioOutcome {
            predicate: self.predicate,
            result,
            model,
        })
    }
}

/// All scenarios, in demonstration order.
pub fn all() -> &'static [Scenario] {
    &[
        Scenario {
            name: "fields",
            predicate: r#"author == auth && title == "Title" && rating > 1"#,
            build: fields,
        },
        Scenario {
            name: "member-access",
            predicate: r#"authorId == authId || author.role == "Admin""#,
            build: member_access,
        },
        Scenario {
            name: "strings",
            predicate: r#"contains(title, "Title") && endsWith(title, "Blog")"#,
            build: strings,
        },
        Scenario {
            name: "arrays",
            predicate: r#"has(tags, "typescript")"#,
            build: arrays,
        },
        Scenario {
            name: "null-value",
            predicate: "author == null",
            build: null_value,
        },
    ]
}

/// Look up a scenario by name.
pub fn by_name(name: &str) -> Option<&'static Scenario> {
    all().iter().find(|scenario| scenario.name == name)
}

fn auth_sort() -> Sort {
    Sort::Uninterpreted("Auth".to_string())
}

fn fields() -> Result<Expr, SolverError> {
    let auth = Expr::var(Variable::new("auth", auth_sort()));
    let author = Expr::var(Variable::new("author", auth_sort()));
    let title = Expr::var(Variable::new("title", Sort::Text));
    let rating = Expr::var(Variable::new("rating", Sort::Int));

    Ok(Expr::and(vec![
        Expr::eq(author, auth)?,
        Expr::eq(title, Expr::text("Title"))?,
        Expr::gt(rating, Expr::int(1))?,
    ])?)
}

fn member_access() -> Result<Expr, SolverError> {
    let auth_id = Expr::var(Variable::new("authId", Sort::Int));
    let author_id = Expr::var(Variable::new("authorId", Sort::Int));
    // Member access encodes as an atomic dotted symbol.
    let author_role = Expr::var(Variable::path(["author", "role"], Sort::Text));

    Ok(Expr::or(vec![
        Expr::eq(author_id, auth_id)?,
        Expr::eq(author_role, Expr::text("Admin"))?,
    ])?)
}

fn strings() -> Result<Expr, SolverError> {
    let title = Expr::var(Variable::new("title", Sort::Text));

    Ok(Expr::and(vec![
        Expr::contains(title.clone(), Expr::text("Title"))?,
        Expr::has_suffix(Expr::text("Blog"), title)?,
    ])?)
}

fn arrays() -> Result<Expr, SolverError> {
    let tags = Expr::var(Variable::new("tags", Sort::seq_of(Sort::Text)));
    Ok(Expr::seq_contains(tags, Expr::text("typescript"))?)
}

fn null_value() -> Result<Expr, SolverError> {
    // The nullable relation: `null` is a distinguished constant of the same
    // uninterpreted sort as the relation itself.
    let author = Expr::var(Variable::new("author", auth_sort()));
    let null = Expr::var(Variable::new("null", auth_sort()));
    Ok(Expr::eq(author, null)?)
}
