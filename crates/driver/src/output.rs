//! Colored scenario output formatter.
//!
//! Produces per-scenario results with color-coded status:
//!   [SAT]     scenario-name (green), followed by the decoded model
//!   [UNSAT]   scenario-name (red)
//!   [UNKNOWN] scenario-name - reason (yellow)
//!   [ERROR]   scenario-name - detail (red)
use colored::Colorize;

use predsat_solver::{CheckResult, SolverError, Value};

use crate::scenarios::ScenarioOutcome;

/// Print one scenario's outcome.
pub fn print_outcome(name: &str, outcome: &ScenarioOutcome) {
    println!("{}", format!("Checking: {}", outcome.predicate).dimmed());
    match &outcome.result {
        CheckResult::Sat => {
            println!("  {}  {}", "[SAT]".green().bold(), name);
            if let Some(model) = &outcome.model {
                for (variable, value) in model.iter() {
                    let line = match value {
                        Value::Unbound => format!(
                            "{} = {}",
                            variable.name(),
                            "<unbound>".italic()
                        ),
                        bound => format!("{} = {bound}", variable.name()),
                    };
                    println!("          {}", line.dimmed());
                }
            }
        }
        CheckResult::Unsat => {
            println!("  {}  {}", "[UNSAT]".red().bold(), name);
        }
        CheckResult::Unknown(reason) => {
            println!("  {}  {} ({reason})", "[UNKNOWN]".yellow().bold(), name);
        }
    }
}

/// Print a scenario that failed before producing an outcome.
pub fn print_error(name: &str, error: &SolverError) {
    println!("  {}  {} ({error})", "[ERROR]".red().bold(), name);
}

/// Print the run summary.
pub fn print_summary(sat: usize, unsat: usize, unknown: usize, errors: usize) {
    println!();
    println!(
        "Summary: {sat} SAT, {unsat} UNSAT, {unknown} UNKNOWN, {errors} ERROR"
    );
}
