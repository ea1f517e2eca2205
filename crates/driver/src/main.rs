//! predsat: demonstration scenario runner.
//!
//! Runs a fixed sequence of named satisfiability scenarios and prints each
//! scenario's result and decoded model to the console.
//!
//! Usage:
//!   predsat                      run every scenario
//!   predsat strings arrays       run selected scenarios
//!   predsat --list               list scenario names
//!   predsat --timeout-ms 5000    bound each satisfiability check

mod output;
mod scenarios;

use std::process::ExitCode;

use predsat_solver::{CheckResult, SessionConfig};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut config = SessionConfig::new();
    let mut selected: Vec<String> = Vec::new();
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--list" => {
                for scenario in scenarios::all() {
                    println!("{}", scenario.name);
                }
                return ExitCode::SUCCESS;
            }
            "--timeout-ms" => {
                let Some(value) = iter.next() else {
                    eprintln!("error: --timeout-ms requires a value");
                    return ExitCode::FAILURE;
                };
                match value.parse::<u32>() {
                    Ok(ms) => config = config.with_timeout(ms),
                    Err(_) => {
                        eprintln!("error: invalid timeout: {value}");
                        return ExitCode::FAILURE;
                    }
                }
            }
            "--help" | "-h" => {
                eprintln!("usage: predsat [--list] [--timeout-ms N] [scenario...]");
                return ExitCode::SUCCESS;
            }
            name => {
                if scenarios::by_name(name).is_none() {
                    eprintln!("error: unknown scenario `{name}` (try --list)");
                    return ExitCode::FAILURE;
                }
                selected.push(name.to_string());
            }
        }
    }

    let to_run: Vec<&scenarios::Scenario> = if selected.is_empty() {
        scenarios::all().iter().collect()
    } else {
        selected
            .iter()
            .filter_map(|name| scenarios::by_name(name))
            .collect()
    };

    let (mut sat, mut unsat, mut unknown, mut errors) = (0usize, 0usize, 0usize, 0usize);
    for (i, scenario) in to_run.iter().enumerate() {
        if i > 0 {
            println!();
        }
        match scenario.run(&config) {
            Ok(outcome) => {
                match outcome.result {
                    CheckResult::Sat => sat += 1,
                    CheckResult::Unsat => unsat += 1,
                    CheckResult::Unknown(_) => unknown += 1,
                }
                output::print_outcome(scenario.name, &outcome);
            }
            Err(error) => {
                errors += 1;
                output::print_error(scenario.name, &error);
            }
        }
    }
    output::print_summary(sat, unsat, unknown, errors);

    if errors > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
