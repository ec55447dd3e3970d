//! Strategy comparison driver.
//!
//! Usage: `flipsort [SIZE] [--seed N] [--json]`
//!
//! Builds one shuffled root of SIZE (default 8), runs all six strategies
//! against it, and prints the comparison table (or the JSON report with
//! `--json`). Breadth and depth on sizes much past the default explore a
//! large share of the N! space; that trade-off belongs to the caller.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use flipsort_harness::{render_table, run_all};

struct Args {
    size: usize,
    seed: u64,
    json: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut size = 8;
    let mut seed = None;
    let mut json = false;
    let mut argv = std::env::args().skip(1);
    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--seed" => {
                let value = argv.next().ok_or("--seed requires a value")?;
                seed = Some(
                    value
                        .parse::<u64>()
                        .map_err(|_| format!("invalid seed: {value}"))?,
                );
            }
            other => {
                size = other
                    .parse::<usize>()
                    .map_err(|_| format!("unrecognized argument: {other}"))?;
            }
        }
    }
    Ok(Args {
        size,
        seed: seed.unwrap_or_else(rand::random),
        json,
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("flipsort: {message}");
            eprintln!("usage: flipsort [SIZE] [--seed N] [--json]");
            return ExitCode::from(2);
        }
    };

    let report = match run_all(args.size, args.seed) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("flipsort: {err}");
            return ExitCode::from(2);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("flipsort: report serialization failed: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", render_table(&report));
    }
    ExitCode::SUCCESS
}
