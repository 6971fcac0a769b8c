//! `cantor-conformance` — Runs the Cantor-space search conformance suite.
//!
//! Checks prefixing, the catalogue-wide properties (reflexivity,
//! satisfiability, discrimination) and the fixed end-to-end scenarios, each
//! under a diagnostic depth limit.
//!
//! **Usage:**
//! ```text
//! cantor-conformance [--depth-limit <N>] [--json]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::process;

use anyhow::{Context, Result};
use cantor_conformance::{run_all, Severity, SuiteConfig, DEFAULT_DEPTH_LIMIT};
use clap::Parser;
use tracing::info;

/// Run the Cantor-space search conformance suite.
#[derive(Parser)]
#[command(
    name = "cantor-conformance",
    about = "Validate quantifier, witness and equality behaviour over the reference predicates"
)]
struct Args {
    /// Maximum number of simultaneously active search frames per check.
    #[arg(long, default_value_t = DEFAULT_DEPTH_LIMIT)]
    depth_limit: usize,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    cantor_clients::init_tracing();
    let args = Args::parse();

    let config = SuiteConfig {
        depth_limit: args.depth_limit,
    };
    info!(depth_limit = config.depth_limit, "running conformance suite");
    let report = run_all(&config);

    if args.json {
        let json =
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{json}");
    } else {
        println!("Cantor Search Conformance Report");
        println!("================================");
        println!();

        for result in &report.results {
            let status = match result.severity {
                Severity::Pass => "PASS",
                Severity::Warning => "WARN",
                Severity::Failure => "FAIL",
            };
            println!("[{}] {} — {}", status, result.validator, result.message);
            for detail in &result.details {
                println!("       {}", detail);
            }
        }

        println!();
        println!(
            "Summary: {} passed, {} warnings, {} failed",
            report.count(Severity::Pass),
            report.count(Severity::Warning),
            report.failure_count()
        );
    }

    let failed = report.failure_count();
    if failed > 0 {
        eprintln!("Conformance FAILED: {} check(s) did not pass.", failed);
        process::exit(1);
    }

    if !args.json {
        println!("Conformance PASSED.");
    }
    Ok(())
}
