//! `cantor-explore` — Decides, searches and renders one catalogue predicate.
//!
//! Reports whether some / every sequence satisfies the predicate, renders a
//! witness when one exists, and lists the catalogue predicates it is
//! extensionally equal to.
//!
//! **Usage:**
//! ```text
//! cantor-explore <PREDICATE> [--precision <N>] [--depth-limit <N>] [--json]
//! cantor-explore --list
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use anyhow::{Context, Result};
use cantor::{catalog, equal, for_every, search, with_depth_limit, Predicate};
use cantor_conformance::DEFAULT_DEPTH_LIMIT;
use clap::Parser;
use serde::Serialize;
use tracing::info;

/// Explore a catalogue predicate.
#[derive(Parser)]
#[command(
    name = "cantor-explore",
    about = "Decide, search and render a reference predicate over Cantor space"
)]
struct Args {
    /// Catalogue predicate name (see --list).
    #[arg(required_unless_present = "list")]
    predicate: Option<String>,

    /// Number of witness bits to render.
    #[arg(long, default_value_t = 16)]
    precision: usize,

    /// Maximum number of simultaneously active search frames.
    #[arg(long, default_value_t = DEFAULT_DEPTH_LIMIT)]
    depth_limit: usize,

    /// Print the result as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// List catalogue predicate names and exit.
    #[arg(long)]
    list: bool,
}

/// Everything `cantor-explore` reports about one predicate.
#[derive(Debug, Serialize)]
struct Exploration {
    name: String,
    satisfiable: bool,
    valid: bool,
    witness: Option<String>,
    equal_to: Vec<&'static str>,
}

fn explore(name: &str, predicate: &Predicate, precision: usize) -> Exploration {
    let witness = search(predicate);
    let equal_to = catalog::names()
        .into_iter()
        .filter_map(|other| catalog::by_name(other).ok().map(|q| (other, q)))
        .filter(|(_, q)| equal(predicate, q))
        .map(|(other, _)| other)
        .collect();

    Exploration {
        name: name.to_string(),
        satisfiable: witness.is_some(),
        valid: for_every(predicate),
        witness: witness.map(|w| w.render(precision)),
        equal_to,
    }
}

fn main() -> Result<()> {
    cantor_clients::init_tracing();
    let args = Args::parse();

    if args.list {
        for name in catalog::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let name = args
        .predicate
        .context("A predicate name is required unless --list is given")?;
    let predicate =
        catalog::by_name(&name).with_context(|| format!("Failed to look up `{name}`"))?;

    info!(predicate = %name, depth_limit = args.depth_limit, "exploring");
    let exploration = with_depth_limit(args.depth_limit, || {
        explore(&name, &predicate, args.precision)
    })
    .with_context(|| format!("Search on `{name}` did not finish"))?;

    if args.json {
        let json = serde_json::to_string_pretty(&exploration)
            .context("Failed to serialize exploration")?;
        println!("{json}");
        return Ok(());
    }

    println!("predicate:   {}", exploration.name);
    println!("for_some:    {}", exploration.satisfiable);
    println!("for_every:   {}", exploration.valid);
    match &exploration.witness {
        Some(rendered) => println!("witness:     {rendered}"),
        None => println!("witness:     none"),
    }
    if exploration.equal_to.is_empty() {
        println!("equal to:    (no catalogue predicate)");
    } else {
        println!("equal to:    {}", exploration.equal_to.join(", "));
    }
    Ok(())
}
