use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vincula::{
    error::Result,
    input::{load_constraints, load_variables},
    solver::{
        engine::{BacktrackingSolver, ConsistencyMode, SearchOutcome},
        problem::Problem,
        stats::render_stats_table,
    },
};

/// Solve a binary CSP with backtracking search and optional forward
/// checking, printing one trace line per attempted branch.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the variable file (`name: v1 v2 ...` per line).
    variable_file: PathBuf,

    /// Path to the constraint file (one `left op right` per line).
    constraint_file: PathBuf,

    /// Consistency procedure: `fc` enables forward checking, anything else
    /// runs naive backtracking.
    consistency: String,

    /// Print a table of search statistics to stderr after the run.
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let (registry, domains) = load_variables(&args.variable_file)?;
    let constraints = load_constraints(&args.constraint_file, &registry)?;
    let problem = Problem::new(registry, constraints);

    let mode = ConsistencyMode::from_arg(&args.consistency);
    let solver = BacktrackingSolver::with_default_heuristics(mode);
    let report = solver.solve(&problem, domains);

    for line in report.log.render(&problem.registry) {
        println!("{line}");
    }
    if let SearchOutcome::Exhausted = report.outcome {
        info!("search space exhausted; no solution");
    }
    if args.stats {
        eprintln!("{}", render_stats_table(&report.stats));
    }

    Ok(())
}
