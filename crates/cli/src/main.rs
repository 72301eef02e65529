//! Command-line driver for the perks assignment optimizer.
//!
//! Loads an instrument table (TOML or JSON), picks the best instrument for
//! each spending category, and prints the assignment.

use std::{path::PathBuf, process::ExitCode, time::Duration};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::debug;

use perks_core::{FeePolicy, table::Table};
use perks_solvers::assignment::{Config, Solution, Status, optimize};

/// Assign one payment instrument to each spending category
#[derive(Debug, Parser)]
#[command(name = "perks", version)]
struct Args {
    /// Instrument table (.toml or .json)
    table: PathBuf,

    /// How annual fees are charged against rewards
    #[arg(long, value_enum, default_value_t = Fees::PerInstrument)]
    fee_policy: Fees,

    /// Give up after this many milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error); `RUST_LOG` takes precedence
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Fees {
    PerAssignment,
    PerInstrument,
}

impl From<Fees> for FeePolicy {
    fn from(fees: Fees) -> Self {
        match fees {
            Fees::PerAssignment => Self::PerAssignment,
            Fees::PerInstrument => Self::PerInstrument,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let config = Config::new(
        args.fee_policy.into(),
        args.time_limit_ms.map(Duration::from_millis),
    )?;

    let (catalog, spending, costs) = Table::load_path(&args.table)
        .and_then(Table::into_inputs)
        .with_context(|| format!("failed to load {}", args.table.display()))?;
    debug!(
        instruments = catalog.len(),
        categories = spending.len(),
        "loaded table"
    );

    let solution = optimize(&catalog, &spending, &costs, &config)?;
    print_solution(&solution);

    Ok(if solution.is_optimal() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "perks={level},perks_core={level},perks_solvers={level}"
        ))
    });

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_solution(solution: &Solution) {
    match solution.status {
        Status::Optimal => {
            let width = solution
                .assignment
                .iter()
                .map(|(category, _)| category.as_str().len())
                .max()
                .unwrap_or_default();

            for (category, instrument) in &solution.assignment {
                println!("{category:<width$}  {instrument}");
            }
            println!();
            println!("total net reward: {:.2}", solution.total_reward);

            let instruments: Vec<&str> = solution.instruments().iter().map(|i| i.as_str()).collect();
            println!("instruments ({}): {}", instruments.len(), instruments.join(", "));
        }
        Status::NoSolution => println!("no assignment has a non-negative net reward"),
        Status::TimedOut => println!("solver timed out"),
    }
}
