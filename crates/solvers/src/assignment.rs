//! Optimal instrument-per-category assignment via binary integer programming.
//!
//! # Formulation
//!
//! For every instrument `i` and category `c` there is one binary variable
//! `x[i][c]`, meaning "`i` is chosen for `c`". The solver maximizes
//!
//! ```text
//! sum(x[i][c] * spend[c] * rate[i][c]) - fees
//! ```
//!
//! subject to
//!
//! - exactly one instrument per category: `sum_i x[i][c] == 1` for every `c`
//! - a non-negative net reward: the objective itself must be `>= 0`
//!
//! The fee term depends on the configured [`FeePolicy`]:
//!
//! - [`FeePolicy::PerAssignment`] charges `fee[i] * x[i][c]` for every pair,
//!   so an instrument pays its fee once per category it serves.
//! - [`FeePolicy::PerInstrument`] adds one binary `y[i]` per instrument,
//!   links it with `x[i][c] <= y[i]`, and charges `fee[i] * y[i]`, so an
//!   instrument pays its fee once if it serves any category.
//!
//! # Outcomes
//!
//! - [`Status::Optimal`] — an assignment with non-negative net reward exists;
//!   the [`Solution`] holds it and its net reward.
//! - [`Status::NoSolution`] — every complete assignment has negative net
//!   reward. This is an expected outcome, not an error.
//! - [`Status::TimedOut`] — the configured time limit elapsed first.
//!
//! Both non-optimal outcomes carry an empty assignment and zero reward.
//!
//! # Determinism
//!
//! Variables are created in sorted (instrument, category) order, so equal
//! inputs build identical models and yield identical solutions. When two
//! instruments contribute exactly the same amount to a category, which one
//! is reported is decided by the solver and is stable across calls.

mod config;
mod decode;
mod error;
mod model;
mod solution;
mod worker;


pub use config::{Config, ConfigError};
pub use error::Error;
pub use solution::{Solution, Status};

use perks_core::{AnnualCosts, AssignmentProblem, Catalog, FeePolicy, SpendingForecast};
use tracing::{debug, info, warn};

/// Validates the inputs and finds the assignment with the highest net reward.
///
/// See the [module docs](self) for the formulation.
///
/// # Errors
///
/// Returns an error if the inputs are invalid (see [`AssignmentProblem::new`])
/// or if the solver fails for a reason other than infeasibility.
pub fn optimize(
    catalog: &Catalog,
    spending: &SpendingForecast,
    costs: &AnnualCosts,
    config: &Config,
) -> Result<Solution, Error> {
    let problem = AssignmentProblem::new(catalog, spending, costs)?;
    solve(&problem, config)
}

/// Finds the assignment with the highest net reward for a validated problem.
///
/// When the config sets a time limit, the solve runs on a worker thread and
/// returns [`Status::TimedOut`] if the limit elapses first.
///
/// # Errors
///
/// Returns an error if the solver fails for a reason other than
/// infeasibility, or if the worker thread cannot be started or dies.
pub fn solve(problem: &AssignmentProblem, config: &Config) -> Result<Solution, Error> {
    let solution = match config.time_limit() {
        Some(limit) => worker::solve_within(problem, config.fee_policy(), limit)?,
        None => run(problem, config.fee_policy())?,
    };

    match solution.status {
        Status::Optimal => info!(
            total_reward = solution.total_reward,
            instruments = solution.instruments().len(),
            "found optimal assignment"
        ),
        Status::NoSolution => warn!("no assignment has a non-negative net reward"),
        Status::TimedOut => warn!("solver did not finish within the time limit"),
    }

    Ok(solution)
}

/// Builds, solves, and decodes the model on the current thread.
fn run(problem: &AssignmentProblem, policy: FeePolicy) -> Result<Solution, Error> {
    let model = model::build(problem, policy);
    debug!(
        variables = model.variable_count(),
        constraints = model.constraint_count(),
        ?policy,
        "built assignment model"
    );

    let Some(solved) = model.solve()? else {
        return Ok(Solution::unsolved(Status::NoSolution));
    };

    let solution = decode::decode(problem, &solved)?;
    cross_check(problem, &solution, policy);

    Ok(solution)
}

/// Compares the solver's objective with the net reward recomputed from the
/// decoded assignment, returning the absolute gap.
///
/// Returns `None` if the assignment cannot be evaluated against `problem`.
fn cross_check(
    problem: &AssignmentProblem,
    solution: &Solution,
    policy: FeePolicy,
) -> Option<f64> {
    match problem.net_reward(&solution.assignment, policy) {
        Ok(expected) => {
            let gap = (expected - solution.total_reward).abs();
            debug!(
                objective = solution.total_reward,
                expected, gap, "cross-checked solver objective"
            );
            if gap > 1e-6 * expected.abs().max(1.0) {
                warn!(
                    objective = solution.total_reward,
                    expected, "solver objective differs from recomputed net reward"
                );
            }
            Some(gap)
        }
        Err(err) => {
            warn!(error = %err, "failed to recompute net reward of decoded assignment");
            None
        }
    }
}
