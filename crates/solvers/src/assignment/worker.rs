use std::{
    sync::mpsc::{self, RecvTimeoutError},
    thread,
    time::Duration,
};

use perks_core::{AssignmentProblem, FeePolicy};
use tracing::debug;

use super::{Error, Solution, Status, run};

/// Solves on a dedicated thread and waits at most `limit` for the result.
///
/// The solver has no cancellation hook, so on timeout the worker is left to
/// finish in the background and its result is discarded.
pub(super) fn solve_within(
    problem: &AssignmentProblem,
    policy: FeePolicy,
    limit: Duration,
) -> Result<Solution, Error> {
    let (tx, rx) = mpsc::channel();
    let problem = problem.clone();

    thread::Builder::new()
        .name("perks-solve".into())
        .spawn(move || {
            // The receiver is gone if the caller already timed out.
            let _ = tx.send(run(&problem, policy));
        })
        .map_err(Error::Spawn)?;

    match rx.recv_timeout(limit) {
        Ok(result) => result,
        Err(RecvTimeoutError::Timeout) => {
            debug!(?limit, "abandoning solver thread");
            Ok(Solution::unsolved(Status::TimedOut))
        }
        Err(RecvTimeoutError::Disconnected) => Err(Error::WorkerLost),
    }
}
