use good_lp::ResolutionError;
use perks_core::{CategoryId, ProblemError};
use thiserror::Error;

/// Errors that can occur during assignment solving.
///
/// Infeasibility is not an error; it is reported as
/// [`Status::NoSolution`](super::Status::NoSolution).
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid problem")]
    Problem(#[from] ProblemError),

    #[error("solver failed")]
    Solver(#[source] ResolutionError),

    #[error("solver selected no instrument for category `{category}`")]
    Decode { category: CategoryId },

    #[error("failed to start solver thread")]
    Spawn(#[source] std::io::Error),

    #[error("solver thread exited without a result")]
    WorkerLost,
}
