//! Core types for the perks assignment problem.
//!
//! This crate defines the inputs that solvers build on:
//!
//! - [`Catalog`] — reward rates per instrument and category
//! - [`SpendingForecast`] — annual spend per category
//! - [`AnnualCosts`] — fixed annual cost per instrument
//! - [`AssignmentProblem`] — the three inputs, validated and densified
//! - [`Assignment`] — a decoded category → instrument mapping
//! - [`FeePolicy`] — how annual costs enter the net reward
//!
//! The [`table`] module loads all three inputs from a TOML or JSON file.

mod assignment;
mod catalog;
mod costs;
mod fee;
mod ids;
mod problem;
mod spending;
mod value;

pub mod table;

pub use assignment::Assignment;
pub use catalog::Catalog;
pub use costs::AnnualCosts;
pub use fee::FeePolicy;
pub use ids::{CategoryId, InstrumentId};
pub use problem::{AssignmentProblem, EvalError, ProblemError};
pub use spending::SpendingForecast;
pub use value::{NonNegative, ValueError};
