//! Solvers for the perks assignment problem.
//!
//! # Solvers
//!
//! - [`assignment`] — exact binary integer program that picks one instrument
//!   per category to maximize net reward

pub mod assignment;
