//! Small linear programs solved with the tableau Simplex method.
//!
//! The [`domain`] module holds the tableau builder, the Simplex engine and the
//! shadow-price re-estimate; everything else serves them over HTTP.

pub mod cache;
pub mod config;
pub mod convert;
pub mod domain;
pub mod error;
pub mod models;
pub mod routes;

pub use domain::error::SolveError;
pub use domain::pivot_rule::PivotRule;
pub use domain::reestimate::{reestimate, Reestimate, RhsChange};
pub use domain::solution::{LabeledValue, SimplexResult};
pub use domain::solve::solve;
pub use domain::tableau::{create_tableau, Direction, Tableau};
