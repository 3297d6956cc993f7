pub mod error;
pub mod pivot_rule;
pub mod reestimate;
pub mod simplex;
pub mod solution;
pub mod solve;
pub mod solver;
pub mod solver_factory;
pub mod solvers;
pub mod tableau;
pub mod validate;
