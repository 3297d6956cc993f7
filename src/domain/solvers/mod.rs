pub mod simplex_solver;

pub use simplex_solver::SimplexSolver;
