use crate::domain::pivot_rule::PivotRule;
use crate::domain::solver::Solver;
use crate::domain::solvers::SimplexSolver;

/// Available solver configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverType {
    Dantzig,
    Bland,
}

impl SolverType {
    /// Parse solver type from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "dantzig" => Some(SolverType::Dantzig),
            "bland" => Some(SolverType::Bland),
            _ => None,
        }
    }

    fn pivot_rule(self) -> PivotRule {
        match self {
            SolverType::Dantzig => PivotRule::Dantzig,
            SolverType::Bland => PivotRule::Bland,
        }
    }
}

/// Create a solver instance based on the specified type
pub fn create_solver(solver_type: SolverType, max_iterations: Option<usize>) -> Box<dyn Solver> {
    let solver = SimplexSolver::new(solver_type.pivot_rule());
    match max_iterations {
        Some(limit) => Box::new(solver.with_max_iterations(limit)),
        None => Box::new(solver),
    }
}
