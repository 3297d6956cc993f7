use crate::domain::error::SolveError;
use crate::domain::pivot_rule::PivotRule;
use crate::domain::solution::SimplexResult;
use crate::domain::solve::solve;
use crate::domain::solver::Solver;
use crate::domain::tableau::{Direction, Tableau};

/// Dense tableau Simplex with a fixed pivot rule
pub struct SimplexSolver {
    rule: PivotRule,
    max_iterations: Option<usize>,
}

impl SimplexSolver {
    pub fn new(rule: PivotRule) -> Self {
        SimplexSolver {
            rule,
            max_iterations: None,
        }
    }

    /// Caps the number of pivots instead of deriving the cap from the tableau size.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }
}

impl Solver for SimplexSolver {
    fn solve(&self, tableau: &Tableau, direction: Direction) -> Result<SimplexResult, SolveError> {
        solve(tableau, direction, self.rule, self.max_iterations)
    }

    fn name(&self) -> &str {
        match self.rule {
            PivotRule::Dantzig => "Simplex (Dantzig)",
            PivotRule::Bland => "Simplex (Bland)",
        }
    }
}
