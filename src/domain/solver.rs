use crate::domain::error::SolveError;
use crate::domain::solution::SimplexResult;
use crate::domain::tableau::{Direction, Tableau};

/// Common interface for tableau solvers
pub trait Solver: Send + Sync {
    /// Solve one edited tableau
    ///
    /// # Arguments
    /// * `tableau` - Constraint rows followed by the objective row, RHS in the last column
    /// * `direction` - Maximize or Minimize
    ///
    /// # Returns
    /// The optimal solution with its shadow prices, slacks and deltas, or the
    /// condition that stopped the solve
    fn solve(&self, tableau: &Tableau, direction: Direction) -> Result<SimplexResult, SolveError>;

    /// Get the solver name for logging/debugging
    fn name(&self) -> &str;
}
