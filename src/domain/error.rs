use thiserror::Error;

/// Terminal conditions of a single solve request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    /// The grid does not match its labels or contains non-finite numbers.
    #[error("invalid tableau shape: {details}")]
    InvalidShape { details: String },

    /// A constraint has a negative right-hand side, so the all-slack basis is infeasible.
    #[error("constraint {constraint} has negative right-hand side {rhs}")]
    InfeasibleStart { constraint: String, rhs: f64 },

    #[error("objective is unbounded along {variable}")]
    Unbounded { variable: String },

    #[error("no optimum reached after {iterations} pivots")]
    NonConvergent { iterations: usize },
}

impl SolveError {
    pub(crate) fn invalid_shape(details: impl Into<String>) -> Self {
        SolveError::InvalidShape {
            details: details.into(),
        }
    }

    /// Short machine-readable name of the condition.
    pub fn kind(&self) -> &'static str {
        match self {
            SolveError::InvalidShape { .. } => "invalid_shape",
            SolveError::InfeasibleStart { .. } => "infeasible_start",
            SolveError::Unbounded { .. } => "unbounded",
            SolveError::NonConvergent { .. } => "non_convergent",
        }
    }
}
