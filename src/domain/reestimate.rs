//! Linear what-if estimate of the objective after right-hand-side changes.
//!
//! The estimate is `optimal_value + Σ shadow_price · Δ`. It is only exact while
//! the optimal basis stays optimal for the new right-hand sides, and that range
//! is never computed here. Large changes can make the estimate wrong.

use crate::domain::solution::SimplexResult;

/// A requested change of one constraint's right-hand side.
#[derive(Debug, Clone, PartialEq)]
pub struct RhsChange {
    pub constraint: String,
    pub delta: f64,
}

impl RhsChange {
    pub fn new(constraint: impl Into<String>, delta: f64) -> Self {
        RhsChange {
            constraint: constraint.into(),
            delta,
        }
    }
}

/// Contribution of a single change to the estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct ReestimateTerm {
    pub constraint: String,
    pub shadow_price: f64,
    pub delta: f64,
    pub contribution: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reestimate {
    pub original_value: f64,
    pub new_value: f64,
    pub difference: f64,
    pub terms: Vec<ReestimateTerm>,
}

impl Reestimate {
    /// True when the change keeps or increases the objective.
    pub fn is_non_decreasing(&self) -> bool {
        self.difference >= 0.0
    }
}

/// Estimates the objective after applying `changes`, without touching the tableau.
///
/// A constraint missing from `result` has no known shadow price and contributes nothing.
pub fn reestimate(result: &SimplexResult, changes: &[RhsChange]) -> Reestimate {
    let terms: Vec<ReestimateTerm> = changes
        .iter()
        .map(|change| {
            let shadow_price = result.shadow_price(&change.constraint).unwrap_or_else(|| {
                log::warn!(
                    "No shadow price for {}, treating its change as neutral",
                    change.constraint,
                );
                0.0
            });
            ReestimateTerm {
                constraint: change.constraint.clone(),
                shadow_price,
                delta: change.delta,
                contribution: shadow_price * change.delta,
            }
        })
        .collect();

    let difference: f64 = terms.iter().map(|t| t.contribution).sum();

    Reestimate {
        original_value: result.optimal_value,
        new_value: result.optimal_value + difference,
        difference,
        terms,
    }
}
