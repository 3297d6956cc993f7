use crate::domain::error::SolveError;
use crate::domain::reestimate::{Reestimate, ReestimateTerm, RhsChange};
use crate::domain::solution::{LabeledValue, SimplexResult};
use crate::domain::tableau::{Direction, Tableau};
use crate::models::{
    ApiDirection, ApiEntry, ApiReestimate, ApiReestimateTerm, ApiRhsChange, ApiSolution,
    ApiTableau, Status,
};

impl From<ApiDirection> for Direction {
    fn from(d: ApiDirection) -> Self {
        match d {
            ApiDirection::Maximize => Direction::Maximize,
            ApiDirection::Minimize => Direction::Minimize,
        }
    }
}

impl From<ApiTableau> for Tableau {
    fn from(t: ApiTableau) -> Self {
        Tableau::new(t.rows, t.columns, t.values)
    }
}

impl From<Tableau> for ApiTableau {
    fn from(t: Tableau) -> Self {
        ApiTableau {
            rows: t.row_labels,
            columns: t.column_labels,
            values: t.values,
        }
    }
}

impl From<&SolveError> for Status {
    fn from(e: &SolveError) -> Self {
        match e {
            SolveError::InvalidShape { .. } => Status::InvalidShape,
            SolveError::InfeasibleStart { .. } => Status::InfeasibleStart,
            SolveError::Unbounded { .. } => Status::Unbounded,
            SolveError::NonConvergent { .. } => Status::NonConvergent,
        }
    }
}

fn to_api_entries(entries: Vec<LabeledValue>) -> Vec<ApiEntry> {
    entries
        .into_iter()
        .map(|e| ApiEntry {
            label: e.label,
            value: e.value,
        })
        .collect()
}

fn to_labeled_values(entries: Vec<ApiEntry>) -> Vec<LabeledValue> {
    entries
        .into_iter()
        .map(|e| LabeledValue::new(e.label, e.value))
        .collect()
}

impl From<SimplexResult> for ApiSolution {
    fn from(r: SimplexResult) -> Self {
        let binding = r.binding_constraints().map(str::to_string).collect();
        ApiSolution {
            status: Status::Optimal,
            optimal_value: r.optimal_value,
            solution: to_api_entries(r.solution),
            shadow_prices: to_api_entries(r.shadow_prices),
            slacks: to_api_entries(r.slacks),
            deltas: to_api_entries(r.deltas),
            binding,
            iterations: r.iterations,
        }
    }
}

/// The client sends back the result it received from `/solve`.
impl From<ApiSolution> for SimplexResult {
    fn from(s: ApiSolution) -> Self {
        SimplexResult {
            solution: to_labeled_values(s.solution),
            optimal_value: s.optimal_value,
            shadow_prices: to_labeled_values(s.shadow_prices),
            slacks: to_labeled_values(s.slacks),
            deltas: to_labeled_values(s.deltas),
            iterations: s.iterations,
        }
    }
}

impl From<ApiRhsChange> for RhsChange {
    fn from(c: ApiRhsChange) -> Self {
        RhsChange::new(c.constraint, c.delta)
    }
}

impl From<ReestimateTerm> for ApiReestimateTerm {
    fn from(t: ReestimateTerm) -> Self {
        ApiReestimateTerm {
            constraint: t.constraint,
            shadow_price: t.shadow_price,
            delta: t.delta,
            contribution: t.contribution,
        }
    }
}

impl From<Reestimate> for ApiReestimate {
    fn from(r: Reestimate) -> Self {
        let trend = if r.is_non_decreasing() {
            "increase_or_keep"
        } else {
            "decrease"
        };
        ApiReestimate {
            original_value: r.original_value,
            new_value: r.new_value,
            difference: r.difference,
            trend: trend.to_string(),
            terms: r.terms.into_iter().map(|t| t.into()).collect(),
        }
    }
}
