/// A value keyed by a tableau label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledValue {
    pub label: String,
    pub value: f64,
}

impl LabeledValue {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        LabeledValue {
            label: label.into(),
            value,
        }
    }
}

/// Everything derived from an optimal tableau.
///
/// Variable mappings follow column order and constraint mappings follow row
/// order, so rendering is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplexResult {
    pub solution: Vec<LabeledValue>,
    pub optimal_value: f64,
    /// Marginal change of `optimal_value` per unit of extra right-hand side.
    /// Only valid while the optimal basis stays the same, which is not checked.
    pub shadow_prices: Vec<LabeledValue>,
    pub slacks: Vec<LabeledValue>,
    /// Reduced costs of the decision variables, zero for basic ones.
    pub deltas: Vec<LabeledValue>,
    pub iterations: usize,
}

impl SimplexResult {
    pub fn value_of(&self, variable: &str) -> Option<f64> {
        lookup(&self.solution, variable)
    }

    pub fn shadow_price(&self, constraint: &str) -> Option<f64> {
        lookup(&self.shadow_prices, constraint)
    }

    pub fn slack(&self, constraint: &str) -> Option<f64> {
        lookup(&self.slacks, constraint)
    }

    pub fn delta(&self, variable: &str) -> Option<f64> {
        lookup(&self.deltas, variable)
    }

    /// Constraints with no unused capacity at the optimum.
    pub fn binding_constraints(&self) -> impl Iterator<Item = &str> {
        self.slacks
            .iter()
            .filter(|s| s.value == 0.0)
            .map(|s| s.label.as_str())
    }
}

fn lookup(entries: &[LabeledValue], label: &str) -> Option<f64> {
    entries.iter().find(|e| e.label == label).map(|e| e.value)
}
