use serde::{Deserialize, Serialize};

// ---------- API (wire) types: owned & serde-friendly ----------

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApiDirection {
    #[serde(alias = "maximizar")]
    Maximize,
    #[serde(alias = "minimizar")]
    Minimize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiTableau {
    /// Constraint labels followed by the objective row label.
    pub rows: Vec<String>,
    /// Variable labels followed by the RHS label.
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

#[derive(Deserialize, Debug)]
pub struct TableauRequest {
    pub num_vars: usize,
    pub num_constraints: usize,
    pub direction: ApiDirection,
}

#[derive(Deserialize, Debug)]
pub struct SolveRequest {
    pub tableau: ApiTableau,
    pub direction: ApiDirection,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiEntry {
    pub label: String,
    pub value: f64,
}

// ---------- API response types (decoupled from the domain) ----------

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Optimal,
    InvalidShape,
    InfeasibleStart,
    Unbounded,
    NonConvergent,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiSolution {
    pub status: Status,
    pub optimal_value: f64,
    pub solution: Vec<ApiEntry>,
    pub shadow_prices: Vec<ApiEntry>,
    pub slacks: Vec<ApiEntry>,
    pub deltas: Vec<ApiEntry>,
    /// Constraints with zero slack, in row order.
    #[serde(default)]
    pub binding: Vec<String>,
    #[serde(default)]
    pub iterations: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: Status,
    pub error: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiRhsChange {
    pub constraint: String,
    pub delta: f64,
}

#[derive(Deserialize, Debug)]
pub struct ReestimateRequest {
    pub result: ApiSolution,
    pub changes: Vec<ApiRhsChange>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiReestimateTerm {
    pub constraint: String,
    pub shadow_price: f64,
    pub delta: f64,
    pub contribution: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiReestimate {
    pub original_value: f64,
    pub new_value: f64,
    pub difference: f64,
    /// "increase_or_keep" or "decrease".
    pub trend: String,
    pub terms: Vec<ApiReestimateTerm>,
}
