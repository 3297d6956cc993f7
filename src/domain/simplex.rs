//! Dense tableau in equational form and the pivoting loop over it.
//!
//! Internally the objective row always holds reduced costs of a maximization
//! problem: a column may enter while its coefficient is positive, and the RHS
//! cell of the objective row holds the negated objective value.

use crate::domain::error::SolveError;
use crate::domain::pivot_rule::{PivotRule, EPSILON};
use crate::domain::solution::{LabeledValue, SimplexResult};
use crate::domain::tableau::{Direction, Tableau};

/// Negates the objective for `Minimize` so a single maximizing rule applies.
pub fn to_internal_objective(direction: Direction, coefficients: &[f64]) -> Vec<f64> {
    coefficients.iter().map(|c| c * direction.sign()).collect()
}

/// Inverse of [`to_internal_objective`] for a single reported quantity.
pub fn from_internal(direction: Direction, value: f64) -> f64 {
    value * direction.sign()
}

/// A generous bound on the number of pivots: four times the number of
/// candidate bases `C(n + m, m)`.
pub fn default_iteration_limit(num_variables: usize, num_constraints: usize) -> usize {
    let total = num_variables + num_constraints;
    let k = num_constraints.min(num_variables);
    let bases = (0..k).fold(1usize, |acc, i| acc.saturating_mul(total - i) / (i + 1));
    bases.saturating_mul(4)
}

pub(crate) struct StandardForm {
    /// Constraint rows followed by the objective row.
    rows: Vec<Vec<f64>>,
    /// Basic column of each constraint row.
    basis: Vec<usize>,
    num_variables: usize,
}

impl StandardForm {
    /// Adds one slack column per constraint and starts from the all-slack basis.
    /// The tableau must already be validated.
    pub(crate) fn from_tableau(tableau: &Tableau, direction: Direction) -> Self {
        let n = tableau.num_variables();
        let m = tableau.num_constraints();
        let width = n + m + 1;

        let mut rows = Vec::with_capacity(m + 1);
        for (i, source) in tableau.constraint_rows().iter().enumerate() {
            let mut row = vec![0.0; width];
            row[..n].copy_from_slice(&source[..n]);
            row[n + i] = 1.0;
            row[width - 1] = source[n];
            rows.push(row);
        }

        let objective = tableau.objective_row();
        if objective[n] != 0.0 {
            log::warn!(
                "Ignoring objective row right-hand side {}; the objective has no constant term",
                objective[n],
            );
        }
        let mut objective_row = vec![0.0; width];
        objective_row[..n].copy_from_slice(&to_internal_objective(direction, &objective[..n]));
        rows.push(objective_row);

        StandardForm {
            rows,
            basis: (n..n + m).collect(),
            num_variables: n,
        }
    }

    fn num_constraints(&self) -> usize {
        self.basis.len()
    }

    fn rhs_column(&self) -> usize {
        self.num_variables + self.num_constraints()
    }

    fn constraint_rows(&self) -> &[Vec<f64>] {
        &self.rows[..self.num_constraints()]
    }

    fn objective(&self) -> &[f64] {
        &self.rows[self.num_constraints()]
    }

    /// Reduced cost of a column in the internal maximize convention.
    fn reduced_cost(&self, column: usize) -> f64 {
        self.objective()[column]
    }

    /// Value of a structural or slack column at the current basis.
    fn column_value(&self, column: usize) -> f64 {
        self.basis
            .iter()
            .position(|&b| b == column)
            .map(|row| self.rows[row][self.rhs_column()])
            .unwrap_or(0.0)
    }

    /// Internal objective value, which is `-rhs` of the objective row.
    fn objective_value(&self) -> f64 {
        -self.objective()[self.rhs_column()]
    }

    /// Normalizes `row` on its `column` entry and clears that column everywhere else.
    pub(crate) fn pivot(&mut self, row: usize, column: usize) {
        let pivot = self.rows[row][column];
        for value in self.rows[row].iter_mut() {
            *value /= pivot;
        }
        // Exact unit after rounding noise.
        self.rows[row][column] = 1.0;

        let pivot_row = self.rows[row].clone();
        for (i, other) in self.rows.iter_mut().enumerate() {
            if i == row {
                continue;
            }
            let factor = other[column];
            if factor == 0.0 {
                continue;
            }
            for (value, p) in other.iter_mut().zip(&pivot_row) {
                *value -= factor * p;
            }
            other[column] = 0.0;
        }

        self.basis[row] = column;
    }

    fn column_label(&self, tableau: &Tableau, column: usize) -> String {
        if column < self.num_variables {
            tableau.column_labels[column].clone()
        } else {
            format!("folga de {}", tableau.row_labels[column - self.num_variables])
        }
    }

    /// Pivots until optimal. Returns the number of pivots performed.
    pub(crate) fn optimize(
        &mut self,
        tableau: &Tableau,
        rule: PivotRule,
        max_iterations: usize,
    ) -> Result<usize, SolveError> {
        let mut iterations = 0;
        loop {
            let rhs = self.rhs_column();
            let column = match rule.select_column(&self.objective()[..rhs]) {
                Some(column) => column,
                None => return Ok(iterations),
            };

            let row = rule
                .select_row(self.constraint_rows(), &self.basis, column)
                .ok_or_else(|| SolveError::Unbounded {
                    variable: self.column_label(tableau, column),
                })?;

            if iterations >= max_iterations {
                return Err(SolveError::NonConvergent { iterations });
            }

            log::debug!(
                "Pivot {}: {} enters, {} leaves at {}",
                iterations + 1,
                self.column_label(tableau, column),
                self.column_label(tableau, self.basis[row]),
                tableau.row_labels[row],
            );
            self.pivot(row, column);
            iterations += 1;
        }
    }

    /// Reads the result bundle off an optimal tableau.
    pub(crate) fn extract(&self, tableau: &Tableau, direction: Direction, iterations: usize) -> SimplexResult {
        let n = self.num_variables;

        let solution = tableau
            .variable_labels()
            .iter()
            .enumerate()
            .map(|(j, label)| LabeledValue::new(label.as_str(), clean(self.column_value(j))))
            .collect();

        let deltas = tableau
            .variable_labels()
            .iter()
            .enumerate()
            .map(|(j, label)| {
                LabeledValue::new(label.as_str(), clean(from_internal(direction, self.reduced_cost(j))))
            })
            .collect();

        // The slack's reduced cost is minus the dual of its row.
        let shadow_prices = tableau
            .constraint_labels()
            .iter()
            .enumerate()
            .map(|(i, label)| {
                LabeledValue::new(label.as_str(), clean(from_internal(direction, -self.reduced_cost(n + i))))
            })
            .collect();

        let slacks = tableau
            .constraint_labels()
            .iter()
            .enumerate()
            .map(|(i, label)| LabeledValue::new(label.as_str(), clean(self.column_value(n + i))))
            .collect();

        SimplexResult {
            solution,
            optimal_value: clean(from_internal(direction, self.objective_value())),
            shadow_prices,
            slacks,
            deltas,
            iterations,
        }
    }

    #[cfg(test)]
    pub(crate) fn basis_is_consistent(&self) -> bool {
        self.basis.iter().enumerate().all(|(row, &column)| {
            self.rows.iter().enumerate().all(|(i, r)| {
                let expected = if i == row { 1.0 } else { 0.0 };
                (r[column] - expected).abs() <= EPSILON
            })
        }) && self
            .constraint_rows()
            .iter()
            .all(|r| r[self.rhs_column()] >= -EPSILON)
    }

    #[cfg(test)]
    pub(crate) fn step(&mut self, rule: PivotRule) -> Option<(usize, usize)> {
        let column = rule.select_column(&self.objective()[..self.rhs_column()])?;
        let row = rule.select_row(self.constraint_rows(), &self.basis, column)?;
        self.pivot(row, column);
        Some((row, column))
    }

    #[cfg(test)]
    pub(crate) fn internal_reduced_costs(&self) -> &[f64] {
        &self.objective()[..self.rhs_column()]
    }
}

/// Snaps floating noise around zero, including `-0.0`, to `0.0`.
fn clean(value: f64) -> f64 {
    if value.abs() < EPSILON {
        0.0
    } else {
        value
    }
}
