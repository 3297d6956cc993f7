use std::collections::HashSet;

use crate::domain::error::SolveError;
use crate::domain::tableau::Tableau;

/// Checks that the grid agrees with its labels before any pivoting happens.
pub fn validate_tableau(tableau: &Tableau) -> Result<(), SolveError> {
    let num_rows = tableau.row_labels.len();
    let num_columns = tableau.column_labels.len();

    if num_rows < 2 {
        return Err(SolveError::invalid_shape(format!(
            "expected at least one constraint row and the objective row, got {} row labels",
            num_rows,
        )));
    }
    if num_columns < 2 {
        return Err(SolveError::invalid_shape(format!(
            "expected at least one variable column and the RHS column, got {} column labels",
            num_columns,
        )));
    }
    if tableau.values.len() != num_rows {
        return Err(SolveError::invalid_shape(format!(
            "{} row labels but {} rows of values",
            num_rows,
            tableau.values.len(),
        )));
    }

    for (label, row) in tableau.row_labels.iter().zip(&tableau.values) {
        if row.len() != num_columns {
            return Err(SolveError::invalid_shape(format!(
                "row {} has {} cells, expected {}",
                label,
                row.len(),
                num_columns,
            )));
        }
        if let Some(column) = row.iter().position(|v| !v.is_finite()) {
            return Err(SolveError::invalid_shape(format!(
                "row {} column {} is not a finite number",
                label, tableau.column_labels[column],
            )));
        }
    }

    validate_unique_labels(&tableau.row_labels, "row")?;
    validate_unique_labels(&tableau.column_labels, "column")?;

    Ok(())
}

fn validate_unique_labels(labels: &[String], axis: &str) -> Result<(), SolveError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(labels.len());
    for label in labels {
        if !seen.insert(label.as_str()) {
            return Err(SolveError::invalid_shape(format!(
                "duplicate {} label {}",
                axis, label,
            )));
        }
    }
    Ok(())
}

/// The all-slack starting basis is only feasible for non-negative right-hand sides.
pub fn validate_feasible_start(tableau: &Tableau) -> Result<(), SolveError> {
    for (label, row) in tableau.constraint_labels().iter().zip(tableau.constraint_rows()) {
        let rhs = row[tableau.num_variables()];
        if rhs < 0.0 {
            return Err(SolveError::InfeasibleStart {
                constraint: label.clone(),
                rhs,
            });
        }
    }
    Ok(())
}
