//! Choice of the entering column and the leaving row.

/// Coefficients within this distance of zero are treated as zero.
pub const EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PivotRule {
    /// Most positive objective coefficient; ratio ties go to the lowest row.
    Dantzig,
    /// Lowest profitable column; ratio ties go to the lowest basic variable.
    /// Never cycles.
    Bland,
}

impl PivotRule {
    pub fn name(&self) -> &'static str {
        match self {
            PivotRule::Dantzig => "dantzig",
            PivotRule::Bland => "bland",
        }
    }

    /// Column to enter the basis, or `None` when the objective row certifies optimality.
    ///
    /// `objective` holds the reduced costs of every column except the RHS, in the
    /// internal maximize convention.
    pub fn select_column(&self, objective: &[f64]) -> Option<usize> {
        let mut profitable = objective
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, coefficient)| coefficient > EPSILON);

        match self {
            PivotRule::Bland => profitable.next().map(|(j, _)| j),
            PivotRule::Dantzig => profitable
                .fold(None, |best: Option<(usize, f64)>, (j, coefficient)| match best {
                    Some((_, top)) if top >= coefficient => best,
                    _ => Some((j, coefficient)),
                })
                .map(|(j, _)| j),
        }
    }

    /// Row to leave the basis for the given entering column, by minimum ratio.
    ///
    /// `None` means no row limits the entering variable: the objective is unbounded.
    pub fn select_row(&self, constraint_rows: &[Vec<f64>], basis: &[usize], column: usize) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;

        for (i, row) in constraint_rows.iter().enumerate() {
            let coefficient = row[column];
            if coefficient <= EPSILON {
                continue;
            }
            let ratio = row[row.len() - 1] / coefficient;

            best = match best {
                None => Some((i, ratio)),
                Some((current, top)) => {
                    let replace = if ratio < top - EPSILON {
                        true
                    } else if ratio <= top + EPSILON {
                        // Tie. Dantzig keeps the lowest row, which comes first.
                        *self == PivotRule::Bland && basis[i] < basis[current]
                    } else {
                        false
                    };
                    if replace {
                        Some((i, ratio))
                    } else {
                        Some((current, top))
                    }
                }
            };
        }

        best.map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_column_dantzig_picks_largest_coefficient() {
        assert_eq!(PivotRule::Dantzig.select_column(&[3.0, 5.0, 0.0, 0.0]), Some(1));
    }

    #[test]
    fn test_select_column_dantzig_breaks_ties_by_lowest_index() {
        assert_eq!(PivotRule::Dantzig.select_column(&[-1.0, 2.0, 2.0]), Some(1));
    }

    #[test]
    fn test_select_column_bland_picks_first_profitable() {
        assert_eq!(PivotRule::Bland.select_column(&[-1.0, 3.0, 5.0]), Some(1));
    }

    #[test]
    fn test_select_column_given_no_positive_should_return_none() {
        assert_eq!(PivotRule::Dantzig.select_column(&[0.0, -1.5, 1e-12]), None);
        assert_eq!(PivotRule::Bland.select_column(&[]), None);
    }

    #[test]
    fn test_select_row_picks_minimum_ratio() {
        let rows = vec![
            vec![0.0, 1.0, 4.0],
            vec![2.0, 1.0, 12.0],
            vec![3.0, 1.0, 9.0],
        ];
        assert_eq!(PivotRule::Dantzig.select_row(&rows, &[1, 2, 3], 0), Some(2));
    }

    #[test]
    fn test_select_row_dantzig_breaks_ties_by_lowest_row() {
        let rows = vec![vec![1.0, 2.0], vec![2.0, 4.0]];
        assert_eq!(PivotRule::Dantzig.select_row(&rows, &[5, 3], 0), Some(0));
    }

    #[test]
    fn test_select_row_bland_breaks_ties_by_lowest_basic_variable() {
        let rows = vec![vec![1.0, 2.0], vec![2.0, 4.0]];
        assert_eq!(PivotRule::Bland.select_row(&rows, &[5, 3], 0), Some(1));
    }

    #[test]
    fn test_select_row_given_no_positive_coefficient_should_return_none() {
        let rows = vec![vec![-1.0, 1.0], vec![0.0, 3.0]];
        assert_eq!(PivotRule::Dantzig.select_row(&rows, &[1, 2], 0), None);
    }
}
