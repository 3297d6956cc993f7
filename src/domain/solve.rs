use crate::domain::error::SolveError;
use crate::domain::pivot_rule::PivotRule;
use crate::domain::simplex::{default_iteration_limit, StandardForm};
use crate::domain::solution::SimplexResult;
use crate::domain::tableau::{Direction, Tableau};
use crate::domain::validate::{validate_feasible_start, validate_tableau};

/// Runs the Simplex method on an edited tableau.
///
/// The tableau itself is left untouched; pivoting happens on a private
/// standard-form copy, so the same input always yields the same result.
/// `max_iterations` defaults to [`default_iteration_limit`] for the tableau's size.
pub fn solve(
    tableau: &Tableau,
    direction: Direction,
    rule: PivotRule,
    max_iterations: Option<usize>,
) -> Result<SimplexResult, SolveError> {
    validate_tableau(tableau)?;
    validate_feasible_start(tableau)?;

    let limit = max_iterations.unwrap_or_else(|| {
        default_iteration_limit(tableau.num_variables(), tableau.num_constraints())
    });

    let mut form = StandardForm::from_tableau(tableau, direction);
    let iterations = form.optimize(tableau, rule, limit)?;
    let result = form.extract(tableau, direction, iterations);

    log::info!(
        "Solved {}x{} tableau ({:?}, {}) in {} pivots, optimal value {}",
        tableau.num_constraints(),
        tableau.num_variables(),
        direction,
        rule.name(),
        iterations,
        result.optimal_value,
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tableau::create_tableau;

    const TOLERANCE: f64 = 1e-9;

    fn tableau_from(direction: Direction, constraints: &[&[f64]], objective: &[f64]) -> Tableau {
        let num_vars = objective.len();
        let mut tableau = create_tableau(num_vars, constraints.len(), direction);
        for (i, row) in constraints.iter().enumerate() {
            tableau.values[i] = row.to_vec();
        }
        let mut objective_row = objective.to_vec();
        objective_row.push(0.0);
        tableau.values[constraints.len()] = objective_row;
        tableau
    }

    fn textbook() -> Tableau {
        tableau_from(
            Direction::Maximize,
            &[&[1.0, 0.0, 4.0], &[0.0, 2.0, 12.0], &[3.0, 2.0, 18.0]],
            &[3.0, 5.0],
        )
    }

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("label missing from result");
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {}, got {}",
            expected,
            actual,
        );
    }

    fn objective_at(tableau: &Tableau, result: &SimplexResult) -> f64 {
        tableau
            .variable_labels()
            .iter()
            .zip(tableau.objective_row())
            .map(|(label, c)| c * result.value_of(label).unwrap())
            .sum()
    }

    #[test]
    fn test_solve_textbook_problem() {
        let tableau = textbook();
        let result = solve(&tableau, Direction::Maximize, PivotRule::Dantzig, None).unwrap();

        assert_close(result.value_of("x1"), 2.0);
        assert_close(result.value_of("x2"), 6.0);
        assert_close(Some(result.optimal_value), 36.0);
        assert_close(result.slack("Restrição 1"), 2.0);
        assert_close(result.slack("Restrição 2"), 0.0);
        assert_close(result.slack("Restrição 3"), 0.0);
        assert_close(result.shadow_price("Restrição 1"), 0.0);
        // 2x2 <= 12 carries the 1.5; 3x1 + 2x2 <= 18 is worth 1 per unit.
        assert_close(result.shadow_price("Restrição 2"), 1.5);
        assert_close(result.shadow_price("Restrição 3"), 1.0);
        assert_close(result.delta("x1"), 0.0);
        assert_close(result.delta("x2"), 0.0);
    }

    #[test]
    fn test_solve_preserves_label_order() {
        let result = solve(&textbook(), Direction::Maximize, PivotRule::Dantzig, None).unwrap();

        let labels: Vec<&str> = result.solution.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["x1", "x2"]);
        let labels: Vec<&str> = result.shadow_prices.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Restrição 1", "Restrição 2", "Restrição 3"]);
        assert_eq!(result.binding_constraints().collect::<Vec<_>>(), vec!["Restrição 2", "Restrição 3"]);
    }

    #[test]
    fn test_solve_given_bland_rule_should_reach_same_optimum() {
        let dantzig = solve(&textbook(), Direction::Maximize, PivotRule::Dantzig, None).unwrap();
        let bland = solve(&textbook(), Direction::Maximize, PivotRule::Bland, None).unwrap();

        assert_close(Some(bland.optimal_value), dantzig.optimal_value);
        assert_close(bland.value_of("x1"), 2.0);
        assert_close(bland.value_of("x2"), 6.0);
        assert_close(bland.shadow_price("Restrição 2"), 1.5);
    }

    #[test]
    fn test_solve_is_deterministic_and_leaves_input_untouched() {
        let tableau = textbook();
        let before = tableau.clone();

        let first = solve(&tableau, Direction::Maximize, PivotRule::Dantzig, None).unwrap();
        let second = solve(&tableau, Direction::Maximize, PivotRule::Dantzig, None).unwrap();

        assert_eq!(first, second);
        assert_eq!(tableau, before);
    }

    #[test]
    fn test_solve_given_unbounded_problem_should_fail() {
        let tableau = tableau_from(Direction::Maximize, &[&[1.0, -1.0, 1.0]], &[1.0, 0.0]);

        assert!(matches!(
            solve(&tableau, Direction::Maximize, PivotRule::Dantzig, None),
            Err(SolveError::Unbounded { .. })
        ));
    }

    #[test]
    fn test_solve_given_skeleton_should_return_zero_solution() {
        let tableau = create_tableau(3, 2, Direction::Maximize);
        let result = solve(&tableau, Direction::Maximize, PivotRule::Dantzig, None).unwrap();

        assert_eq!(result.optimal_value, 0.0);
        assert_eq!(result.iterations, 0);
        assert!(result.solution.iter().all(|e| e.value == 0.0));
        assert!(result.slacks.iter().all(|e| e.value == 0.0));
        assert!(result.shadow_prices.iter().all(|e| e.value == 0.0));
        assert!(result.deltas.iter().all(|e| e.value == 0.0));
    }

    #[test]
    fn test_solve_minimize_problem() {
        // min x1 - x2  s.t.  x2 <= 3,  x1 + x2 <= 5
        let tableau = tableau_from(
            Direction::Minimize,
            &[&[0.0, 1.0, 3.0], &[1.0, 1.0, 5.0]],
            &[1.0, -1.0],
        );
        let result = solve(&tableau, Direction::Minimize, PivotRule::Dantzig, None).unwrap();

        assert_close(Some(result.optimal_value), -3.0);
        assert_close(result.value_of("x1"), 0.0);
        assert_close(result.value_of("x2"), 3.0);
        assert_close(result.slack("Restrição 2"), 2.0);
        // One more unit of x2's bound lowers the cost by one.
        assert_close(result.shadow_price("Restrição 1"), -1.0);
        assert_close(result.shadow_price("Restrição 2"), 0.0);
        // Forcing x1 into the solution raises the cost.
        assert_close(result.delta("x1"), 1.0);
        assert_close(result.delta("x2"), 0.0);
    }

    #[test]
    fn test_solve_minimize_with_positive_costs_stays_at_origin() {
        let tableau = tableau_from(Direction::Minimize, &[&[1.0, 1.0, 4.0]], &[2.0, 3.0]);
        let result = solve(&tableau, Direction::Minimize, PivotRule::Dantzig, None).unwrap();

        assert_eq!(result.optimal_value, 0.0);
        assert_close(result.delta("x1"), 2.0);
        assert_close(result.delta("x2"), 3.0);
        assert_close(result.slack("Restrição 1"), 4.0);
    }

    #[test]
    fn test_solve_optimality_certificate_and_feasibility() {
        let cases = vec![
            (Direction::Maximize, textbook()),
            (
                Direction::Maximize,
                tableau_from(
                    Direction::Maximize,
                    &[&[1.0, 1.0, 1.0, 40.0], &[2.0, 1.0, 0.0, 60.0], &[0.0, 1.0, 3.0, 45.0]],
                    &[4.0, 3.0, 2.0],
                ),
            ),
            (
                Direction::Minimize,
                tableau_from(
                    Direction::Minimize,
                    &[&[1.0, 2.0, 8.0], &[3.0, 1.0, 9.0]],
                    &[-1.0, -1.0],
                ),
            ),
        ];

        for (direction, tableau) in cases {
            let result = solve(&tableau, direction, PivotRule::Dantzig, None).unwrap();

            for delta in &result.deltas {
                match direction {
                    Direction::Maximize => assert!(delta.value <= TOLERANCE),
                    Direction::Minimize => assert!(delta.value >= -TOLERANCE),
                }
            }
            assert!(result.solution.iter().all(|e| e.value >= -TOLERANCE));
            assert!(result.slacks.iter().all(|e| e.value >= -TOLERANCE));
            assert!((result.optimal_value - objective_at(&tableau, &result)).abs() < 1e-7);
        }
    }

    #[test]
    fn test_solve_degenerate_problem_terminates() {
        // Ties in the ratio test at the first pivot.
        let tableau = tableau_from(
            Direction::Maximize,
            &[&[1.0, 1.0, 2.0], &[1.0, 0.0, 2.0], &[0.0, 1.0, 2.0]],
            &[2.0, 1.0],
        );

        for rule in [PivotRule::Dantzig, PivotRule::Bland] {
            let result = solve(&tableau, Direction::Maximize, rule, None).unwrap();
            assert_close(Some(result.optimal_value), 4.0);
            assert_close(result.value_of("x1"), 2.0);
        }
    }

    #[test]
    fn test_solve_given_cycling_problem_should_need_bland_rule() {
        // Beale's example: Dantzig's rule revisits the same degenerate bases forever.
        let tableau = tableau_from(
            Direction::Maximize,
            &[
                &[0.25, -8.0, -1.0, 9.0, 0.0],
                &[0.5, -12.0, -0.5, 3.0, 0.0],
                &[0.0, 0.0, 1.0, 0.0, 1.0],
            ],
            &[0.75, -20.0, 0.5, -6.0],
        );

        assert!(matches!(
            solve(&tableau, Direction::Maximize, PivotRule::Dantzig, None),
            Err(SolveError::NonConvergent { .. })
        ));

        let result = solve(&tableau, Direction::Maximize, PivotRule::Bland, None).unwrap();
        assert_close(Some(result.optimal_value), 1.25);
        assert_close(result.value_of("x1"), 1.0);
        assert_close(result.value_of("x3"), 1.0);
        assert!((result.optimal_value - objective_at(&tableau, &result)).abs() < 1e-9);
    }

    #[test]
    fn test_solve_given_negative_rhs_should_return_infeasible_start() {
        let tableau = tableau_from(Direction::Maximize, &[&[1.0, 1.0, -2.0]], &[1.0, 1.0]);

        assert!(matches!(
            solve(&tableau, Direction::Maximize, PivotRule::Dantzig, None),
            Err(SolveError::InfeasibleStart { .. })
        ));
    }

    #[test]
    fn test_solve_given_ragged_grid_should_return_invalid_shape() {
        let mut tableau = textbook();
        tableau.values[2].push(1.0);

        assert!(matches!(
            solve(&tableau, Direction::Maximize, PivotRule::Dantzig, None),
            Err(SolveError::InvalidShape { .. })
        ));
    }

    #[test]
    fn test_solve_given_iteration_limit_should_return_non_convergent() {
        assert_eq!(
            solve(&textbook(), Direction::Maximize, PivotRule::Dantzig, Some(1)),
            Err(SolveError::NonConvergent { iterations: 1 })
        );
    }

    #[test]
    fn test_solve_ignores_objective_constant() {
        let mut tableau = textbook();
        tableau.set(3, 2, 100.0);

        let result = solve(&tableau, Direction::Maximize, PivotRule::Dantzig, None).unwrap();
        assert_close(Some(result.optimal_value), 36.0);
    }
}
