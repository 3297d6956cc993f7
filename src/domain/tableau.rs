/// Label of the right-hand-side column.
pub const RHS_LABEL: &str = "Lado Direito";

/// Optimization direction of the objective row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Maximize,
    Minimize,
}

impl Direction {
    /// Factor that turns this direction into the engine's internal maximize form.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Maximize => 1.0,
            Direction::Minimize => -1.0,
        }
    }

    pub fn objective_label(self) -> &'static str {
        match self {
            Direction::Maximize => "Maximizar Z",
            Direction::Minimize => "Minimizar Z",
        }
    }
}

/// Labeled numeric grid exchanged with the editor.
///
/// Rows are the constraints followed by the objective row, columns are the
/// decision variables followed by the right-hand side. The engine never
/// mutates a `Tableau`; it copies the numbers into its own standard form.
#[derive(Debug, Clone, PartialEq)]
pub struct Tableau {
    pub row_labels: Vec<String>,
    pub column_labels: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl Tableau {
    pub fn new(row_labels: Vec<String>, column_labels: Vec<String>, values: Vec<Vec<f64>>) -> Self {
        Tableau {
            row_labels,
            column_labels,
            values,
        }
    }

    pub fn num_variables(&self) -> usize {
        self.column_labels.len().saturating_sub(1)
    }

    pub fn num_constraints(&self) -> usize {
        self.row_labels.len().saturating_sub(1)
    }

    pub fn variable_labels(&self) -> &[String] {
        &self.column_labels[..self.num_variables()]
    }

    pub fn constraint_labels(&self) -> &[String] {
        &self.row_labels[..self.num_constraints()]
    }

    pub fn constraint_rows(&self) -> &[Vec<f64>] {
        &self.values[..self.num_constraints()]
    }

    /// Last row of the grid. Callers must validate the shape first.
    pub fn objective_row(&self) -> &[f64] {
        &self.values[self.num_constraints()]
    }

    /// Sets a single cell, as the editor does while the user types.
    pub fn set(&mut self, row: usize, column: usize, value: f64) {
        self.values[row][column] = value;
    }
}

/// Builds an empty skeleton with `num_constraints` constraint rows and
/// `num_vars` variable columns. Every cell starts at zero.
///
/// Range checks are the caller's business; zero counts yield a tableau the
/// engine will later reject as malformed.
pub fn create_tableau(num_vars: usize, num_constraints: usize, direction: Direction) -> Tableau {
    let row_labels = (1..=num_constraints)
        .map(|i| format!("Restrição {}", i))
        .chain(std::iter::once(direction.objective_label().to_string()))
        .collect();

    let column_labels = (1..=num_vars)
        .map(|j| format!("x{}", j))
        .chain(std::iter::once(RHS_LABEL.to_string()))
        .collect();

    let values = vec![vec![0.0; num_vars + 1]; num_constraints + 1];

    Tableau::new(row_labels, column_labels, values)
}
