use numkit_core::Matrix;

use crate::linprog::{Problem, Relation};

use super::{Phase, Solution, Status};

/// What the pivot rules chose for the current tableau.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Step {
    /// No reduced cost is negative.
    Optimal,
    /// The entering column has no positive entry.
    Unbounded,
    /// Pivot on `(leaving, entering)`.
    Pivot { entering: usize, leaving: usize },
}

/// A dense simplex tableau with its basis.
///
/// Column layout, left to right:
///
/// | columns | contents |
/// |---|---|
/// | `0..n` | decision variables |
/// | `n..n+m` | one slack (`≤`) or surplus (`≥`) per constraint; zero for `=` |
/// | `n+m..n+m+k` | one artificial per `≥` or `=` constraint |
/// | last | right-hand side |
///
/// Row 0 is the objective row, rows `1..=m` hold the constraints.
#[derive(Debug)]
pub(super) struct Tableau {
    matrix: Matrix,
    /// Basic column of each constraint row; `basis[r - 1]` belongs to row `r`.
    basis: Vec<usize>,
    num_vars: usize,
    /// Decision plus slack columns, the only ones allowed to enter.
    num_structural: usize,
    phase: Phase,
    tol: f64,
}

impl Tableau {
    /// Builds the initial tableau for `problem`.
    ///
    /// Rows with a negative right-hand side are negated first, flipping
    /// their relation. If no artificial columns are needed the tableau is
    /// `(m + 1) × (n + m + 1)` with row 0 holding `-c`, ready for phase two.
    /// Otherwise row 0 holds the phase-one objective in canonical form.
    pub(super) fn new(problem: &Problem, tol: f64) -> Self {
        let n = problem.num_vars();
        let m = problem.num_constraints();

        let normalized: Vec<(f64, Relation)> = problem
            .relations
            .iter()
            .zip(&problem.rhs)
            .map(|(&relation, &rhs)| {
                if rhs < 0.0 {
                    (-1.0, relation.flipped())
                } else {
                    (1.0, relation)
                }
            })
            .collect();
        let num_artificial = normalized
            .iter()
            .filter(|(_, relation)| *relation != Relation::Le)
            .count();

        let num_structural = n + m;
        let rhs_col = num_structural + num_artificial;
        let mut matrix = Matrix::zeros(m + 1, rhs_col + 1);
        let mut basis = Vec::with_capacity(m);
        let mut next_artificial = num_structural;

        for (i, (coefficients, &(sign, relation))) in
            problem.constraints.rows().zip(&normalized).enumerate()
        {
            let r = i + 1;
            for (j, &a) in coefficients.iter().enumerate() {
                matrix[[r, j]] = sign * a;
            }
            matrix[[r, rhs_col]] = sign * problem.rhs[i];

            match relation {
                Relation::Le => {
                    matrix[[r, n + i]] = 1.0;
                    basis.push(n + i);
                }
                Relation::Ge | Relation::Eq => {
                    if relation == Relation::Ge {
                        matrix[[r, n + i]] = -1.0;
                    }
                    matrix[[r, next_artificial]] = 1.0;
                    basis.push(next_artificial);
                    next_artificial += 1;
                }
            }
        }

        let mut tableau = Self {
            matrix,
            basis,
            num_vars: n,
            num_structural,
            phase: Phase::One,
            tol,
        };

        if num_artificial == 0 {
            tableau.set_objective(&problem.objective);
        } else {
            // Maximize -Σ artificials, then price out the basic artificials.
            for j in num_structural..rhs_col {
                tableau.matrix[[0, j]] = 1.0;
            }
            for r in 1..=m {
                if tableau.basis[r - 1] >= num_structural {
                    tableau.matrix.mul_add_row(r, 0, -1.0);
                }
            }
        }

        tableau
    }

    pub(super) fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub(super) fn phase(&self) -> Phase {
        self.phase
    }

    fn rhs_col(&self) -> usize {
        self.matrix.ncols() - 1
    }

    /// Applies the pivot rules to the current tableau.
    ///
    /// The entering column is the most negative reduced cost among the
    /// structural columns; the leaving row minimizes `rhs / entry` over
    /// positive entries. Ties go to the first candidate.
    pub(super) fn select(&self) -> Step {
        let mut entering = None;
        let mut most_negative = -self.tol;
        for (j, &cost) in self.matrix.row(0)[..self.num_structural].iter().enumerate() {
            if cost < most_negative {
                most_negative = cost;
                entering = Some(j);
            }
        }
        let Some(entering) = entering else {
            return Step::Optimal;
        };

        let rhs_col = self.rhs_col();
        let mut leaving = None;
        let mut best_ratio = f64::INFINITY;
        for r in 1..self.matrix.nrows() {
            let entry = self.matrix[[r, entering]];
            if entry > self.tol {
                let ratio = self.matrix[[r, rhs_col]] / entry;
                if ratio < best_ratio {
                    best_ratio = ratio;
                    leaving = Some(r);
                }
            }
        }

        match leaving {
            Some(leaving) => Step::Pivot { entering, leaving },
            None => Step::Unbounded,
        }
    }

    /// Pivots on `(row, col)`, making `col` basic in `row`.
    ///
    /// The pivot row is divided by the pivot element and `col` is eliminated
    /// from every other row, including the objective row.
    pub(super) fn pivot(&mut self, row: usize, col: usize) {
        let pivot = self.matrix[[row, col]];
        for value in self.matrix.row_mut(row) {
            *value /= pivot;
        }

        for r in 0..self.matrix.nrows() {
            let factor = self.matrix[[r, col]];
            #[allow(clippy::float_cmp)]
            if r != row && factor != 0.0 {
                self.matrix.mul_add_row(row, r, -factor);
            }
        }

        self.basis[row - 1] = col;
    }

    /// Sum of the artificial variables, as recorded by the phase-one
    /// objective row.
    pub(super) fn infeasibility(&self) -> f64 {
        -self.matrix[[0, self.rhs_col()]]
    }

    /// Returns `true` if the phase-one optimum leaves artificials positive.
    pub(super) fn is_infeasible(&self) -> bool {
        self.phase == Phase::One && self.infeasibility() > self.tol
    }

    /// Ends phase one: pivots remaining artificials out of the basis where
    /// possible and installs the real objective.
    ///
    /// An artificial that stays basic sits on a redundant row whose
    /// structural entries are all zero, so it keeps the value zero.
    pub(super) fn start_phase_two(&mut self, objective: &[f64]) {
        for r in 1..self.matrix.nrows() {
            if self.basis[r - 1] < self.num_structural {
                continue;
            }
            let replacement = (0..self.num_structural).find(|&j| self.matrix[[r, j]].abs() > self.tol);
            if let Some(col) = replacement {
                self.pivot(r, col);
            }
        }

        self.set_objective(objective);
    }

    /// Writes `-c` into row 0 and prices out the basic columns.
    fn set_objective(&mut self, objective: &[f64]) {
        for value in self.matrix.row_mut(0) {
            *value = 0.0;
        }
        for (j, &c) in objective.iter().enumerate() {
            self.matrix[[0, j]] = -c;
        }
        for r in 1..self.matrix.nrows() {
            let cost = self.matrix[[0, self.basis[r - 1]]];
            #[allow(clippy::float_cmp)]
            if cost != 0.0 {
                self.matrix.mul_add_row(r, 0, -cost);
            }
        }
        self.phase = Phase::Two;
    }

    /// Returns the value of decision variable `j` in the basic solution.
    ///
    /// A basic column takes the right-hand side of the row it is basic in;
    /// any other column is non-basic at zero. Membership comes from the
    /// tracked basis, since a non-basic column can still look like a unit
    /// column (two zero-cost variables sharing one constraint row).
    fn value(&self, j: usize) -> f64 {
        self.basis
            .iter()
            .position(|&col| col == j)
            .map_or(0.0, |i| self.matrix[[i + 1, self.rhs_col()]])
    }

    /// Extracts the basic solution as a [`Solution`].
    ///
    /// In phase two the objective is read from row 0; in phase one row 0
    /// holds the auxiliary objective, so `c·x` is computed directly.
    pub(super) fn solution(&self, objective: &[f64], status: Status, pivots: usize) -> Solution {
        let x: Vec<f64> = (0..self.num_vars).map(|j| self.value(j)).collect();
        let objective = match self.phase {
            Phase::Two => self.matrix[[0, self.rhs_col()]],
            Phase::One => objective.iter().zip(&x).map(|(c, v)| c * v).sum(),
        };

        Solution {
            status,
            x,
            objective,
            pivots,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn problem(rows: &[[f64; 2]], rhs: Vec<f64>, relations: Vec<Relation>) -> Problem {
        let a = Matrix::from_rows(rows).expect("valid rows");
        Problem::new(vec![3.0, 2.0], a, rhs).with_relations(relations)
    }

    #[test]
    fn all_le_builds_canonical_tableau() {
        let p = problem(&[[2.0, 1.0], [1.0, 1.0]], vec![100.0, 80.0], vec![Relation::Le; 2]);

        let tableau = Tableau::new(&p, 1e-9);

        assert_eq!(tableau.phase(), Phase::Two);
        assert_eq!(tableau.matrix().nrows(), 3);
        assert_eq!(tableau.matrix().ncols(), 5);
        assert_eq!(tableau.matrix().row(0), &[-3.0, -2.0, 0.0, 0.0, 0.0]);
        assert_eq!(tableau.matrix().row(1), &[2.0, 1.0, 1.0, 0.0, 100.0]);
        assert_eq!(tableau.matrix().row(2), &[1.0, 1.0, 0.0, 1.0, 80.0]);
    }

    #[test]
    fn ge_and_eq_rows_get_artificials() {
        let p = problem(
            &[[1.0, 1.0], [1.0, 0.0], [0.0, 1.0]],
            vec![4.0, 3.0, 1.0],
            vec![Relation::Ge, Relation::Le, Relation::Eq],
        );

        let tableau = Tableau::new(&p, 1e-9);

        // 2 decision + 3 slack + 2 artificial + rhs
        assert_eq!(tableau.matrix().ncols(), 8);
        assert_eq!(tableau.phase(), Phase::One);
        assert_eq!(tableau.matrix().row(1), &[1.0, 1.0, -1.0, 0.0, 0.0, 1.0, 0.0, 4.0]);
        assert_eq!(tableau.matrix().row(3), &[0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0]);
        // Row 0 is priced out: artificial columns are zero.
        assert_eq!(tableau.matrix().row(0), &[-1.0, -2.0, 1.0, 0.0, 0.0, 0.0, 0.0, -5.0]);
        assert_relative_eq!(tableau.infeasibility(), 5.0);
    }

    #[test]
    fn negative_rhs_flips_relation() {
        let p = problem(&[[1.0, -1.0]], vec![-2.0], vec![Relation::Le]);

        let tableau = Tableau::new(&p, 1e-9);

        // -x1 + x2 >= 2 needs a surplus and an artificial.
        assert_eq!(tableau.matrix().row(1), &[-1.0, 1.0, -1.0, 1.0, 2.0]);
    }

    #[test]
    fn pivot_produces_exact_unit_column() {
        let p = problem(&[[2.0, 1.0], [1.0, 1.0]], vec![100.0, 80.0], vec![Relation::Le; 2]);
        let mut tableau = Tableau::new(&p, 1e-9);

        assert_eq!(
            tableau.select(),
            Step::Pivot {
                entering: 0,
                leaving: 1
            }
        );
        tableau.pivot(1, 0);

        assert_eq!(tableau.matrix().column(0).collect::<Vec<_>>(), vec![0.0, 1.0, 0.0]);
        assert_relative_eq!(tableau.value(0), 50.0);
        assert_relative_eq!(tableau.value(1), 0.0);
    }
}
