use std::fmt;

use numkit_core::Matrix;

/// Relation between a constraint's left-hand side and its right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// `a·x ≤ b`
    Le,
    /// `a·x ≥ b`
    Ge,
    /// `a·x = b`
    Eq,
}

impl Relation {
    /// Returns the relation obtained by multiplying both sides by `-1`.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Le => Self::Ge,
            Self::Ge => Self::Le,
            Self::Eq => Self::Eq,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Le => "<=",
            Self::Ge => ">=",
            Self::Eq => "=",
        })
    }
}

/// Declared kind of a decision variable.
///
/// The simplex solver treats every variable as continuous; integrality is
/// recorded but not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VarKind {
    #[default]
    Continuous,
    Integer,
}

/// A linear program in maximization form.
///
/// ```text
/// maximize    c·x
/// subject to  A[i]·x (≤ | ≥ | =) b[i]   for each constraint i
///             x ≥ 0
/// ```
///
/// Fields are public so problems can be assembled directly. Shapes are
/// checked when the problem is solved.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    /// Objective coefficients `c`, one per variable.
    pub objective: Vec<f64>,

    /// Constraint matrix `A`, one row per constraint.
    pub constraints: Matrix,

    /// Right-hand sides `b`, one per constraint.
    pub rhs: Vec<f64>,

    /// Relation of each constraint.
    pub relations: Vec<Relation>,

    /// Kind of each variable.
    pub var_kinds: Vec<VarKind>,
}

impl Problem {
    /// Creates a problem whose constraints are all `≤` and whose variables
    /// are all continuous.
    #[must_use]
    pub fn new(objective: Vec<f64>, constraints: Matrix, rhs: Vec<f64>) -> Self {
        let relations = vec![Relation::Le; constraints.nrows()];
        let var_kinds = vec![VarKind::Continuous; objective.len()];
        Self {
            objective,
            constraints,
            rhs,
            relations,
            var_kinds,
        }
    }

    /// Replaces the constraint relations.
    #[must_use]
    pub fn with_relations(mut self, relations: Vec<Relation>) -> Self {
        self.relations = relations;
        self
    }

    /// Replaces the variable kinds.
    #[must_use]
    pub fn with_var_kinds(mut self, var_kinds: Vec<VarKind>) -> Self {
        self.var_kinds = var_kinds;
        self
    }

    /// Number of decision variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }

    /// Number of constraints.
    #[must_use]
    pub fn num_constraints(&self) -> usize {
        self.constraints.nrows()
    }

    /// Checks that every part of the problem agrees on its dimensions and
    /// holds only finite values.
    ///
    /// On failure, returns a description of the first inconsistency found.
    pub(crate) fn validate(&self) -> Result<(), String> {
        let n = self.num_vars();
        let m = self.num_constraints();

        if n == 0 {
            return Err("objective has no coefficients".into());
        }
        if self.constraints.ncols() != n {
            return Err(format!(
                "constraint matrix has {} columns, objective has {n}",
                self.constraints.ncols()
            ));
        }
        if self.rhs.len() != m {
            return Err(format!("{} right-hand sides for {m} constraints", self.rhs.len()));
        }
        if self.relations.len() != m {
            return Err(format!("{} relations for {m} constraints", self.relations.len()));
        }
        if self.var_kinds.len() != n {
            return Err(format!("{} variable kinds for {n} variables", self.var_kinds.len()));
        }

        let finite = self.objective.iter().chain(&self.rhs).all(|v| v.is_finite())
            && self.constraints.rows().flatten().all(|v| v.is_finite());
        if !finite {
            return Err("coefficients must be finite".into());
        }

        Ok(())
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "maximize")?;
        write_terms(f, &self.objective)?;
        writeln!(f)?;
        write!(f, "subject to")?;
        for ((row, relation), rhs) in self.constraints.rows().zip(&self.relations).zip(&self.rhs) {
            writeln!(f)?;
            write!(f, "   ")?;
            write_terms(f, row)?;
            write!(f, " {relation} {rhs}")?;
        }
        Ok(())
    }
}

/// Writes `c₁·x1 + c₂·x2 + …`, skipping zero coefficients.
fn write_terms(f: &mut fmt::Formatter<'_>, coefficients: &[f64]) -> fmt::Result {
    let mut first = true;
    for (j, &c) in coefficients.iter().enumerate() {
        #[allow(clippy::float_cmp)]
        if c == 0.0 {
            continue;
        }
        if first {
            f.write_str(if c < 0.0 { " -" } else { " " })?;
        } else {
            f.write_str(if c < 0.0 { " - " } else { " + " })?;
        }
        write!(f, "{}·x{}", c.abs(), j + 1)?;
        first = false;
    }
    if first {
        write!(f, " 0")?;
    }
    Ok(())
}
