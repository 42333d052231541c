use super::*;

use approx::assert_relative_eq;
use numkit_core::Matrix;

use crate::linprog::{Relation, VarKind};

fn lp(objective: &[f64], rows: &[&[f64]], rhs: &[f64], relations: &[Relation]) -> Problem {
    let constraints = Matrix::from_rows(rows).expect("valid rows");
    Problem::new(objective.to_vec(), constraints, rhs.to_vec()).with_relations(relations.to_vec())
}

/// maximize 3x1 + 2x2 s.t. 2x1 + x2 ≤ 100, x1 + x2 ≤ 80, x1 ≤ 40.
fn production() -> Problem {
    lp(
        &[3.0, 2.0],
        &[&[2.0, 1.0], &[1.0, 1.0], &[1.0, 0.0]],
        &[100.0, 80.0, 40.0],
        &[Relation::Le; 3],
    )
}

fn assert_optimal(solution: &Solution, x: &[f64], objective: f64) {
    assert_eq!(solution.status, Status::Optimal);
    assert_eq!(solution.x.len(), x.len());
    for (actual, expected) in solution.x.iter().zip(x) {
        assert_relative_eq!(*actual, *expected, epsilon = 1e-9);
    }
    assert_relative_eq!(solution.objective, objective, epsilon = 1e-9);
}

#[test]
fn solves_production_problem() {
    let solution = solve_unobserved(&production(), &Config::default()).expect("valid problem");

    assert_optimal(&solution, &[20.0, 60.0], 180.0);
    assert_eq!(solution.pivots, 3);
}

#[test]
fn reports_unbounded_objective() {
    // maximize x1 + x2 s.t. x1 - x2 ≤ 1: x2 can grow forever.
    let problem = lp(&[1.0, 1.0], &[&[1.0, -1.0]], &[1.0], &[Relation::Le]);

    let solution = solve_unobserved(&problem, &Config::default()).expect("valid problem");

    assert_eq!(solution.status, Status::Unbounded);
    assert_eq!(solution.into_optimal(), Err(Error::Unbounded));
}

#[test]
fn handles_ge_constraint_with_phase_one() {
    // minimize 2x1 + 3x2 s.t. x1 + x2 ≥ 4, x1 ≤ 3.
    let problem = lp(
        &[-2.0, -3.0],
        &[&[1.0, 1.0], &[1.0, 0.0]],
        &[4.0, 3.0],
        &[Relation::Ge, Relation::Le],
    );

    let solution = solve_unobserved(&problem, &Config::default()).expect("valid problem");

    assert_optimal(&solution, &[3.0, 1.0], -9.0);
}

#[test]
fn handles_equality_constraint() {
    // maximize x1 + 2x2 s.t. x1 + x2 = 5, x2 ≤ 3.
    let problem = lp(
        &[1.0, 2.0],
        &[&[1.0, 1.0], &[0.0, 1.0]],
        &[5.0, 3.0],
        &[Relation::Eq, Relation::Le],
    );

    let solution = solve_unobserved(&problem, &Config::default()).expect("valid problem");

    assert_optimal(&solution, &[2.0, 3.0], 8.0);
}

#[test]
fn negative_rhs_flips_relation() {
    // -x1 ≥ -4 is x1 ≤ 4; x1 - x2 ≤ -1 is x2 ≥ x1 + 1.
    let problem = lp(
        &[1.0, 0.0],
        &[&[-1.0, 0.0], &[1.0, -1.0]],
        &[-4.0, -1.0],
        &[Relation::Ge, Relation::Le],
    );

    let solution = solve_unobserved(&problem, &Config::default()).expect("valid problem");

    assert_eq!(solution.status, Status::Optimal);
    assert_relative_eq!(solution.objective, 4.0, epsilon = 1e-9);
    assert_relative_eq!(solution.x[0], 4.0, epsilon = 1e-9);
    assert!(solution.x[1] >= 5.0 - 1e-9);
}

#[test]
fn reports_infeasible_constraints() {
    // x1 + x2 ≤ 1 and x1 + x2 ≥ 3 cannot both hold.
    let problem = lp(
        &[1.0, 1.0],
        &[&[1.0, 1.0], &[1.0, 1.0]],
        &[1.0, 3.0],
        &[Relation::Le, Relation::Ge],
    );

    let solution = solve_unobserved(&problem, &Config::default()).expect("valid problem");

    assert_eq!(solution.status, Status::Infeasible);
    assert_eq!(solution.into_optimal(), Err(Error::Infeasible));
}

#[test]
fn redundant_equalities_keep_a_feasible_basis() {
    // The second row is twice the first.
    let problem = lp(
        &[1.0, 0.0],
        &[&[1.0, 1.0], &[2.0, 2.0]],
        &[2.0, 4.0],
        &[Relation::Eq, Relation::Eq],
    );

    let solution = solve_unobserved(&problem, &Config::default()).expect("valid problem");

    assert_optimal(&solution, &[2.0, 0.0], 2.0);
}

#[test]
fn identical_nonbasic_columns_stay_at_zero() {
    // maximize x3 s.t. x1 + x2 ≤ 4, x3 ≤ 1: x1 and x2 share one unit
    // column in row 1, but the slack is basic there.
    let problem = lp(
        &[0.0, 0.0, 1.0],
        &[&[1.0, 1.0, 0.0], &[0.0, 0.0, 1.0]],
        &[4.0, 1.0],
        &[Relation::Le; 2],
    );

    let solution = solve_unobserved(&problem, &Config::default()).expect("valid problem");

    assert_optimal(&solution, &[0.0, 0.0, 1.0], 1.0);
    assert!(solution.x[0] + solution.x[1] <= 4.0);
}

#[test]
fn integer_kind_is_advisory() {
    let problem = lp(&[1.0], &[&[2.0]], &[3.0], &[Relation::Le])
        .with_var_kinds(vec![VarKind::Integer]);

    let solution = solve_unobserved(&problem, &Config::default()).expect("valid problem");

    assert_optimal(&solution, &[1.5], 1.5);
}

#[test]
fn pivot_budget_is_enforced() {
    let config = Config::new(1, 1e-9).expect("valid config");

    let solution = solve_unobserved(&production(), &config).expect("valid problem");

    assert_eq!(solution.status, Status::IterationLimitExceeded);
    assert_eq!(solution.pivots, 1);
    assert_eq!(solution.x, vec![40.0, 0.0]);
    assert_eq!(
        solution.into_optimal(),
        Err(Error::MaxIterationsReached { pivots: 1 })
    );
}

#[test]
fn zero_budget_stops_before_first_pivot() {
    let config = Config::new(0, 1e-9).expect("valid config");

    let solution = solve_unobserved(&production(), &config).expect("valid problem");

    assert_eq!(solution.status, Status::IterationLimitExceeded);
    assert_eq!(solution.x, vec![0.0, 0.0]);
    assert_relative_eq!(solution.objective, 0.0);
}

#[test]
fn rejects_mismatched_dimensions() {
    let mut problem = production();
    problem.rhs.pop();

    let result = solve_unobserved(&problem, &Config::default());

    assert!(matches!(result, Err(Error::InvalidProblem(_))));
}

#[test]
fn observer_sees_start_and_each_pivot() {
    let mut log = Vec::new();
    let observer = |event: &Event<'_>| -> Option<Action> {
        match *event {
            Event::Started { tableau, phase, .. } => {
                log.push(format!("start {phase} {}x{}", tableau.nrows(), tableau.ncols()));
            }
            Event::Pivoted {
                pivot,
                entering,
                leaving,
                ..
            } => log.push(format!("pivot {pivot}: {entering} -> row {leaving}")),
        }
        None
    };

    solve(&production(), &Config::default(), observer).expect("valid problem");

    assert_eq!(
        log,
        vec![
            "start phase 2 4x6",
            "pivot 1: 0 -> row 3",
            "pivot 2: 1 -> row 1",
            "pivot 3: 4 -> row 2",
        ]
    );
}

#[test]
fn phase_one_problems_restart_in_phase_two() {
    let problem = lp(
        &[-2.0, -3.0],
        &[&[1.0, 1.0], &[1.0, 0.0]],
        &[4.0, 3.0],
        &[Relation::Ge, Relation::Le],
    );
    let mut phases = Vec::new();
    let observer = |event: &Event<'_>| -> Option<Action> {
        if let Event::Started { phase, .. } = event {
            phases.push(*phase);
        }
        None
    };

    solve(&problem, &Config::default(), observer).expect("valid problem");

    assert_eq!(phases, vec![Phase::One, Phase::Two]);
}

#[test]
fn observer_can_stop_after_first_pivot() {
    let observer = |event: &Event<'_>| match event {
        Event::Pivoted { .. } => Some(Action::StopEarly),
        Event::Started { .. } => None,
    };

    let solution = solve(&production(), &Config::default(), observer).expect("valid problem");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.pivots, 1);
    assert_eq!(solution.x, vec![40.0, 0.0]);
    assert_relative_eq!(solution.objective, 120.0);
    assert_eq!(
        solution.into_optimal(),
        Err(Error::StoppedByObserver { pivots: 1 })
    );
}
