use good_lp::{
    Constraint, Expression, ProblemVariables, ResolutionError, Solution as _, SolverModel,
    Variable, constraint, default_solver, variable,
};
use perks_core::{AssignmentProblem, FeePolicy};

use super::Error;

/// A binary integer program ready to be solved.
pub(super) struct Model {
    vars: ProblemVariables,
    objective: Expression,
    /// Indexed as `choices[instrument][category]`.
    choices: Vec<Vec<Variable>>,
    constraints: Vec<Constraint>,
    variable_count: usize,
}

/// Variable values and objective at the optimum.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Solved {
    /// Indexed as `values[instrument][category]`.
    pub values: Vec<Vec<f64>>,
    pub objective: f64,
}

/// Builds the assignment model for `problem` under `policy`.
pub(super) fn build(problem: &AssignmentProblem, policy: FeePolicy) -> Model {
    let instruments = problem.instruments();
    let categories = problem.categories();
    let pairs = instruments.len() * categories.len();

    let mut vars = ProblemVariables::new();
    let choices: Vec<Vec<Variable>> = instruments
        .iter()
        .map(|instrument| {
            categories
                .iter()
                .map(|category| {
                    vars.add(
                        variable()
                            .binary()
                            .name(format!("x[{instrument}][{category}]")),
                    )
                })
                .collect()
        })
        .collect();
    let mut variable_count = pairs;

    let mut objective = Expression::with_capacity(pairs + instruments.len());
    let mut constraints = Vec::with_capacity(categories.len() + 1);

    for (i, row) in choices.iter().enumerate() {
        for (c, &x) in row.iter().enumerate() {
            objective.add_mul(problem.reward(i, c), x);
        }
    }

    match policy {
        FeePolicy::PerAssignment => {
            for (i, row) in choices.iter().enumerate() {
                for &x in row {
                    objective.add_mul(-problem.fee(i), x);
                }
            }
        }
        FeePolicy::PerInstrument => {
            for (i, row) in choices.iter().enumerate() {
                let used = vars.add(
                    variable()
                        .binary()
                        .name(format!("y[{}]", instruments[i])),
                );
                variable_count += 1;
                objective.add_mul(-problem.fee(i), used);
                for &x in row {
                    constraints.push(constraint!(x <= used));
                }
            }
        }
    }

    for c in 0..categories.len() {
        let mut assigned = Expression::with_capacity(instruments.len());
        for row in &choices {
            assigned.add_mul(1.0, row[c]);
        }
        constraints.push(constraint!(assigned == 1.0));
    }

    let net_reward = objective.clone();
    constraints.push(constraint!(net_reward >= 0.0));

    Model {
        vars,
        objective,
        choices,
        constraints,
        variable_count,
    }
}

impl Model {
    pub(super) fn variable_count(&self) -> usize {
        self.variable_count
    }

    pub(super) fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Solves the model, returning `None` if it is infeasible.
    pub(super) fn solve(self) -> Result<Option<Solved>, Error> {
        let Self {
            vars,
            objective,
            choices,
            constraints,
            ..
        } = self;

        let mut lp = vars.maximise(objective.clone()).using(default_solver);
        for constraint in constraints {
            lp = lp.with(constraint);
        }

        let solution = match lp.solve() {
            Ok(solution) => solution,
            Err(ResolutionError::Infeasible) => return Ok(None),
            Err(err) => return Err(Error::Solver(err)),
        };

        let values = choices
            .iter()
            .map(|row| row.iter().map(|&x| solution.value(x)).collect())
            .collect();

        Ok(Some(Solved {
            values,
            objective: solution.eval(objective),
        }))
    }
}
