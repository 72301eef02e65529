use perks_core::{Assignment, AssignmentProblem};

use super::{Error, Solution, Status, model::Solved};

/// Binary values above this are read as "chosen".
const CHOSEN: f64 = 0.5;

/// Reads the chosen instrument for each category out of solved values.
pub(super) fn decode(problem: &AssignmentProblem, solved: &Solved) -> Result<Solution, Error> {
    let mut assignment = Assignment::new();

    for (c, category) in problem.categories().iter().enumerate() {
        let i = solved
            .values
            .iter()
            .position(|row| row[c] > CHOSEN)
            .ok_or_else(|| Error::Decode {
                category: category.clone(),
            })?;
        assignment.assign(category.clone(), problem.instruments()[i].clone());
    }

    Ok(Solution {
        status: Status::Optimal,
        assignment,
        total_reward: solved.objective,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use perks_core::{AnnualCosts, Catalog, InstrumentId, SpendingForecast};

    fn problem() -> AssignmentProblem {
        let mut catalog = Catalog::new();
        catalog.add_instrument("a");
        catalog.add_instrument("b");

        let spending = SpendingForecast::from_pairs([("Dining", 1.0), ("Gas", 1.0)]).unwrap();
        let costs = AnnualCosts::from_pairs([("a", 0.0), ("b", 0.0)]).unwrap();

        AssignmentProblem::new(&catalog, &spending, &costs).unwrap()
    }

    #[test]
    fn reads_near_binary_values() {
        // Categories are sorted: Dining, Gas.
        let solved = Solved {
            values: vec![vec![0.999_999_9, 1e-9], vec![0.0, 1.0]],
            objective: 7.5,
        };

        let solution = decode(&problem(), &solved).unwrap();

        assert_eq!(solution.status, Status::Optimal);
        assert_eq!(solution.total_reward, 7.5);
        assert_eq!(
            solution.assignment.instrument_for("Dining"),
            Some(&InstrumentId::new("a"))
        );
        assert_eq!(
            solution.assignment.instrument_for("Gas"),
            Some(&InstrumentId::new("b"))
        );
    }

    #[test]
    fn unselected_category_is_an_error() {
        let solved = Solved {
            values: vec![vec![1.0, 0.0], vec![0.0, 0.0]],
            objective: 0.0,
        };

        let err = decode(&problem(), &solved).unwrap_err();
        assert!(matches!(err, Error::Decode { category } if category.as_str() == "Gas"));
    }
}
