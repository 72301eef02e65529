use std::path::Path;

use approx::assert_relative_eq;

use integration_tests::{REFERENCE_TABLE, reference_inputs};
use perks_core::{AssignmentProblem, FeePolicy, table::Table};
use perks_solvers::assignment::{Config, Status, optimize, solve};

#[test]
fn reference_table_loads() {
    let (catalog, spending, costs) = reference_inputs().expect("reference table is valid");

    assert_eq!(catalog.len(), 12);
    assert_eq!(spending.len(), 5);
    assert_eq!(costs.len(), 12);

    // Points are scaled by the point value; omitted rewards earn nothing.
    assert_relative_eq!(catalog.rate("instrument_8", "Travel").get(), 0.03);
    assert_eq!(catalog.rate("instrument_9", "Travel").get(), 0.0);
    assert_eq!(catalog.rate("instrument_12", "Gas").get(), 0.0);
}

#[test]
fn reference_table_optimum() {
    let (catalog, spending, costs) = reference_inputs().unwrap();

    for policy in [FeePolicy::PerAssignment, FeePolicy::PerInstrument] {
        let config = Config::new(policy, None).unwrap();
        let solution = optimize(&catalog, &spending, &costs, &config).unwrap();

        assert_eq!(solution.status, Status::Optimal);
        assert_relative_eq!(solution.total_reward, 150.5, epsilon = 1e-6);

        let assignment: Vec<(&str, &str)> = solution
            .assignment
            .iter()
            .map(|(category, instrument)| (category.as_str(), instrument.as_str()))
            .collect();
        assert_eq!(
            assignment,
            [
                ("Dining", "instrument_2"),
                ("Entertainment", "instrument_5"),
                ("Gas", "instrument_2"),
                ("Groceries", "instrument_5"),
                ("Travel", "instrument_8"),
            ]
        );

        let instruments: Vec<&str> = solution.instruments().iter().map(|i| i.as_str()).collect();
        assert_eq!(instruments, ["instrument_2", "instrument_5", "instrument_8"]);
    }
}

#[test]
fn reported_reward_matches_independent_evaluation() {
    let (catalog, spending, costs) = reference_inputs().unwrap();
    let problem = AssignmentProblem::new(&catalog, &spending, &costs).unwrap();

    for policy in [FeePolicy::PerAssignment, FeePolicy::PerInstrument] {
        let solution = solve(&problem, &Config::new(policy, None).unwrap()).unwrap();
        let expected = problem.net_reward(&solution.assignment, policy).unwrap();
        assert_relative_eq!(solution.total_reward, expected, epsilon = 1e-6);
    }
}

#[test]
fn prohibitive_fees_have_no_solution() {
    let table = r#"
        [spending]
        Groceries = 100.0

        [[instrument]]
        name = "only"
        annual_fee = 200.0
        rewards = { Groceries = 0.01 }
    "#;

    let (catalog, spending, costs) = Table::from_toml_str(table)
        .and_then(Table::into_inputs)
        .unwrap();
    let solution = optimize(&catalog, &spending, &costs, &Config::default()).unwrap();

    assert_eq!(solution.status, Status::NoSolution);
    assert_eq!(solution.total_reward, 0.0);
    assert!(solution.instruments().is_empty());
}

#[test]
fn loads_reference_table_from_disk() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/reference.toml");
    let from_disk = Table::load_path(&path).unwrap();
    let bundled = Table::from_toml_str(REFERENCE_TABLE).unwrap();

    assert_eq!(from_disk, bundled);
}
