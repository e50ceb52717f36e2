//! Facade scenarios.

use mincov_config::{EnvironmentMode, HeuristicType, SolverConfig};
use mincov_test::{brute_force_optimum, random_instance, Instance};

use super::*;

fn load(mincov: &mut MinCov, inst: &Instance) {
    mincov.set_size(inst.row_size, inst.col_size);
    for (col, &cost) in inst.costs.iter().enumerate() {
        mincov.set_col_cost(col, cost).unwrap();
    }
    for (row, col) in inst.elements() {
        mincov.insert_elem(row, col).unwrap();
    }
}

fn problem(inst: &Instance) -> MinCov {
    let mut mincov = MinCov::new();
    load(&mut mincov, inst);
    mincov
}

#[test]
fn test_triangle_scenario() {
    let mincov = problem(&Instance::triangle());
    let solution = mincov.exact().unwrap();
    assert_eq!(solution.cost(), 2);
    assert_eq!(solution.len(), 2);
    assert!(Instance::triangle().covers(solution.columns()));
}

#[test]
fn test_forced_column_scenario() {
    let mincov = problem(&Instance::forced_column());
    let exact = mincov.exact().unwrap();
    let greedy = mincov.heuristic("greedy").unwrap();
    assert!(exact.contains(0));
    assert!(greedy.contains(0));
    assert_eq!(exact.cost(), 7);
}

#[test]
fn test_disjoint_scenario() {
    let left = Instance::triangle();
    let right = Instance::forced_column();
    let mut mincov = problem(&left.concat(&right));

    let split = mincov.exact_with_stats().unwrap();
    assert!(split.stats.partitions > 0);
    let expected = brute_force_optimum(&left).unwrap() + brute_force_optimum(&right).unwrap();
    assert_eq!(split.solution.unwrap().cost(), expected);

    mincov.set_partition_flag(false);
    let whole = mincov.exact_with_stats().unwrap();
    assert_eq!(whole.stats.partitions, 0);
    assert_eq!(whole.solution.unwrap().cost(), expected);
}

#[test]
fn test_exact_never_worse_than_heuristics() {
    for seed in 0..30 {
        let inst = random_instance(seed, 16, 14, 0.18, 8);
        let mut mincov = problem(&inst);
        mincov.config_mut().random_trials = 50;
        mincov.config_mut().random_seed = Some(seed);

        let exact = mincov.exact().unwrap();
        assert_eq!(Some(exact.cost()), brute_force_optimum(&inst), "seed {seed}");
        for name in ["greedy", "random"] {
            let approx = mincov.heuristic(name).unwrap();
            assert!(inst.covers(approx.columns()), "{name} seed {seed}");
            assert!(exact.cost() <= approx.cost(), "{name} seed {seed}");
        }
    }
}

#[test]
fn test_unknown_heuristic_falls_back_to_greedy() {
    let mincov = problem(&random_instance(42, 20, 15, 0.15, 6));
    assert_eq!(
        mincov.heuristic("annealing").unwrap(),
        mincov.heuristic("greedy").unwrap()
    );
    assert_eq!(
        mincov.heuristic("").unwrap(),
        mincov.heuristic_default().unwrap()
    );
}

#[test]
fn test_heuristic_default_follows_config() {
    let config = SolverConfig::new()
        .with_heuristic(HeuristicType::Random)
        .with_random_trials(25)
        .with_random_seed(5);
    let mut mincov = MinCov::with_config(config);
    load(&mut mincov, &random_instance(9, 20, 15, 0.15, 6));
    assert_eq!(
        mincov.heuristic_default().unwrap(),
        mincov.heuristic("random").unwrap()
    );
}

#[test]
fn test_reproducible_mode_repeats_random() {
    let config = SolverConfig::new()
        .with_environment_mode(EnvironmentMode::Reproducible)
        .with_random_trials(20);
    let mut mincov = MinCov::with_config(config);
    load(&mut mincov, &random_instance(10, 24, 16, 0.12, 9));
    assert_eq!(
        mincov.heuristic("random").unwrap(),
        mincov.heuristic("random").unwrap()
    );
}

#[test]
fn test_asserted_search() {
    let config = SolverConfig::new().with_environment_mode(EnvironmentMode::FullAssert);
    let mut mincov = MinCov::with_config(config);
    let inst = random_instance(3, 12, 10, 0.25, 5);
    load(&mut mincov, &inst);
    assert_eq!(
        Some(mincov.exact().unwrap().cost()),
        brute_force_optimum(&inst)
    );
}

#[test]
fn test_not_sized() {
    let mut mincov = MinCov::new();
    assert_eq!(mincov.insert_elem(0, 0), Err(MinCovError::NotSized));
    assert_eq!(mincov.set_col_cost(0, 1), Err(MinCovError::NotSized));
    assert_eq!(mincov.exact(), Err(MinCovError::NotSized));
    assert_eq!(mincov.heuristic("greedy"), Err(MinCovError::NotSized));
    assert_eq!(mincov.row_size(), 0);
}

#[test]
fn test_out_of_range_and_bad_cost() {
    let mut mincov = MinCov::new();
    mincov.set_size(2, 2);
    assert_eq!(
        mincov.insert_elem(2, 0),
        Err(MinCovError::RowOutOfRange {
            row: 2,
            row_size: 2
        })
    );
    assert_eq!(
        mincov.insert_elem(0, 5),
        Err(MinCovError::ColOutOfRange {
            col: 5,
            col_size: 2
        })
    );
    assert_eq!(
        mincov.set_col_cost(1, 0),
        Err(MinCovError::InvalidCost { col: 1, cost: 0 })
    );
}

#[test]
fn test_uncoverable_row_is_rejected() {
    let mut mincov = MinCov::new();
    mincov.set_size(3, 2);
    mincov.insert_elem(0, 0).unwrap();
    mincov.insert_elem(2, 1).unwrap();
    assert_eq!(mincov.exact(), Err(MinCovError::UncoverableRow(1)));
    assert_eq!(mincov.heuristic("random"), Err(MinCovError::UncoverableRow(1)));
}

#[test]
fn test_duplicates_and_resolve_after_cost_change() {
    let mut mincov = problem(&Instance::triangle());
    mincov.insert_elem(0, 0).unwrap();
    assert_eq!(mincov.exact().unwrap().cost(), 2);

    // Making column 0 expensive forces the cover {1, 2}.
    mincov.set_col_cost(0, 10).unwrap();
    let solution = mincov.exact().unwrap();
    assert_eq!(solution.cost(), 2);
    assert!(!solution.contains(0));
}

#[test]
fn test_set_size_starts_over() {
    let mut mincov = problem(&Instance::forced_column());
    mincov.set_size(1, 1);
    assert_eq!(mincov.row_size(), 1);
    assert_eq!(mincov.col_size(), 1);
    assert_eq!(mincov.exact(), Err(MinCovError::UncoverableRow(0)));
    mincov.insert_elem(0, 0).unwrap();
    assert_eq!(mincov.exact().unwrap().cost(), 1);
}

#[test]
fn test_flags_update_config() {
    let mut mincov = MinCov::new();
    mincov.set_partition_flag(false);
    mincov.set_debug_flag(true);
    mincov.set_max_depth(4);
    assert!(!mincov.config().partition);
    assert!(mincov.config().debug);
    assert_eq!(mincov.config().max_depth, 4);
}

#[test]
fn test_print_matrix() {
    let mut out = Vec::new();
    MinCov::new().print_matrix(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "(no matrix)\n");

    let mut out = Vec::new();
    problem(&Instance::triangle()).print_matrix(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("row 0: 0 2"));
    assert!(text.contains("costs: 0=1 1=1 2=1"));
}

#[test]
fn test_missing_config_file() {
    let result = MinCov::from_config_file("/nonexistent/mincov.toml");
    assert!(matches!(result, Err(MinCovError::Config(_))));
}

#[test]
fn test_large_costs() {
    let mut mincov = MinCov::new();
    mincov.set_size(2, 2);
    mincov.insert_elem(0, 0).unwrap();
    mincov.insert_elem(1, 1).unwrap();
    mincov.set_col_cost(0, 3_000_000_000).unwrap();
    assert!(matches!(
        mincov.set_col_cost(1, 3_000_000_000),
        Err(MinCovError::CostOverflow { col: 1, .. })
    ));

    let half = Cost::MAX / 2;
    mincov.set_col_cost(0, half).unwrap();
    mincov.set_col_cost(1, half).unwrap();
    assert_eq!(mincov.exact().unwrap().cost(), 2 * half);
    assert_eq!(mincov.heuristic("greedy").unwrap().cost(), 2 * half);
    assert_eq!(mincov.heuristic("random").unwrap().cost(), 2 * half);
}
