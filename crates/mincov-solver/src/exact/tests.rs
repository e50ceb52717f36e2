//! Tests for the branch-and-bound search.

use mincov_config::{EnvironmentMode, LowerBoundConfig, SelectorType, SolverConfig};
use mincov_test::{brute_force_optimum, random_instance, Instance};

use super::*;
use crate::bound::RowMinBound;
use crate::builder::{BoundBuilder, SelectorBuilder};
use crate::selector::SimpleSelector;
use crate::test_util::matrix_from;

fn solve_with(config: &SolverConfig, matrix: &CoverMatrix) -> ExactOutcome {
    let bound = BoundBuilder::build(&config.lower_bound);
    let selector = SelectorBuilder::build(config.selector);
    BranchAndBound::new(config, bound.as_ref(), selector.as_ref()).solve(matrix)
}

fn solve(inst: &Instance) -> ExactOutcome {
    solve_with(&SolverConfig::default(), &matrix_from(inst))
}

#[test]
fn test_triangle_costs_two() {
    let inst = Instance::triangle();
    let solution = solve(&inst).solution.unwrap();
    assert_eq!(solution.cost(), 2);
    assert_eq!(solution.len(), 2);
    assert!(inst.covers(solution.columns()));
}

#[test]
fn test_forced_column_is_included() {
    let inst = Instance::forced_column();
    let solution = solve(&inst).solution.unwrap();
    assert!(solution.contains(0));
    assert_eq!(solution.cost(), 7);
}

#[test]
fn test_empty_instance() {
    let outcome = solve(&Instance::new(0, 2));
    let solution = outcome.solution.unwrap();
    assert!(solution.is_empty());
    assert_eq!(solution.cost(), 0);
}

#[test]
fn test_uncoverable_row_has_no_solution() {
    let mut inst = Instance::triangle();
    inst.row_size += 1;
    inst.rows.push(Vec::new());
    let outcome = solve(&inst);
    assert!(outcome.solution.is_none());
    assert!(outcome.stats.infeasible > 0);
}

#[test]
fn test_input_matrix_untouched() {
    let matrix = matrix_from(&random_instance(4, 10, 8, 0.3, 4));
    let before = format!("{matrix}");
    solve_with(&SolverConfig::default(), &matrix);
    assert_eq!(format!("{matrix}"), before);
}

#[test]
fn test_disjoint_instances_partition() {
    let inst = Instance::triangle().concat(&Instance::forced_column());
    let outcome = solve(&inst);
    assert_eq!(outcome.solution.unwrap().cost(), 9);
    assert!(outcome.stats.partitions > 0);

    let off = SolverConfig::default().with_partition(false);
    let outcome = solve_with(&off, &matrix_from(&inst));
    assert_eq!(outcome.solution.unwrap().cost(), 9);
    assert_eq!(outcome.stats.partitions, 0);
}

#[test]
fn test_matches_brute_force() {
    for seed in 0..60 {
        let inst = random_instance(seed, 12, 12, 0.2, 7);
        let expected = brute_force_optimum(&inst).unwrap();
        let solution = solve(&inst).solution.unwrap();
        assert_eq!(solution.cost(), expected, "seed {seed}");
        assert!(inst.covers(solution.columns()), "seed {seed}");
        assert_eq!(inst.cost(solution.columns()), solution.cost());
    }
}

#[test]
fn test_every_strategy_is_optimal() {
    let bounds = [
        LowerBoundConfig::RowMin,
        LowerBoundConfig::IndependentSet,
        LowerBoundConfig::WeightedIndependentSet,
        LowerBoundConfig::default(),
    ];
    let selectors = [SelectorType::Simple, SelectorType::CostSensitive];
    for seed in 0..15 {
        let inst = random_instance(500 + seed, 10, 11, 0.25, 5);
        let expected = brute_force_optimum(&inst).unwrap();
        let matrix = matrix_from(&inst);
        for bound in &bounds {
            for selector in selectors {
                for partition in [true, false] {
                    let config = SolverConfig::default()
                        .with_lower_bound(bound.clone())
                        .with_selector(selector)
                        .with_partition(partition);
                    let cost = solve_with(&config, &matrix).solution.unwrap().cost();
                    assert_eq!(
                        cost, expected,
                        "seed {seed} bound {bound} selector {selector} partition {partition}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_partitioned_blocks_sum_to_optimum() {
    for seed in 0..20 {
        let left = random_instance(2 * seed, 6, 6, 0.3, 5);
        let right = random_instance(2 * seed + 1, 6, 6, 0.3, 5);
        let whole = left.concat(&right);
        let expected = brute_force_optimum(&left).unwrap() + brute_force_optimum(&right).unwrap();
        let outcome = solve(&whole);
        assert_eq!(outcome.solution.unwrap().cost(), expected, "seed {seed}");
    }
}

#[test]
fn test_assert_modes_accept_correct_search() {
    let config = SolverConfig::default().with_environment_mode(EnvironmentMode::FullAssert);
    for seed in 0..10 {
        let inst = random_instance(seed, 10, 9, 0.3, 4);
        let outcome = solve_with(&config, &matrix_from(&inst));
        assert_eq!(
            outcome.solution.unwrap().cost(),
            brute_force_optimum(&inst).unwrap()
        );
    }
}

#[test]
fn test_restricted_matrix_is_solved_on_its_rows() {
    let inst = Instance::triangle().concat(&Instance::triangle());
    let matrix = matrix_from(&inst);
    let sub = matrix.restricted(&[3, 4, 5], &[3, 4, 5]);
    let solution = solve_with(&SolverConfig::default(), &sub).solution.unwrap();
    assert_eq!(solution.cost(), 2);
    assert!(solution.columns().iter().all(|&c| (3..6).contains(&c)));
}

#[test]
fn test_stats_are_filled() {
    let outcome = solve(&random_instance(77, 14, 12, 0.2, 6));
    let stats = &outcome.stats;
    assert!(stats.nodes >= 1);
    assert!(stats.improvements >= 1);
    assert!(stats.nodes >= stats.pruned);
}

#[test]
fn test_debug_flag_does_not_change_result() {
    let inst = random_instance(8, 12, 10, 0.25, 5);
    let quiet = solve(&inst).solution.unwrap().cost();
    let config = SolverConfig::default().with_debug(true).with_max_depth(3);
    let loud = solve_with(&config, &matrix_from(&inst)).solution.unwrap().cost();
    assert_eq!(quiet, loud);
}

/// Cheap unit triangle next to a triangle whose columns cost 5.
fn cheap_and_dear() -> CoverMatrix {
    let dear = Instance::from_columns(3, vec![5, 5, 5], &[&[0, 1], &[1, 2], &[0, 2]]);
    matrix_from(&Instance::triangle().concat(&dear))
}

#[test]
fn test_block_over_limit_reports_nothing() {
    let matrix = cheap_and_dear();
    let config = SolverConfig::default();
    let bound = RowMinBound::new();
    let selector = SimpleSelector::new();
    let solver = BranchAndBound::new(&config, &bound, &selector);
    let block = Block {
        rows: (0..6).collect(),
        cols: (0..6).collect(),
    };

    // The cheap half fits under 8 on its own, the whole block costs 12.
    let mut outer = Search::new(solver, &matrix, None, 0);
    assert_eq!(outer.solve_block(&block, Some(8), 0), None);

    let mut outer = Search::new(solver, &matrix, None, 0);
    let (columns, cost) = outer.solve_block(&block, Some(13), 0).unwrap();
    assert_eq!(cost, 12);
    assert_eq!(columns.len(), 4);
    assert!(matrix.verify(&columns));
}

#[test]
fn test_nested_blocks_solve_to_optimum() {
    let config = SolverConfig::default().with_lower_bound(LowerBoundConfig::RowMin);
    let outcome = solve_with(&config, &cheap_and_dear());
    assert_eq!(outcome.solution.unwrap().cost(), 12);
    assert!(outcome.stats.partitions >= 1);
}

#[test]
fn test_max_depth_is_inclusive() {
    let matrix = cheap_and_dear();
    let bound = RowMinBound::new();
    let selector = SimpleSelector::new();

    let config = SolverConfig::default().with_debug(true);
    let search = Search::new(BranchAndBound::new(&config, &bound, &selector), &matrix, None, 0);
    assert!(search.debug_enabled(0));
    assert!(!search.debug_enabled(1));

    let config = SolverConfig::default().with_debug(true).with_max_depth(2);
    let nested = Search::new(BranchAndBound::new(&config, &bound, &selector), &matrix, None, 1);
    assert!(nested.debug_enabled(1));
    assert!(!nested.debug_enabled(2));

    let quiet = SolverConfig::default().with_max_depth(5);
    let search = Search::new(BranchAndBound::new(&quiet, &bound, &selector), &matrix, None, 0);
    assert!(!search.debug_enabled(0));
}
