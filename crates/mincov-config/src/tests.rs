//! Tests for solver configuration.

use super::*;

#[test]
fn test_defaults() {
    let config = SolverConfig::default();
    assert_eq!(config.environment_mode, EnvironmentMode::NonReproducible);
    assert!(config.partition);
    assert!(!config.debug);
    assert_eq!(config.max_depth, 0);
    assert_eq!(config.selector, SelectorType::Simple);
    assert_eq!(config.heuristic, HeuristicType::Greedy);
    assert_eq!(config.random_trials, 1000);
    assert_eq!(config.random_seed, None);
    assert!(!config.parallel_trials);
    assert_eq!(
        config.lower_bound.to_string(),
        "max[row_min, independent_set]"
    );
}

#[test]
fn test_empty_toml_matches_default() {
    let config = SolverConfig::from_toml_str("").unwrap();
    assert_eq!(config, SolverConfig::default());
}

#[test]
fn test_toml_parsing() {
    let toml = r#"
        environment_mode = "reproducible"
        random_seed = 42
        partition = false
        debug = true
        max_depth = 3
        selector = "cost_sensitive"
        heuristic = "random"

        [lower_bound]
        type = "max"

        [[lower_bound.bounds]]
        type = "row_min"

        [[lower_bound.bounds]]
        type = "weighted_independent_set"
    "#;

    let config = SolverConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.environment_mode, EnvironmentMode::Reproducible);
    assert_eq!(config.random_seed, Some(42));
    assert!(!config.partition);
    assert!(config.debug);
    assert_eq!(config.max_depth, 3);
    assert_eq!(config.selector, SelectorType::CostSensitive);
    assert_eq!(config.heuristic, HeuristicType::Random);
    assert_eq!(
        config.lower_bound,
        LowerBoundConfig::Max(MaxBoundConfig {
            bounds: vec![
                LowerBoundConfig::RowMin,
                LowerBoundConfig::WeightedIndependentSet
            ],
        })
    );
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        environment_mode: full_assert
        random_trials: 50
        parallel_trials: true
        lower_bound:
          type: independent_set
    "#;

    let config = SolverConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.environment_mode, EnvironmentMode::FullAssert);
    assert_eq!(config.random_trials, 50);
    assert!(config.parallel_trials);
    assert_eq!(config.lower_bound, LowerBoundConfig::IndependentSet);
    assert!(config.partition);
}

#[test]
fn test_unknown_heuristic_in_file_is_rejected() {
    let result = SolverConfig::from_toml_str(r#"heuristic = "annealing""#);
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn test_zero_trials_is_invalid() {
    let result = SolverConfig::from_toml_str("random_trials = 0");
    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[test]
fn test_empty_max_bound_is_invalid() {
    let yaml = r#"
        lower_bound:
          type: max
          bounds: []
    "#;
    let result = SolverConfig::from_yaml_str(yaml);
    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[test]
fn test_missing_file() {
    let result = SolverConfig::load("/nonexistent/mincov.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_builder() {
    let config = SolverConfig::new()
        .with_partition(false)
        .with_debug(true)
        .with_max_depth(4)
        .with_random_seed(123)
        .with_random_trials(10)
        .with_selector(SelectorType::CostSensitive)
        .with_lower_bound(LowerBoundConfig::RowMin);

    assert!(!config.partition);
    assert!(config.debug);
    assert_eq!(config.max_depth, 4);
    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.random_trials, 10);
    assert_eq!(config.selector, SelectorType::CostSensitive);
    assert_eq!(config.lower_bound, LowerBoundConfig::RowMin);
}

#[test]
fn test_effective_seed() {
    assert_eq!(SolverConfig::new().effective_seed(), None);
    assert_eq!(SolverConfig::new().with_random_seed(9).effective_seed(), Some(9));
    let reproducible = SolverConfig::new().with_environment_mode(EnvironmentMode::Reproducible);
    assert_eq!(reproducible.effective_seed(), Some(0));
}

#[test]
fn test_heuristic_from_name() {
    assert_eq!(HeuristicType::from_name("greedy"), Some(HeuristicType::Greedy));
    assert_eq!(HeuristicType::from_name("random"), Some(HeuristicType::Random));
    assert_eq!(HeuristicType::from_name("Greedy"), None);
    assert_eq!(HeuristicType::from_name(""), None);
}

#[test]
fn test_environment_mode_flags() {
    assert!(!EnvironmentMode::Reproducible.is_asserted());
    assert!(EnvironmentMode::FastAssert.is_asserted());
    assert!(!EnvironmentMode::FastAssert.is_fully_asserted());
    assert!(EnvironmentMode::FullAssert.is_fully_asserted());
}
