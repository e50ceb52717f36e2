//! Configuration system for mincov.
//!
//! Load solver configuration from TOML or YAML to pick bounds, selectors
//! and heuristics without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use mincov_config::{LowerBoundConfig, SelectorType, SolverConfig};
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     partition = false
//!     selector = "cost_sensitive"
//!     random_trials = 200
//!
//!     [lower_bound]
//!     type = "weighted_independent_set"
//! "#).unwrap();
//!
//! assert!(!config.partition);
//! assert_eq!(config.selector, SelectorType::CostSensitive);
//! assert_eq!(config.lower_bound, LowerBoundConfig::WeightedIndependentSet);
//! assert_eq!(config.random_trials, 200);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use mincov_config::SolverConfig;
//!
//! let config = SolverConfig::load("mincov.toml").unwrap_or_default();
//! assert!(config.partition);
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Environment mode affecting reproducibility and assertions.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,

    /// Split the exact search into independent blocks when possible.
    #[serde(default = "default_true")]
    pub partition: bool,

    /// Emit per-depth branching events.
    #[serde(default)]
    pub debug: bool,

    /// Deepest search level for which branching events are emitted,
    /// inclusive. The root is level 0, so the default reports only the
    /// root's decision.
    #[serde(default)]
    pub max_depth: usize,

    /// Lower bound used to prune the exact search.
    #[serde(default)]
    pub lower_bound: LowerBoundConfig,

    /// Branching column selector.
    #[serde(default)]
    pub selector: SelectorType,

    /// Heuristic run when no algorithm is named.
    #[serde(default)]
    pub heuristic: HeuristicType,

    /// Number of randomized trials.
    #[serde(default = "default_random_trials")]
    pub random_trials: usize,

    /// Base seed for randomized trials; trial `t` uses `seed + t`.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Run randomized trials on the rayon pool.
    #[serde(default)]
    pub parallel_trials: bool,
}

fn default_true() -> bool {
    true
}

fn default_random_trials() -> usize {
    1000
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            environment_mode: EnvironmentMode::default(),
            partition: true,
            debug: false,
            max_depth: 0,
            lower_bound: LowerBoundConfig::default(),
            selector: SelectorType::default(),
            heuristic: HeuristicType::default(),
            random_trials: default_random_trials(),
            random_seed: None,
            parallel_trials: false,
        }
    }
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.random_trials == 0 {
            return Err(ConfigError::Invalid(
                "random_trials must be at least 1".to_string(),
            ));
        }
        self.lower_bound.validate()
    }

    /// Enables or disables block partitioning.
    pub fn with_partition(mut self, partition: bool) -> Self {
        self.partition = partition;
        self
    }

    /// Enables or disables per-depth branching events.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Sets the deepest level reported by branching events (inclusive).
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the lower bound.
    pub fn with_lower_bound(mut self, lower_bound: LowerBoundConfig) -> Self {
        self.lower_bound = lower_bound;
        self
    }

    /// Sets the column selector.
    pub fn with_selector(mut self, selector: SelectorType) -> Self {
        self.selector = selector;
        self
    }

    /// Sets the default heuristic.
    pub fn with_heuristic(mut self, heuristic: HeuristicType) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Sets the number of randomized trials.
    pub fn with_random_trials(mut self, trials: usize) -> Self {
        self.random_trials = trials;
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Runs randomized trials in parallel.
    pub fn with_parallel_trials(mut self, parallel: bool) -> Self {
        self.parallel_trials = parallel;
        self
    }

    /// Sets the environment mode.
    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    /// Returns the base seed for randomized trials.
    ///
    /// An explicit seed always wins; reproducible and assert modes fall back
    /// to seed 0, non-reproducible mode to `None` (fresh entropy).
    pub fn effective_seed(&self) -> Option<u64> {
        match (self.random_seed, self.environment_mode) {
            (Some(seed), _) => Some(seed),
            (None, EnvironmentMode::NonReproducible) => None,
            (None, _) => Some(0),
        }
    }
}

/// Environment mode affecting solver behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// Non-reproducible mode with minimal overhead.
    #[default]
    NonReproducible,

    /// Reproducible mode with deterministic behavior.
    Reproducible,

    /// Fast assert mode: every incumbent is verified.
    FastAssert,

    /// Full assert mode: additionally checks matrix counters and the
    /// checkpoint trail at every search node.
    FullAssert,
}

impl EnvironmentMode {
    /// Returns true if incumbents should be verified.
    pub fn is_asserted(&self) -> bool {
        matches!(self, Self::FastAssert | Self::FullAssert)
    }

    /// Returns true if every search node should be checked.
    pub fn is_fully_asserted(&self) -> bool {
        matches!(self, Self::FullAssert)
    }
}

/// Lower bound configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LowerBoundConfig {
    /// Largest cheapest-cover cost over the active rows.
    RowMin,

    /// Independent rows of the conflict graph, min-degree heuristic.
    IndependentSet,

    /// Best of the min-degree and the weight-aware independent sets.
    WeightedIndependentSet,

    /// Maximum over several bounds.
    Max(MaxBoundConfig),
}

impl Default for LowerBoundConfig {
    fn default() -> Self {
        Self::Max(MaxBoundConfig {
            bounds: vec![Self::RowMin, Self::IndependentSet],
        })
    }
}

impl LowerBoundConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::Max(max) if max.bounds.is_empty() => Err(ConfigError::Invalid(
                "max lower bound needs at least one member".to_string(),
            )),
            Self::Max(max) => max.bounds.iter().try_for_each(Self::validate),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for LowerBoundConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowMin => write!(f, "row_min"),
            Self::IndependentSet => write!(f, "independent_set"),
            Self::WeightedIndependentSet => write!(f, "weighted_independent_set"),
            Self::Max(max) => {
                write!(f, "max[")?;
                for (i, bound) in max.bounds.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{bound}")?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Composite bound configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MaxBoundConfig {
    /// Member bounds, evaluated in order.
    #[serde(default)]
    pub bounds: Vec<LowerBoundConfig>,
}

/// Branching column selectors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectorType {
    /// Cheapest column of the most constrained row.
    #[default]
    Simple,

    /// Best coverage per unit cost, rows weighted by scarcity.
    CostSensitive,
}

impl fmt::Display for SelectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple => write!(f, "simple"),
            Self::CostSensitive => write!(f, "cost_sensitive"),
        }
    }
}

/// Approximate solvers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicType {
    /// Repeated selector choice with reductions in between.
    #[default]
    Greedy,

    /// Randomized multi-start, best of all trials.
    Random,
}

impl HeuristicType {
    /// Looks up a heuristic by name. Returns `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "greedy" => Some(Self::Greedy),
            "random" => Some(Self::Random),
            _ => None,
        }
    }
}

impl fmt::Display for HeuristicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Greedy => write!(f, "greedy"),
            Self::Random => write!(f, "random"),
        }
    }
}
