//! Builder module for constructing solver components from configuration
//!
//! This module provides the wiring between configuration types and
//! the bound and selector implementations.

use mincov_config::{LowerBoundConfig, SelectorType};

use crate::bound::{
    IndependentSetBound, LowerBound, MaxBound, RowMinBound, WeightedIndependentSetBound,
};
use crate::selector::{ColumnSelector, CostSensitiveSelector, SimpleSelector};

/// Builder for constructing lower bounds from configuration.
pub struct BoundBuilder;

impl BoundBuilder {
    /// Builds a lower bound from configuration.
    pub fn build(config: &LowerBoundConfig) -> Box<dyn LowerBound> {
        match config {
            LowerBoundConfig::RowMin => Box::new(RowMinBound::new()),
            LowerBoundConfig::IndependentSet => Box::new(IndependentSetBound::new()),
            LowerBoundConfig::WeightedIndependentSet => {
                Box::new(WeightedIndependentSetBound::new())
            }
            LowerBoundConfig::Max(max_config) => {
                let mut max = MaxBound::new();
                for member in &max_config.bounds {
                    max.add_bound(Self::build(member));
                }
                Box::new(max)
            }
        }
    }
}

/// Builder for constructing column selectors from configuration.
pub struct SelectorBuilder;

impl SelectorBuilder {
    /// Builds a column selector from configuration.
    pub fn build(selector: SelectorType) -> Box<dyn ColumnSelector> {
        match selector {
            SelectorType::Simple => Box::new(SimpleSelector::new()),
            SelectorType::CostSensitive => Box::new(CostSensitiveSelector::new()),
        }
    }
}
