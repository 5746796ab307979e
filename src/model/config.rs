use std::collections::HashMap;

use crate::model::{
    constants::{
        DEFAULT_CARRYOVER, DEFAULT_HOME_ADVANTAGE, DEFAULT_INTERSTATE_ADVANTAGE, DEFAULT_K, DEFAULT_K_DECAY,
        DEFAULT_MEAN_RATING, DEFAULT_WIDTH
    },
    error::ProcessorError,
    structures::target::Target
};

/// Run parameters for the rating engine. Fixed once processing begins;
/// `EloModel::new` rejects a configuration that fails [`EloConfig::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct EloConfig {
    /// Base step size of the update rule
    pub k: f64,
    /// Rating bonus applied to the home side of every match
    pub home_advantage: f64,
    /// Additional bonus when the away side travelled interstate
    pub interstate_advantage: f64,
    /// Logistic scale of the link function; larger values flatten forecasts toward 0.5
    pub width: f64,
    /// Fraction of a rating retained across a season boundary
    pub carryover: f64,
    /// Per-round decay base of the step size; values below 1 shrink updates late in the season
    pub k_decay: f64,
    /// Rating assigned to a team on first sight, and the crunch target
    pub mean_rating: f64,
    /// Per-team overrides for the first-sight rating
    pub initial_ratings: HashMap<String, f64>,
    /// Which result column is treated as the actual outcome
    pub target: Target
}

impl Default for EloConfig {
    fn default() -> Self {
        EloConfig {
            k: DEFAULT_K,
            home_advantage: DEFAULT_HOME_ADVANTAGE,
            interstate_advantage: DEFAULT_INTERSTATE_ADVANTAGE,
            width: DEFAULT_WIDTH,
            carryover: DEFAULT_CARRYOVER,
            k_decay: DEFAULT_K_DECAY,
            mean_rating: DEFAULT_MEAN_RATING,
            initial_ratings: HashMap::new(),
            target: Target::default()
        }
    }
}

impl EloConfig {
    pub fn validate(&self) -> Result<(), ProcessorError> {
        if self.k <= 0.0 {
            return Err(ProcessorError::Configuration(format!(
                "`k` must be positive, got {}",
                self.k
            )));
        }

        if self.width <= 0.0 {
            return Err(ProcessorError::Configuration(format!(
                "`width` must be positive, got {}",
                self.width
            )));
        }

        if !(0.0..=1.0).contains(&self.carryover) {
            return Err(ProcessorError::Configuration(format!(
                "`carryover` must lie in [0, 1], got {}",
                self.carryover
            )));
        }

        if self.k_decay <= 0.0 {
            return Err(ProcessorError::Configuration(format!(
                "`k_decay` must be positive, got {}",
                self.k_decay
            )));
        }

        Ok(())
    }
}
