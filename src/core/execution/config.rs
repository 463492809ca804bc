//! Configuration for conveyor simulation runs
//!
//! The four line parameters (steps, belt length, assembly time, crew size)
//! plus the feed distribution and seed used by the default random source.

use crate::core::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Relative weights for what enters the head of the belt each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentWeights {
    pub a: f64,
    pub b: f64,
    pub empty: f64,
}

impl ComponentWeights {
    pub fn new(a: f64, b: f64, empty: f64) -> Self {
        Self { a, b, empty }
    }

    /// Weights in `[A, B, Empty]` order
    pub fn as_array(&self) -> [f64; 3] {
        [self.a, self.b, self.empty]
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = self.as_array();
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ConfigError::InvalidComponentWeights(format!(
                "weights must be finite and non-negative, got {:?}",
                weights
            )));
        }
        if weights.iter().sum::<f64>() <= 0.0 {
            return Err(ConfigError::InvalidComponentWeights(
                "at least one weight must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ComponentWeights {
    fn default() -> Self {
        Self {
            a: 1.0 / 3.0,
            b: 1.0 / 3.0,
            empty: 1.0 / 3.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of ticks to run
    pub steps: u64,
    /// Number of belt slots
    pub conveyor_len: usize,
    /// Ticks required per assembly
    pub assembly_time: u32,
    /// Workers competing for each slot
    pub workers_per_slot: usize,
    pub component_weights: ComponentWeights,
    /// `None` seeds the random source from OS entropy
    pub random_seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            steps: 100,
            conveyor_len: 3,
            assembly_time: 4,
            workers_per_slot: 2,
            component_weights: ComponentWeights::default(),
            random_seed: Some(42),
        }
    }
}

impl SimulationConfig {
    /// Create a new configuration with default values
    ///
    /// Defaults: 100 steps, 3 slots, assembly time 4, 2 workers per slot,
    /// uniform feed weights and seed 42
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of ticks to run
    ///
    /// # Arguments
    /// * `steps` - Ticks the simulation executes before it is complete
    ///
    /// # Returns
    /// A new configuration with the specified step count
    pub fn with_steps(mut self, steps: u64) -> Self {
        self.steps = steps;
        self
    }

    /// Set the belt length
    ///
    /// # Arguments
    /// * `len` - Number of belt slots, each with its own crew
    ///
    /// # Returns
    /// A new configuration with the specified belt length
    pub fn with_conveyor_len(mut self, len: usize) -> Self {
        self.conveyor_len = len;
        self
    }

    /// Set the assembly duration
    ///
    /// # Arguments
    /// * `ticks` - Ticks a worker spends assembling once it holds A and B
    ///
    /// # Returns
    /// A new configuration with the specified assembly time
    pub fn with_assembly_time(mut self, ticks: u32) -> Self {
        self.assembly_time = ticks;
        self
    }

    /// Set the crew size at every slot
    ///
    /// # Arguments
    /// * `workers` - Workers competing for each belt cell
    ///
    /// # Returns
    /// A new configuration with the specified crew size
    pub fn with_workers_per_slot(mut self, workers: usize) -> Self {
        self.workers_per_slot = workers;
        self
    }

    /// Set the feed distribution
    ///
    /// # Arguments
    /// * `weights` - Relative weights of A, B and empty cells entering the belt
    ///
    /// # Returns
    /// A new configuration with the specified weights
    ///
    /// # Note
    /// Only used by the default random source
    pub fn with_component_weights(mut self, weights: ComponentWeights) -> Self {
        self.component_weights = weights;
        self
    }

    /// Set the seed of the default random source
    ///
    /// # Arguments
    /// * `seed` - Fixed seed, or `None` to seed from OS entropy
    ///
    /// # Returns
    /// A new configuration with the specified seed
    pub fn with_random_seed(mut self, seed: Option<u64>) -> Self {
        self.random_seed = seed;
        self
    }

    /// Validate the full configuration, including the feed weights
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_line()?;
        self.component_weights.validate()
    }

    /// Validate only the four line parameters
    ///
    /// Used when the feed comes from an injected source, which makes
    /// `component_weights` irrelevant.
    pub fn validate_line(&self) -> Result<(), ConfigError> {
        if self.steps == 0 {
            return Err(ConfigError::InvalidSteps(self.steps));
        }
        if self.conveyor_len == 0 {
            return Err(ConfigError::InvalidConveyorLength(self.conveyor_len));
        }
        if self.assembly_time == 0 {
            return Err(ConfigError::InvalidAssemblyTime(self.assembly_time));
        }
        if self.workers_per_slot == 0 {
            return Err(ConfigError::InvalidWorkersPerSlot(self.workers_per_slot));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.steps, 100);
        assert_eq!(config.conveyor_len, 3);
        assert_eq!(config.assembly_time, 4);
        assert_eq!(config.workers_per_slot, 2);
        assert_eq!(config.random_seed, Some(42));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = SimulationConfig::new()
            .with_steps(10)
            .with_conveyor_len(5)
            .with_assembly_time(1)
            .with_workers_per_slot(3)
            .with_random_seed(None);

        assert_eq!(config.steps, 10);
        assert_eq!(config.conveyor_len, 5);
        assert_eq!(config.assembly_time, 1);
        assert_eq!(config.workers_per_slot, 3);
        assert_eq!(config.random_seed, None);
    }

    #[test]
    fn test_validation_rejects_zero_parameters() {
        let base = SimulationConfig::default();
        assert_eq!(
            base.clone().with_steps(0).validate(),
            Err(ConfigError::InvalidSteps(0))
        );
        assert_eq!(
            base.clone().with_conveyor_len(0).validate(),
            Err(ConfigError::InvalidConveyorLength(0))
        );
        assert_eq!(
            base.clone().with_assembly_time(0).validate(),
            Err(ConfigError::InvalidAssemblyTime(0))
        );
        assert_eq!(
            base.with_workers_per_slot(0).validate(),
            Err(ConfigError::InvalidWorkersPerSlot(0))
        );
    }

    #[test]
    fn test_validation_rejects_bad_weights() {
        let zero = SimulationConfig::new().with_component_weights(ComponentWeights::new(0.0, 0.0, 0.0));
        assert!(matches!(zero.validate(), Err(ConfigError::InvalidComponentWeights(_))));

        let negative = SimulationConfig::new().with_component_weights(ComponentWeights::new(1.0, -1.0, 1.0));
        assert!(negative.validate().is_err());

        let nan = SimulationConfig::new().with_component_weights(ComponentWeights::new(f64::NAN, 1.0, 1.0));
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_line_validation_ignores_weights() {
        let config = SimulationConfig::new().with_component_weights(ComponentWeights::new(0.0, 0.0, 0.0));
        assert!(config.validate_line().is_ok());
        assert_eq!(
            config.with_assembly_time(0).validate_line(),
            Err(ConfigError::InvalidAssemblyTime(0))
        );
    }
}
