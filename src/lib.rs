pub mod core;

// Re-export commonly used types
pub use crate::core::component_source::{ComponentSource, RandomComponentSource, SequenceComponentSource};
pub use crate::core::errors::ConfigError;
pub use crate::core::execution::{ComponentWeights, ConveyorSimulation, SimulationConfig, SimulationObserver, TickSnapshot};
pub use crate::core::report::SimulationResults;
pub use crate::core::types::{Cell, Component};
pub use crate::core::worker::Worker;
