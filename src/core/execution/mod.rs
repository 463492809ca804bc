pub mod config;
pub mod simulation_engine;

// Re-export commonly used types
pub use config::{ComponentWeights, SimulationConfig};
pub use simulation_engine::{ConveyorSimulation, SimulationObserver, TickSnapshot};
