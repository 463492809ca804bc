/// Errors raised while validating a simulation configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `steps` must be at least 1
    InvalidSteps(u64),
    /// `conveyor_len` must be at least 1
    InvalidConveyorLength(usize),
    /// `assembly_time` must be at least 1
    InvalidAssemblyTime(u32),
    /// `workers_per_slot` must be at least 1
    InvalidWorkersPerSlot(usize),
    /// Component weights are negative, non-finite or all zero
    InvalidComponentWeights(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidSteps(v) => write!(f, "Steps must be greater than 0, got {}", v),
            ConfigError::InvalidConveyorLength(v) => {
                write!(f, "Conveyor length must be greater than 0, got {}", v)
            }
            ConfigError::InvalidAssemblyTime(v) => {
                write!(f, "Assembly time must be greater than 0, got {}", v)
            }
            ConfigError::InvalidWorkersPerSlot(v) => {
                write!(f, "Workers per slot must be greater than 0, got {}", v)
            }
            ConfigError::InvalidComponentWeights(msg) => {
                write!(f, "Invalid component weights: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
