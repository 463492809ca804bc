pub mod belt;
pub mod component_source;
pub mod errors;
pub mod execution;
pub mod report;
pub mod types;
pub mod worker;
