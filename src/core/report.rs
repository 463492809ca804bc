use crate::core::types::Component;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Final tallies of a completed run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResults {
    /// Ticks actually executed
    pub ticks: u64,
    pub finished_products: u64,
    /// Raw components that fell off the tail of the belt unpicked
    pub unused_components: BTreeMap<Component, u64>,
}

impl SimulationResults {
    pub fn new(ticks: u64, finished_products: u64, unused_components: BTreeMap<Component, u64>) -> Self {
        Self {
            ticks,
            finished_products,
            unused_components,
        }
    }

    pub fn unused(&self, component: Component) -> u64 {
        self.unused_components.get(&component).copied().unwrap_or(0)
    }
}

impl std::fmt::Display for SimulationResults {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Finished Products: {}", self.finished_products)?;
        write!(f, "Unused Components: {{")?;
        for (i, component) in Component::ALL.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", component, self.unused(*component))?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_report_format() {
        let mut unused = BTreeMap::new();
        unused.insert(Component::A, 3);
        let results = SimulationResults::new(100, 12, unused);

        assert_eq!(
            results.to_string(),
            "Finished Products: 12\nUnused Components: {A: 3, B: 0}"
        );
        assert_eq!(results.unused(Component::B), 0);
    }
}
