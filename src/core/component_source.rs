use crate::core::errors::ConfigError;
use crate::core::execution::config::ComponentWeights;
use crate::core::types::{Cell, Component};
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Supplies the cell that enters the head of the belt on each tick.
pub trait ComponentSource {
    fn sample(&mut self) -> Cell;
}

const FEED: [Cell; 3] = [
    Cell::Component(Component::A),
    Cell::Component(Component::B),
    Cell::Empty,
];

/// Weighted random feed over A, B and empty, backed by a seedable RNG
pub struct RandomComponentSource {
    rng: StdRng,
    distribution: WeightedIndex<f64>,
}

impl RandomComponentSource {
    /// Create a source with the given weights. `None` seeds from OS entropy.
    pub fn new(weights: ComponentWeights, seed: Option<u64>) -> Result<Self, ConfigError> {
        weights.validate()?;
        let distribution = WeightedIndex::new(weights.as_array())
            .map_err(|e| ConfigError::InvalidComponentWeights(e.to_string()))?;
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { rng, distribution })
    }
}

impl ComponentSource for RandomComponentSource {
    fn sample(&mut self) -> Cell {
        FEED[self.distribution.sample(&mut self.rng)]
    }
}

/// Deterministic feed that cycles through a fixed list of cells
#[derive(Debug, Clone)]
pub struct SequenceComponentSource {
    sequence: Vec<Cell>,
    position: usize,
}

impl SequenceComponentSource {
    /// An empty sequence feeds empty cells forever
    pub fn new(sequence: Vec<Cell>) -> Self {
        Self {
            sequence,
            position: 0,
        }
    }

    /// Feed the same cell on every tick
    pub fn constant(cell: Cell) -> Self {
        Self::new(vec![cell])
    }
}

impl ComponentSource for SequenceComponentSource {
    fn sample(&mut self) -> Cell {
        if self.sequence.is_empty() {
            return Cell::Empty;
        }
        let cell = self.sequence[self.position];
        self.position = (self.position + 1) % self.sequence.len();
        cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_source_cycles() {
        let mut source = SequenceComponentSource::new(vec![
            Cell::Component(Component::A),
            Cell::Component(Component::B),
        ]);
        let fed: Vec<Cell> = (0..4).map(|_| source.sample()).collect();
        assert_eq!(
            fed,
            vec![
                Cell::Component(Component::A),
                Cell::Component(Component::B),
                Cell::Component(Component::A),
                Cell::Component(Component::B),
            ]
        );
    }

    #[test]
    fn test_empty_sequence_feeds_empty() {
        let mut source = SequenceComponentSource::new(Vec::new());
        assert_eq!(source.sample(), Cell::Empty);
    }

    #[test]
    fn test_same_seed_same_feed() {
        let weights = ComponentWeights::default();
        let mut first = RandomComponentSource::new(weights, Some(7)).unwrap();
        let mut second = RandomComponentSource::new(weights, Some(7)).unwrap();
        for _ in 0..50 {
            assert_eq!(first.sample(), second.sample());
        }
    }

    #[test]
    fn test_single_weight_always_wins() {
        let mut source =
            RandomComponentSource::new(ComponentWeights::new(0.0, 1.0, 0.0), Some(1)).unwrap();
        for _ in 0..20 {
            assert_eq!(source.sample(), Cell::Component(Component::B));
        }
    }

    #[test]
    fn test_default_weights_produce_every_kind() {
        let mut source = RandomComponentSource::new(ComponentWeights::default(), Some(42)).unwrap();
        let fed: Vec<Cell> = (0..300).map(|_| source.sample()).collect();
        for kind in FEED {
            assert!(fed.contains(&kind), "{} never fed", kind);
        }
    }

    #[test]
    fn test_invalid_weights_rejected() {
        assert!(RandomComponentSource::new(ComponentWeights::new(0.0, 0.0, 0.0), None).is_err());
    }
}
