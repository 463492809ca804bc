use crate::core::types::Cell;
use std::collections::VecDeque;

/// Fixed-length conveyor. Index 0 is the head where new cells enter;
/// the highest index is the tail where cells fall off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Belt {
    cells: VecDeque<Cell>,
}

impl Belt {
    /// Create a belt of `len` empty cells
    pub fn new(len: usize) -> Self {
        Self {
            cells: std::iter::repeat(Cell::Empty).take(len).collect(),
        }
    }

    /// Move the belt one cell: drop the tail, insert `incoming` at the head.
    /// Returns the cell that fell off.
    pub fn advance(&mut self, incoming: Cell) -> Cell {
        let removed = self.cells.pop_back().unwrap_or_default();
        self.cells.push_front(incoming);
        removed
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Contents at `index`; out-of-range positions read as empty
    pub fn get(&self, index: usize) -> Cell {
        self.cells.get(index).copied().unwrap_or_default()
    }

    pub fn set(&mut self, index: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(index) {
            *slot = cell;
        }
    }

    /// Remove and return the contents at `index`, leaving it empty
    pub fn take(&mut self, index: usize) -> Cell {
        self.cells
            .get_mut(index)
            .map(std::mem::take)
            .unwrap_or_default()
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}

impl std::fmt::Display for Belt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", cell)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Component;

    #[test]
    fn test_advance_rotates_without_resizing() {
        let mut belt = Belt::new(3);
        assert_eq!(belt.advance(Cell::Component(Component::A)), Cell::Empty);
        assert_eq!(belt.advance(Cell::Component(Component::B)), Cell::Empty);
        assert_eq!(belt.advance(Cell::Product), Cell::Empty);
        assert_eq!(belt.len(), 3);
        assert_eq!(belt.to_string(), "[C B A]");

        assert_eq!(belt.advance(Cell::Empty), Cell::Component(Component::A));
        assert_eq!(belt.len(), 3);
    }

    #[test]
    fn test_take_clears_cell() {
        let mut belt = Belt::new(2);
        belt.set(1, Cell::Component(Component::B));
        assert_eq!(belt.take(1), Cell::Component(Component::B));
        assert!(belt.get(1).is_empty());
        assert_eq!(belt.take(5), Cell::Empty);
    }
}
