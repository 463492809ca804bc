use serde::{Deserialize, Serialize};

/// Raw component that can ride the belt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Component {
    A,
    B,
}

impl Component {
    /// All raw component kinds, in reporting order
    pub const ALL: [Component; 2] = [Component::A, Component::B];
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Component::A => write!(f, "A"),
            Component::B => write!(f, "B"),
        }
    }
}

/// Contents of a single belt cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Component(Component),
    /// Finished product ("C")
    Product,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The raw component in this cell, if any
    pub fn component(&self) -> Option<Component> {
        match self {
            Cell::Component(component) => Some(*component),
            _ => None,
        }
    }
}

impl From<Component> for Cell {
    fn from(component: Component) -> Self {
        Cell::Component(component)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => write!(f, "-"),
            Cell::Component(component) => write!(f, "{}", component),
            Cell::Product => write!(f, "{}", recipe::PRODUCT_SYMBOL),
        }
    }
}

/// The fixed recipe: one product needs exactly one A and one B.
pub mod recipe {
    use super::Component;

    /// Symbol written to the belt for a finished product
    pub const PRODUCT_SYMBOL: char = 'C';

    /// Components consumed per product, with quantities
    pub const INGREDIENTS: [(Component, u32); 2] = [(Component::A, 1), (Component::B, 1)];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_component_extraction() {
        assert_eq!(Cell::from(Component::A).component(), Some(Component::A));
        assert_eq!(Cell::Product.component(), None);
        assert_eq!(Cell::Empty.component(), None);
        assert!(Cell::default().is_empty());
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::Component(Component::B).to_string(), "B");
        assert_eq!(Cell::Product.to_string(), recipe::PRODUCT_SYMBOL.to_string());
        assert_eq!(Cell::Empty.to_string(), "-");
    }

    #[test]
    fn test_recipe_uses_one_of_each() {
        for component in Component::ALL {
            let quantity = recipe::INGREDIENTS
                .iter()
                .find(|(c, _)| *c == component)
                .map(|(_, q)| *q);
            assert_eq!(quantity, Some(1));
        }
    }
}
