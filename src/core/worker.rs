//! Per-worker state machine: hold components, assemble, place.

use crate::core::types::{recipe, Component};

/// A single worker stationed at a belt slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Worker {
    holds_a: bool,
    holds_b: bool,
    /// Ticks left before the in-progress assembly completes
    assembly_remaining: u32,
    /// Completed product that could not be placed because the cell was occupied
    holding_finished_product: bool,
    /// Only true while this worker is committing a product to the belt
    is_placing: bool,
}

impl Worker {
    /// Create an idle worker with empty hands
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a component. Fails if this worker already holds one of that kind.
    pub fn pick(&mut self, component: Component) -> bool {
        let hand = match component {
            Component::A => &mut self.holds_a,
            Component::B => &mut self.holds_b,
        };
        if *hand {
            return false;
        }
        *hand = true;
        true
    }

    /// Start assembling if every ingredient is held.
    ///
    /// Calling this again restarts the countdown at `duration`, so callers
    /// should only invoke it right after the last ingredient is picked.
    pub fn begin_assembly(&mut self, duration: u32) {
        if self.has_ingredients() {
            self.assembly_remaining = duration;
        }
    }

    /// Count the assembly down by one tick, saturating at zero
    pub fn advance_assembly(&mut self) {
        if self.assembly_remaining > 0 {
            self.assembly_remaining -= 1;
        }
    }

    pub fn is_ready_to_place(&self) -> bool {
        self.assembly_remaining == 0 && self.has_ingredients()
    }

    /// Clear hands and placement flags after a product leaves this worker.
    /// `assembly_remaining` is left untouched; it is already zero here.
    pub fn reset(&mut self) {
        self.holds_a = false;
        self.holds_b = false;
        self.holding_finished_product = false;
        self.is_placing = false;
    }

    pub fn holds(&self, component: Component) -> bool {
        match component {
            Component::A => self.holds_a,
            Component::B => self.holds_b,
        }
    }

    pub fn holds_a(&self) -> bool {
        self.holds_a
    }

    pub fn holds_b(&self) -> bool {
        self.holds_b
    }

    pub fn assembly_remaining(&self) -> u32 {
        self.assembly_remaining
    }

    pub fn holding_finished_product(&self) -> bool {
        self.holding_finished_product
    }

    pub fn is_placing(&self) -> bool {
        self.is_placing
    }

    pub fn is_assembling(&self) -> bool {
        self.assembly_remaining > 0
    }

    fn has_ingredients(&self) -> bool {
        recipe::INGREDIENTS
            .iter()
            .all(|(component, _)| self.holds(*component))
    }

    pub(crate) fn mark_holding_finished_product(&mut self) {
        self.holding_finished_product = true;
    }

    pub(crate) fn set_placing(&mut self, placing: bool) {
        self.is_placing = placing;
    }
}
