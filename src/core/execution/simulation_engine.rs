use crate::core::belt::Belt;
use crate::core::component_source::{ComponentSource, RandomComponentSource};
use crate::core::errors::ConfigError;
use crate::core::execution::config::SimulationConfig;
use crate::core::report::SimulationResults;
use crate::core::types::{Cell, Component};
use crate::core::worker::Worker;
use log::{debug, info, trace};
use std::collections::BTreeMap;

/// State of the line after a tick has fully resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickSnapshot {
    pub tick: u64,
    pub belt_len: usize,
    pub finished_products: u64,
    pub unused_components: BTreeMap<Component, u64>,
    /// Components removed from each slot's cell during this tick
    pub picks_per_slot: Vec<u32>,
    /// Products written to each slot's cell during this tick
    pub placements_per_slot: Vec<u32>,
}

/// Observer trait for simulation progress
pub trait SimulationObserver {
    /// Called after every tick, once placement has resolved for all slots
    fn on_tick_complete(&mut self, snapshot: &TickSnapshot);

    /// Called once when the run has been finalized
    fn on_run_complete(&mut self, _results: &SimulationResults) {}
}

/// Discrete-time conveyor line: one belt, a crew of workers per slot.
///
/// Each tick runs in a fixed order: the belt advances, every slot's workers
/// pick or keep assembling, then every slot resolves at most one placement.
pub struct ConveyorSimulation {
    config: SimulationConfig,
    belt: Belt,
    /// Workers per slot, in their fixed declared order
    slots: Vec<Vec<Worker>>,
    source: Box<dyn ComponentSource>,
    current_tick: u64,
    finished_products: u64,
    unused_components: BTreeMap<Component, u64>,
    finalized: bool,
    tick_picks: Vec<u32>,
    tick_placements: Vec<u32>,
    observers: Vec<Box<dyn SimulationObserver>>,
}

impl ConveyorSimulation {
    /// Create a simulation fed by a weighted random source built from `config`
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let source = RandomComponentSource::new(config.component_weights, config.random_seed)?;
        Self::with_source(config, Box::new(source))
    }

    /// Create a simulation fed by the given source
    pub fn with_source(
        config: SimulationConfig,
        source: Box<dyn ComponentSource>,
    ) -> Result<Self, ConfigError> {
        config.validate_line()?;
        let slots = (0..config.conveyor_len)
            .map(|_| vec![Worker::new(); config.workers_per_slot])
            .collect();
        let unused_components = Component::ALL.iter().map(|c| (*c, 0)).collect();

        Ok(Self {
            belt: Belt::new(config.conveyor_len),
            slots,
            source,
            current_tick: 0,
            finished_products: 0,
            unused_components,
            finalized: false,
            tick_picks: vec![0; config.conveyor_len],
            tick_placements: vec![0; config.conveyor_len],
            observers: Vec::new(),
            config,
        })
    }

    pub fn add_observer(&mut self, observer: Box<dyn SimulationObserver>) {
        self.observers.push(observer);
    }

    /// Run every remaining tick, finalize, and return the tallies
    pub fn run(&mut self) -> SimulationResults {
        info!(
            "Starting conveyor simulation: steps={}, conveyor_len={}, assembly_time={}, workers_per_slot={}",
            self.config.steps,
            self.config.conveyor_len,
            self.config.assembly_time,
            self.config.workers_per_slot
        );

        while !self.is_complete() {
            self.step();
        }
        self.finalize();

        let results = self.results();
        info!(
            "Simulation finished after {} ticks: {} products, unused A={}, unused B={}",
            results.ticks,
            results.finished_products,
            results.unused(Component::A),
            results.unused(Component::B)
        );
        for observer in &mut self.observers {
            observer.on_run_complete(&results);
        }
        results
    }

    /// Execute one tick. Returns true if ticks remain afterwards.
    /// Does nothing once `steps` ticks have run.
    pub fn step(&mut self) -> bool {
        if self.finalized || self.is_complete() {
            return false;
        }
        self.current_tick += 1;
        self.tick_picks.iter_mut().for_each(|n| *n = 0);
        self.tick_placements.iter_mut().for_each(|n| *n = 0);

        self.advance_belt();
        for slot_index in 0..self.slots.len() {
            self.process_slot_workers(slot_index);
        }
        for slot_index in 0..self.slots.len() {
            self.process_slot_placement(slot_index);
        }

        debug!(
            "=== Tick {} === belt {} products {}",
            self.current_tick, self.belt, self.finished_products
        );

        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer.on_tick_complete(&snapshot);
        }

        !self.is_complete()
    }

    /// Move the belt one cell, counting any raw component that falls off the tail.
    /// Products falling off are not counted again.
    pub fn advance_belt(&mut self) {
        let incoming = self.source.sample();
        let removed = self.belt.advance(incoming);
        if let Some(component) = removed.component() {
            *self.unused_components.entry(component).or_insert(0) += 1;
            trace!("Tick {}: unused {} fell off the belt", self.current_tick, component);
        }
    }

    /// Let the workers of one slot keep assembling or pick from their cell.
    ///
    /// Workers act in ascending order of remaining assembly time, ties broken
    /// by declared position. The first worker able to pick takes the component
    /// and the cell is cleared, so at most one pick happens per slot.
    pub fn process_slot_workers(&mut self, slot_index: usize) {
        let assembly_time = self.config.assembly_time;
        let Some(workers) = self.slots.get_mut(slot_index) else {
            return;
        };

        let mut order: Vec<usize> = (0..workers.len()).collect();
        order.sort_by_key(|&i| workers[i].assembly_remaining());

        for i in order {
            if workers[i].is_assembling() {
                workers[i].advance_assembly();
                continue;
            }
            if workers[i].is_ready_to_place() {
                continue;
            }
            let other_placing = workers
                .iter()
                .enumerate()
                .any(|(j, w)| j != i && w.is_placing());
            if other_placing {
                continue;
            }

            let Some(component) = self.belt.get(slot_index).component() else {
                continue;
            };
            if workers[i].pick(component) {
                self.belt.take(slot_index);
                self.tick_picks[slot_index] += 1;
                trace!(
                    "Tick {}: worker {}/{} picked {}",
                    self.current_tick,
                    slot_index,
                    i,
                    component
                );
                workers[i].begin_assembly(assembly_time);
            }
        }
    }

    /// Place at most one finished product from this slot onto its cell.
    ///
    /// Only the first ready worker in declared order is considered. If the cell
    /// is occupied that worker keeps the product and retries on later ticks.
    pub fn process_slot_placement(&mut self, slot_index: usize) {
        let Some(workers) = self.slots.get_mut(slot_index) else {
            return;
        };
        let Some((i, worker)) = workers
            .iter_mut()
            .enumerate()
            .find(|(_, w)| w.is_ready_to_place())
        else {
            return;
        };

        if self.belt.get(slot_index).is_empty() {
            worker.set_placing(true);
            self.belt.set(slot_index, Cell::Product);
            self.finished_products += 1;
            worker.reset();
            worker.set_placing(false);
            self.tick_placements[slot_index] += 1;
            trace!(
                "Tick {}: worker {}/{} placed a product",
                self.current_tick,
                slot_index,
                i
            );
        } else {
            if !worker.holding_finished_product() {
                debug!(
                    "Tick {}: worker {}/{} blocked by {} in cell, holding product",
                    self.current_tick,
                    slot_index,
                    i,
                    self.belt.get(slot_index)
                );
            }
            worker.mark_holding_finished_product();
        }
    }

    /// Count products still held by workers.
    ///
    /// Does nothing until all `steps` ticks have run, and only the first
    /// call after that has any effect.
    pub fn finalize(&mut self) {
        if self.finalized || !self.is_complete() {
            return;
        }
        let held = self
            .slots
            .iter()
            .flatten()
            .filter(|w| w.holding_finished_product())
            .count() as u64;
        self.finished_products += held;
        self.finalized = true;
        debug!("Finalized with {} products still held by workers", held);
    }

    pub fn results(&self) -> SimulationResults {
        SimulationResults::new(
            self.current_tick,
            self.finished_products,
            self.unused_components.clone(),
        )
    }

    fn snapshot(&self) -> TickSnapshot {
        TickSnapshot {
            tick: self.current_tick,
            belt_len: self.belt.len(),
            finished_products: self.finished_products,
            unused_components: self.unused_components.clone(),
            picks_per_slot: self.tick_picks.clone(),
            placements_per_slot: self.tick_placements.clone(),
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn current_tick(&self) -> u64 {
        self.current_tick
    }

    pub fn is_complete(&self) -> bool {
        self.current_tick >= self.config.steps
    }

    pub fn belt(&self) -> &Belt {
        &self.belt
    }

    /// Workers of one slot in declared order; empty for an unknown slot
    pub fn slot_workers(&self, slot_index: usize) -> &[Worker] {
        self.slots.get(slot_index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn finished_products(&self) -> u64 {
        self.finished_products
    }

    pub fn unused_components(&self) -> &BTreeMap<Component, u64> {
        &self.unused_components
    }

    pub(crate) fn belt_mut(&mut self) -> &mut Belt {
        &mut self.belt
    }

    pub(crate) fn slot_workers_mut(&mut self, slot_index: usize) -> &mut [Worker] {
        self.slots
            .get_mut(slot_index)
            .map(Vec::as_mut_slice)
            .unwrap_or(&mut [])
    }
}
