use super::component::ComponentRecord;
use super::slot::Slot;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Immutable view of a build: one optional component per slot
///
/// Cloning a snapshot only bumps reference counts; catalog records are
/// shared, never copied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildSnapshot {
    slots: [Option<Arc<ComponentRecord>>; Slot::COUNT],
}

impl BuildSnapshot {
    pub fn get(&self, slot: Slot) -> Option<&ComponentRecord> {
        self.slots[slot.index()].as_deref()
    }

    /// Shared handle to the record in `slot`
    pub fn get_shared(&self, slot: Slot) -> Option<&Arc<ComponentRecord>> {
        self.slots[slot.index()].as_ref()
    }

    pub fn is_occupied(&self, slot: Slot) -> bool {
        self.slots[slot.index()].is_some()
    }

    /// Every slot paired with its selection, in slot order
    pub fn iter(&self) -> impl Iterator<Item = (Slot, Option<&ComponentRecord>)> + '_ {
        Slot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }

    /// Occupied slots only, in slot order
    pub fn selected(&self) -> impl Iterator<Item = (Slot, &Arc<ComponentRecord>)> + '_ {
        Slot::ALL
            .into_iter()
            .filter_map(move |slot| self.get_shared(slot).map(|record| (slot, record)))
    }

    pub fn selected_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn slot_count(&self) -> usize {
        Slot::COUNT
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Exact sum of the prices of occupied slots
    pub fn total_price(&self) -> Decimal {
        self.slots
            .iter()
            .flatten()
            .map(|record| record.price())
            .sum()
    }
}

/// Single-writer holder of the current build selection
///
/// Mutation happens only through [`set_slot`](Self::set_slot) and
/// [`clear_slot`](Self::clear_slot); readers get immutable snapshots.
/// Selection is never validated here: an incompatible part can always
/// be selected, compatibility is evaluated separately.
#[derive(Debug, Clone, Default)]
pub struct BuildConfiguration {
    current: BuildSnapshot,
}

impl BuildConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces exactly one slot; `None` clears it
    ///
    /// The same record may be placed in more than one slot.
    pub fn set_slot(&mut self, slot: Slot, component: Option<Arc<ComponentRecord>>) {
        self.current.slots[slot.index()] = component;
    }

    pub fn clear_slot(&mut self, slot: Slot) {
        self.set_slot(slot, None);
    }

    /// Empties every slot
    pub fn reset(&mut self) {
        self.current = BuildSnapshot::default();
    }

    pub fn snapshot(&self) -> BuildSnapshot {
        self.current.clone()
    }

    pub fn get(&self, slot: Slot) -> Option<&ComponentRecord> {
        self.current.get(slot)
    }

    pub fn is_complete(&self) -> bool {
        self.current.is_complete()
    }

    pub fn total_price(&self) -> Decimal {
        self.current.total_price()
    }

    pub fn selected_count(&self) -> usize {
        self.current.selected_count()
    }

    pub fn slot_count(&self) -> usize {
        self.current.slot_count()
    }

    /// Fraction of occupied slots in `[0, 1]`
    pub fn completion_fraction(&self) -> f64 {
        self.selected_count() as f64 / self.slot_count() as f64
    }

    /// Completion as a percentage rounded to the nearest integer, for display
    pub fn completion_percent(&self) -> u8 {
        (self.completion_fraction() * 100.0).round() as u8
    }
}
