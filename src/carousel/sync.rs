use std::time::Instant;

use super::ScrollableList;
use super::debouncer::SettleDebouncer;
use crate::config::{Config, StalePolicy};
use crate::map::MapSurface;
use crate::property::{Coordinate, Property, PropertyId, position_of};
use crate::selection::{SelectionChange, SelectionState};

/// One-shot marker that a list move was commanded rather than scrolled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuppressionFlag {
    armed: bool,
}

impl SuppressionFlag {
    pub fn arm(&mut self) {
        self.armed = true;
    }

    pub fn clear(&mut self) {
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Returns whether the flag was armed, leaving it cleared either way
    pub fn consume(&mut self) -> bool {
        std::mem::take(&mut self.armed)
    }
}

/// Keeps the carousel position and the map selection consistent
///
/// Owns the selection, the suppression flag and the settle countdown for
/// one carousel instance. The map and the list are passed in per call so
/// the controller never outlives or aliases them.
#[derive(Debug, Clone)]
pub struct SelectionSync {
    selection: SelectionState,
    suppression: SuppressionFlag,
    debouncer: SettleDebouncer,
    fly_to_zoom: f64,
    stale_policy: StalePolicy,
}

impl SelectionSync {
    pub fn new(settle_delay_ms: u64, fly_to_zoom: f64, stale_policy: StalePolicy) -> Self {
        Self {
            selection: SelectionState::new(),
            suppression: SuppressionFlag::default(),
            debouncer: SettleDebouncer::new(settle_delay_ms),
            fly_to_zoom,
            stale_policy,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.carousel.settle_delay_ms,
            config.map.fly_to_zoom,
            config.selection.stale,
        )
    }

    pub fn selected(&self) -> Option<PropertyId> {
        self.selection.get()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn is_suppressing(&self) -> bool {
        self.suppression.is_armed()
    }

    pub fn has_pending_settle(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Set the selection and notify both observers in the same call: the
    /// map highlights (and recenters on an effective change), the list is
    /// repositioned.
    pub fn set_selection(
        &mut self,
        id: Option<PropertyId>,
        properties: &[Property],
        map: &mut impl MapSurface,
        list: &mut impl ScrollableList,
    ) -> SelectionChange {
        let change = self.selection.set(id);
        log::debug!(
            "Selection {:?} -> {:?} (revision {})",
            change.previous,
            change.current,
            change.revision
        );

        notify_map(&change, properties, map);
        self.on_selection_changed(change.current, properties, list);
        change
    }

    /// Drive the list to the selected property's index.
    ///
    /// Returns the index a scroll was commanded to, or None when the
    /// selection has no position or the list is already there.
    pub fn on_selection_changed(
        &mut self,
        selected: Option<PropertyId>,
        properties: &[Property],
        list: &mut impl ScrollableList,
    ) -> Option<usize> {
        let current = list.active_index();
        match position_of(selected, properties) {
            Some(target) if target != current => {
                self.suppression.arm();
                log::debug!("Commanding list scroll {} -> {}", current, target);
                list.scroll_to(target);
                Some(target)
            }
            _ => {
                self.suppression.clear();
                None
            }
        }
    }

    /// Feed one list position-change notification.
    ///
    /// The first notification after a commanded scroll is swallowed. Any
    /// other restarts the settle countdown. Returns whether the notification
    /// was treated as a user scroll.
    pub fn on_scroll_position_changed(&mut self, new_index: usize, now: Instant) -> bool {
        if self.suppression.consume() {
            log::debug!("Swallowed commanded position change to {}", new_index);
            return false;
        }

        if self.debouncer.restart(new_index, now) {
            log::debug!("Settle countdown restarted at index {}", new_index);
        }
        true
    }

    /// Id of the card the user settled on, once the countdown elapsed
    pub fn poll_settled(&mut self, properties: &[Property], now: Instant) -> Option<PropertyId> {
        let index = self.debouncer.poll(now)?;
        let id = properties.get(index).map(|p| p.id);
        log::debug!("Settled on index {} ({:?})", index, id);
        id
    }

    /// Advance the countdown and apply a settle event to the selection
    pub fn tick(
        &mut self,
        properties: &[Property],
        map: &mut impl MapSurface,
        list: &mut impl ScrollableList,
        now: Instant,
    ) -> Option<SelectionChange> {
        let id = self.poll_settled(properties, now)?;
        Some(self.set_selection(Some(id), properties, map, list))
    }

    /// Card or marker click: select immediately and fly the map there.
    ///
    /// A pending settle countdown is superseded by the click. Returns the
    /// coordinate the map was centred on, if any.
    pub fn click(
        &mut self,
        id: PropertyId,
        properties: &[Property],
        map: &mut impl MapSurface,
        list: &mut impl ScrollableList,
    ) -> Option<Coordinate> {
        if self.debouncer.cancel() {
            log::debug!("Click on {} superseded a pending settle", id);
        }

        self.set_selection(Some(id), properties, map, list);

        let coordinate = coordinate_of(id, properties)?;
        if !map.is_ready() {
            return None;
        }
        map.center_on(coordinate, self.fly_to_zoom);
        Some(coordinate)
    }

    /// Adopt a new property sequence from the search collaborator.
    ///
    /// The list is resized, the pending countdown (which refers to an index
    /// in the old sequence) is cancelled, and the selection is re-resolved
    /// against the new sequence. Returns the commanded scroll index, if any.
    pub fn replace_properties(
        &mut self,
        properties: &[Property],
        map: &mut impl MapSurface,
        list: &mut impl ScrollableList,
    ) -> Option<usize> {
        self.debouncer.cancel();
        self.suppression.clear();
        list.set_item_count(properties.len());

        let selected = self.selection.get();
        if selected.is_some() && position_of(selected, properties).is_none() {
            match self.stale_policy {
                StalePolicy::Keep => {
                    log::debug!("Selection {:?} absent from new results, kept", selected);
                }
                StalePolicy::Clear => {
                    log::debug!("Selection {:?} absent from new results, cleared", selected);
                    self.set_selection(None, properties, map, list);
                    return None;
                }
            }
        }

        if map.is_ready() {
            map.select_marker(selected);
        }
        self.on_selection_changed(selected, properties, list)
    }

    /// Session teardown: nothing may fire after this
    pub fn teardown(&mut self) {
        if self.debouncer.cancel() {
            log::debug!("Cancelled pending settle on teardown");
        }
        self.suppression.clear();
    }
}

fn coordinate_of(id: PropertyId, properties: &[Property]) -> Option<Coordinate> {
    properties.iter().find(|p| p.id == id)?.location
}

fn notify_map(change: &SelectionChange, properties: &[Property], map: &mut impl MapSurface) {
    if !map.is_ready() {
        log::debug!("Map not ready, skipping selection notification");
        return;
    }

    map.select_marker(change.current);

    if !change.is_effective() {
        return;
    }
    if let Some(coordinate) = change.current.and_then(|id| coordinate_of(id, properties)) {
        let zoom = map.zoom();
        map.center_on(coordinate, zoom);
    }
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod sync_tests;
