use crate::property::PropertyId;

/// Outcome of a single `set`, handed to every observer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    pub previous: Option<PropertyId>,
    pub current: Option<PropertyId>,
    /// Monotonic count of `set` calls, including no-op ones
    pub revision: u64,
}

impl SelectionChange {
    /// Whether the selected id actually changed
    pub fn is_effective(&self) -> bool {
        self.previous != self.current
    }
}

/// Single source of truth for which property is selected
///
/// At most one id is selected at a time. No validation happens here; an id
/// that matches no property simply has no list position.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected: Option<PropertyId>,
    revision: u64,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<PropertyId> {
        self.selected
    }

    pub fn is_selected(&self, id: PropertyId) -> bool {
        self.selected == Some(id)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the selection. Setting the current id again still produces a
    /// change record so observers are notified on every call.
    pub fn set(&mut self, id: Option<PropertyId>) -> SelectionChange {
        let previous = self.selected;
        self.selected = id;
        self.revision += 1;

        SelectionChange {
            previous,
            current: id,
            revision: self.revision,
        }
    }

    pub fn clear(&mut self) -> SelectionChange {
        self.set(None)
    }
}

#[cfg(test)]
#[path = "selection_state_tests.rs"]
mod selection_state_tests;
