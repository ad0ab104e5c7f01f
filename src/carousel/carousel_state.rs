use std::collections::VecDeque;

use super::ScrollableList;

/// Position and viewport of the card strip
#[derive(Debug, Clone, Default)]
pub struct CarouselState {
    active: usize,
    len: usize,
    /// First card drawn in the viewport
    first_visible: usize,
    /// How many cards fit, updated during render
    visible_cards: usize,
    /// Card slot width including the gap, updated during render
    slot_width: u16,
    /// Left edge of the strip, updated during render
    origin_x: u16,
    changes: VecDeque<usize>,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            visible_cards: 1,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn first_visible(&self) -> usize {
        self.first_visible
    }

    /// Range of card indices currently on screen
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let end = (self.first_visible + self.visible_cards.max(1)).min(self.len);
        self.first_visible.min(end)..end
    }

    /// Called during render with the strip geometry
    pub fn update_viewport(&mut self, origin_x: u16, slot_width: u16, visible_cards: usize) {
        self.origin_x = origin_x;
        self.slot_width = slot_width;
        self.visible_cards = visible_cards.max(1);
        self.ensure_active_visible();
    }

    /// Card index under screen column `col`, if a card is drawn there
    pub fn card_at_column(&self, col: u16) -> Option<usize> {
        if self.slot_width == 0 || col < self.origin_x {
            return None;
        }
        let slot = ((col - self.origin_x) / self.slot_width) as usize;
        let index = self.first_visible + slot;
        self.visible_range().contains(&index).then_some(index)
    }

    /// Move by `delta` cards as a person scrolling would. Returns true if
    /// the position changed.
    pub fn scroll_by(&mut self, delta: isize) -> bool {
        if self.len == 0 {
            return false;
        }
        let target = self
            .active
            .saturating_add_signed(delta)
            .min(self.len - 1);
        self.move_to(target)
    }

    pub fn jump_to_start(&mut self) -> bool {
        self.move_to(0)
    }

    pub fn jump_to_end(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        self.move_to(self.len - 1)
    }

    fn move_to(&mut self, index: usize) -> bool {
        if self.len == 0 {
            return false;
        }
        let index = index.min(self.len - 1);
        if index == self.active {
            return false;
        }
        self.active = index;
        self.changes.push_back(index);
        self.ensure_active_visible();
        true
    }

    fn ensure_active_visible(&mut self) {
        let visible = self.visible_cards.max(1);
        if self.active < self.first_visible {
            self.first_visible = self.active;
        } else if self.active >= self.first_visible + visible {
            self.first_visible = self.active + 1 - visible;
        }
        let max_first = self.len.saturating_sub(visible);
        self.first_visible = self.first_visible.min(max_first);
    }
}

impl ScrollableList for CarouselState {
    fn active_index(&self) -> usize {
        self.active
    }

    fn item_count(&self) -> usize {
        self.len
    }

    fn scroll_to(&mut self, index: usize) {
        self.move_to(index);
    }

    fn set_item_count(&mut self, count: usize) {
        self.len = count;
        self.active = 0;
        self.first_visible = 0;
        self.changes.clear();
    }

    fn take_index_change(&mut self) -> Option<usize> {
        self.changes.pop_front()
    }
}

#[cfg(test)]
#[path = "carousel_state_tests.rs"]
mod carousel_state_tests;
