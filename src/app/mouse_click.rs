//! Mouse click handling
//!
//! A click focuses the pane under the cursor. On a marker or a card it is
//! also a selection click.

use std::time::Instant;

use super::app_state::{App, Focus};
use crate::layout::Region;

/// Handle left mouse button click at (col, row) in the given region
pub fn handle_click(app: &mut App, region: Option<Region>, col: u16, row: u16, now: Instant) {
    match region {
        Some(Region::SearchBar) => app.focus = Focus::SearchBar,
        Some(Region::FilterChips) => app.focus = Focus::FilterChips,
        Some(Region::Map) => click_map(app, col, row, now),
        Some(Region::Carousel) => click_carousel(app, col, now),
        None => {}
    }
}

fn click_map(app: &mut App, col: u16, row: u16, now: Instant) {
    app.focus = Focus::Map;
    if let Some(id) = app.map.marker_at(col, row) {
        app.click_property(id, now);
    }
}

fn click_carousel(app: &mut App, col: u16, now: Instant) {
    app.focus = Focus::Carousel;
    if let Some(index) = app.carousel.card_at_column(col) {
        app.click_card(index, now);
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
