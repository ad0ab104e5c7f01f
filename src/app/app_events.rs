use std::time::Instant;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app_state::{App, Focus};
use super::mouse_click;
use crate::layout::{Region, region_at};

impl App {
    /// Route one terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_event(key, now);
            }
            Event::Mouse(mouse) => self.handle_mouse_event(mouse, now),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::SearchBar => self.handle_search_bar_key(key),
            Focus::FilterChips => self.handle_chips_key(key),
            Focus::Map => self.handle_map_key(key, now),
            Focus::Carousel => self.handle_carousel_key(key, now),
        }
    }

    /// Handle global keys that work regardless of focus
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Help popup swallows every key while open
        if self.help.visible {
            match key.code {
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.help.close();
                }
                KeyCode::Char('j') | KeyCode::Down => self.help.scroll.scroll_down(1),
                KeyCode::Char('k') | KeyCode::Up => self.help.scroll.scroll_up(1),
                KeyCode::PageDown => self.help.scroll.scroll_down(10),
                KeyCode::PageUp => self.help.scroll.scroll_up(10),
                KeyCode::Char('g') | KeyCode::Home => self.help.scroll.jump_to_top(),
                KeyCode::Char('G') | KeyCode::End => self.help.scroll.jump_to_bottom(),
                _ => {}
            }
            return true;
        }

        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        let typing = self.focus == Focus::SearchBar;
        match key.code {
            KeyCode::F(1) => {
                self.help.toggle(self.focus);
                true
            }
            KeyCode::Char('?') if !typing => {
                self.help.toggle(self.focus);
                true
            }
            KeyCode::Char('q') if !typing => {
                self.should_quit = true;
                true
            }
            KeyCode::Tab => {
                self.focus = self.focus.cycle(&self.view, true);
                true
            }
            KeyCode::BackTab => {
                self.focus = self.focus.cycle(&self.view, false);
                true
            }
            _ => false,
        }
    }

    fn handle_search_bar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_search(),
            KeyCode::Esc => self.focus = Focus::Map,
            _ => {
                self.search.textarea_mut().input(key);
            }
        }
    }

    fn handle_chips_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.search.select_prev_chip(),
            KeyCode::Right | KeyCode::Char('l') => self.search.select_next_chip(),
            KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('x') => {
                self.remove_selected_chip()
            }
            _ => {}
        }
    }

    fn handle_map_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.map.pan(-1, 0),
            KeyCode::Right | KeyCode::Char('l') => self.map.pan(1, 0),
            KeyCode::Up | KeyCode::Char('k') => self.map.pan(0, 1),
            KeyCode::Down | KeyCode::Char('j') => self.map.pan(0, -1),
            KeyCode::Char('+') | KeyCode::Char('=') => self.map.zoom_by(1.0),
            KeyCode::Char('-') => self.map.zoom_by(-1.0),
            KeyCode::Char('n') => self.cycle_marker(true, now),
            KeyCode::Char('p') => self.cycle_marker(false, now),
            KeyCode::Char('a') => self.search_this_area(),
            _ => {}
        }
    }

    /// Keyboard stand-in for clicking the next or previous marker
    fn cycle_marker(&mut self, forward: bool, now: Instant) {
        if let Some(id) = self.map.cycle_marker(self.sync.selected(), forward) {
            self.click_property(id, now);
        }
    }

    fn handle_carousel_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.scroll_carousel(-1, now),
            KeyCode::Right | KeyCode::Char('l') => self.scroll_carousel(1, now),
            KeyCode::Home => {
                self.carousel.jump_to_start();
                self.pump_list_events(now);
            }
            KeyCode::End => {
                self.carousel.jump_to_end();
                self.pump_list_events(now);
            }
            KeyCode::Enter => {
                let index = self.active_card();
                self.click_card(index, now);
            }
            _ => {}
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, now: Instant) {
        if self.help.visible {
            return;
        }

        let region = region_at(&self.layout_regions, mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                mouse_click::handle_click(self, region, mouse.column, mouse.row, now);
            }
            MouseEventKind::ScrollDown if region == Some(Region::Carousel) => {
                self.scroll_carousel(1, now);
            }
            MouseEventKind::ScrollUp if region == Some(Region::Carousel) => {
                self.scroll_carousel(-1, now);
            }
            MouseEventKind::ScrollDown if region == Some(Region::Map) => self.map.zoom_by(-1.0),
            MouseEventKind::ScrollUp if region == Some(Region::Map) => self.map.zoom_by(1.0),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
