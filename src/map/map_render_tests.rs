//! Tests for map pane rendering

use std::time::Instant;

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use super::SEARCH_AREA_PROMPT;
use crate::app::App;
use crate::map::MapSurface;
use crate::property::PropertyId;
use crate::test_utils::test_helpers::{test_app, test_app_without_search};

fn render_map(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            super::render_map(app, f, area);
        })
        .unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_title_shows_location_and_zoom() {
    let mut app = test_app_without_search();
    let output = render_map(&mut app, 80, 20);

    assert!(output.contains("Map · Dublin, Ireland"));
    assert!(output.contains("z12"));
}

#[test]
fn test_render_makes_map_ready() {
    let mut app = test_app_without_search();
    assert!(!app.map.is_ready());

    render_map(&mut app, 80, 20);
    assert!(app.map.is_ready());
}

#[test]
fn test_markers_are_drawn() {
    let mut app = test_app_without_search();
    let output = render_map(&mut app, 80, 20);

    // Braille dots live in U+2800..U+28FF
    assert!(
        output
            .chars()
            .any(|c| ('\u{2801}'..='\u{28FF}').contains(&c))
    );
}

#[test]
fn test_selected_marker_shows_label() {
    let mut app = test_app_without_search();
    render_map(&mut app, 80, 20);
    app.click_property(PropertyId(186605), Instant::now());

    let output = render_map(&mut app, 80, 20);
    assert!(output.contains("◉ The Merrion Hotel"));
    assert!(output.contains("z14"));
}

#[test]
fn test_selection_before_first_render_is_highlighted() {
    let mut app = test_app_without_search();
    assert!(!app.map.is_ready());
    app.click_property(PropertyId(186605), Instant::now());
    assert_eq!(app.sync.selected(), Some(PropertyId(186605)));
    assert_eq!(app.map.selected(), None);

    let output = render_map(&mut app, 80, 20);
    assert_eq!(app.map.selected(), Some(PropertyId(186605)));
    assert!(output.contains("◉ The Merrion Hotel"));
}

#[test]
fn test_prompt_after_user_pans() {
    let mut app = test_app_without_search();
    render_map(&mut app, 80, 20);
    assert!(!render_map(&mut app, 80, 20).contains(SEARCH_AREA_PROMPT.trim()));

    app.map.pan(0, 1);
    let output = render_map(&mut app, 80, 20);
    assert!(output.contains(SEARCH_AREA_PROMPT.trim()));
}

#[test]
fn test_prompt_hidden_while_searching() {
    let mut app = test_app();
    render_map(&mut app, 80, 20);
    app.map.pan(1, 0);
    app.run_query("hotels");

    let output = render_map(&mut app, 80, 20);
    assert!(!output.contains(SEARCH_AREA_PROMPT.trim()));
}

#[test]
fn test_title_without_location() {
    let mut app = test_app_without_search();
    app.location = None;

    let output = render_map(&mut app, 80, 20);
    assert!(output.contains(" Map "));
    assert!(!output.contains("Dublin, Ireland"));
}
