//! Tests for carousel rendering

use std::time::Instant;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::style::Color;

use super::EMPTY_MESSAGE;
use crate::app::App;
use crate::carousel::ScrollableList;
use crate::test_utils::test_helpers::test_app_without_search;

const WIDTH: u16 = 100;
const HEIGHT: u16 = 9;

fn render(app: &mut App) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            super::render_carousel(app, f, area);
        })
        .unwrap();
    terminal
}

fn render_text(app: &mut App) -> String {
    render(app).backend().to_string()
}

#[test]
fn test_cards_show_name_and_price() {
    let mut app = test_app_without_search();
    let output = render_text(&mut app);

    assert!(output.contains("The Merrion Hotel"));
    assert!(output.contains("from €420"));
    assert!(output.contains("The Shelbourne"));
    assert!(output.contains("Loading..."));
    assert!(output.contains("Jacobs Inn Hostel"));
    assert!(!output.contains("Chapter One"));
}

#[test]
fn test_render_updates_viewport() {
    let mut app = test_app_without_search();
    render(&mut app);

    assert_eq!(app.carousel.visible_range(), 0..3);
    assert_eq!(app.carousel.card_at_column(40), Some(1));
}

#[test]
fn test_scrolled_strip_shows_last_cards() {
    let mut app = test_app_without_search();
    render(&mut app);
    app.carousel.jump_to_end();
    app.pump_list_events(Instant::now());

    let output = render_text(&mut app);
    assert!(output.contains("Howth Cliff Walk"));
    assert!(output.contains("8/8"));
    assert!(!output.contains("The Merrion Hotel"));
}

#[test]
fn test_selected_card_has_green_border() {
    let mut app = test_app_without_search();
    app.click_card(0, Instant::now());

    let terminal = render(&mut app);
    // Top-left corner of the first card, just inside the pane border
    let cell = &terminal.backend().buffer()[(1, 1)];
    assert_eq!(cell.fg, Color::Green);
}

#[test]
fn test_active_unselected_card_has_cyan_border() {
    let mut app = test_app_without_search();
    let terminal = render(&mut app);
    let cell = &terminal.backend().buffer()[(1, 1)];
    assert_eq!(cell.fg, Color::Cyan);
}

#[test]
fn test_empty_results_message() {
    let mut app = test_app_without_search();
    app.apply_results(Vec::new(), false, Instant::now());

    let output = render_text(&mut app);
    assert!(output.contains(EMPTY_MESSAGE));
    assert_eq!(app.carousel.item_count(), 0);
}
