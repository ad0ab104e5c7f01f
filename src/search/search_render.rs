//! Search bar and filter chip rendering

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Focus};

pub const SEARCH_BAR_HEIGHT: u16 = 3;
pub const FILTER_CHIPS_HEIGHT: u16 = 1;

pub const SEARCHING_LABEL: &str = " Searching… ";

/// Render the search bar at the top of the screen
pub fn render_bar(app: &mut App, frame: &mut Frame, area: Rect) {
    let border_color = if app.focus == Focus::SearchBar {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(" Search ")
        .border_style(Style::default().fg(border_color));

    if app.search.is_searching() {
        block = block.title_top(
            Line::from(Span::styled(
                SEARCHING_LABEL,
                Style::default().fg(Color::Yellow),
            ))
            .alignment(Alignment::Right),
        );
    }

    let inner_area = block.inner(area);
    frame.render_widget(block, area);
    if inner_area.is_empty() {
        return;
    }

    let textarea = app.search.textarea_mut();
    textarea.set_style(Style::default().fg(Color::White));
    if app.focus == Focus::SearchBar {
        textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    } else {
        textarea.set_cursor_style(Style::default());
    }
    frame.render_widget(&*textarea, inner_area);
}

/// Render the filter chips row under the search bar
pub fn render_chips(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::FilterChips;
    let filters = app.search.filters();

    let line = if filters.is_empty() {
        Line::from(Span::styled(
            " No filters",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut spans = vec![Span::raw(" ")];
        for (index, filter) in filters.iter().enumerate() {
            let style = if focused && index == app.search.chip_cursor() {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan).bg(Color::DarkGray)
            };
            spans.push(Span::styled(format!(" {} ✕ ", filter), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
#[path = "search_render_tests.rs"]
mod search_render_tests;
