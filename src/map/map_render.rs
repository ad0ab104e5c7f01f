//! Map pane rendering
//!
//! Draws markers on a braille canvas, the selected marker with its name, and
//! the "Search this area" prompt after the user moved the map.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph,
        canvas::{Canvas, Points},
    },
};

use super::MapSurface;
use crate::app::{App, Focus};

pub const SEARCH_AREA_PROMPT: &str = " Search this area (a) ";

/// Render the map pane
pub fn render_map(app: &mut App, frame: &mut Frame, area: Rect) {
    let border_color = if app.focus == Focus::Map {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let title = match app.location.as_ref().and_then(|l| l.display_name()) {
        Some(name) => format!(" Map · {} ", name),
        None => " Map ".to_string(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_top(
            Line::from(Span::styled(
                format!(" z{:.0} ", app.map.zoom()),
                Style::default().fg(Color::Gray),
            ))
            .alignment(Alignment::Right),
        )
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    if inner.is_empty() {
        frame.render_widget(block, area);
        return;
    }
    if app.map.set_viewport_area(inner) {
        // Selections made before the first layout were not highlighted
        app.map.select_marker(app.sync.selected());
    }

    let bounds = app.map.bounds();
    let selected = app.map.selected();

    let others: Vec<(f64, f64)> = app
        .map
        .markers()
        .iter()
        .filter(|m| Some(m.id) != selected)
        .map(|m| (m.coordinate.lon, m.coordinate.lat))
        .collect();
    let highlighted = app
        .map
        .markers()
        .iter()
        .find(|m| Some(m.id) == selected)
        .cloned();

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([bounds.west, bounds.east])
        .y_bounds([bounds.south, bounds.north])
        .paint(move |ctx| {
            ctx.draw(&Points {
                coords: &others,
                color: Color::LightBlue,
            });
            if let Some(marker) = &highlighted {
                ctx.layer();
                ctx.print(
                    marker.coordinate.lon,
                    marker.coordinate.lat,
                    Line::from(vec![
                        Span::styled(
                            "◉ ",
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            marker.label.clone(),
                            Style::default().fg(Color::White).bg(Color::DarkGray),
                        ),
                    ]),
                );
            }
        });

    frame.render_widget(canvas, area);

    if app.map.pending_bounds().is_some() && !app.search.is_searching() {
        render_search_area_prompt(frame, inner);
    }
}

fn render_search_area_prompt(frame: &mut Frame, inner: Rect) {
    let width = (SEARCH_AREA_PROMPT.chars().count() as u16).min(inner.width);
    if width == 0 || inner.height == 0 {
        return;
    }
    let prompt_area = Rect {
        x: inner.x + (inner.width - width) / 2,
        y: inner.y,
        width,
        height: 1,
    };
    let prompt = Paragraph::new(SEARCH_AREA_PROMPT).style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(prompt, prompt_area);
}

#[cfg(test)]
#[path = "map_render_tests.rs"]
mod map_render_tests;
