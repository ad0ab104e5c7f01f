//! Carousel rendering
//!
//! Draws as many cards as fit the strip, starting at the first visible card.
//! The selected card gets a green border, the current card a cyan one.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::ScrollableList;
use super::card::{CARD_WIDTH, CardDensity, card_lines};
use crate::app::{App, Focus};

pub const EMPTY_MESSAGE: &str = "No properties found";

const CARD_GAP: u16 = 1;

/// Height the carousel pane needs for the given density
pub fn carousel_height(density: CardDensity) -> u16 {
    density.card_height() + 2
}

/// Render the carousel pane
pub fn render_carousel(app: &mut App, frame: &mut Frame, area: Rect) {
    let density = CardDensity::resolve(app.view.density, frame.area().height);

    let border_color = if app.focus == Focus::Carousel {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(" Properties ")
        .border_style(Style::default().fg(border_color));

    if !app.properties.is_empty() {
        block = block.title_top(
            Line::from(Span::styled(
                format!(
                    " {}/{} ",
                    app.carousel.active_index() + 1,
                    app.properties.len()
                ),
                Style::default().fg(Color::Gray),
            ))
            .alignment(Alignment::Right),
        );
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.properties.is_empty() {
        let message = if app.search.is_searching() {
            "Searching…"
        } else {
            EMPTY_MESSAGE
        };
        let paragraph = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(paragraph, inner);
        return;
    }

    let slot_width = CARD_WIDTH + CARD_GAP;
    let visible = ((inner.width + CARD_GAP) / slot_width).max(1) as usize;
    app.carousel.update_viewport(inner.x, slot_width, visible);

    let selected = app.sync.selected();
    let active = app.carousel.active_index();
    let card_height = density.card_height().min(inner.height);

    for (slot, index) in app.carousel.visible_range().enumerate() {
        let Some(property) = app.properties.get(index) else {
            break;
        };

        let x = inner.x + slot as u16 * slot_width;
        let width = CARD_WIDTH.min(inner.right().saturating_sub(x));
        if width < 3 {
            break;
        }
        let card_area = Rect {
            x,
            y: inner.y,
            width,
            height: card_height,
        };

        let border_style = if selected == Some(property.id) {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else if index == active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let card_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);

        let content_width = card_block.inner(card_area).width;
        let card = Paragraph::new(card_lines(property, density, content_width)).block(card_block);
        frame.render_widget(card, card_area);
    }
}

#[cfg(test)]
#[path = "carousel_render_tests.rs"]
mod carousel_render_tests;
