//! Property card content
//!
//! Builds the text lines of one carousel card. Layout and borders are the
//! carousel renderer's job.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::DensitySetting;
use crate::property::Property;

/// Card width including borders
pub const CARD_WIDTH: u16 = 30;

/// Terminals shorter than this get compact cards under `density = "auto"`
pub const COMPACT_HEIGHT_THRESHOLD: u16 = 30;

pub const PENDING_PRICE: &str = "Loading...";

const ELLIPSIS: char = '…';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardDensity {
    Compact,
    Comfortable,
}

impl CardDensity {
    pub fn resolve(setting: DensitySetting, terminal_height: u16) -> Self {
        match setting {
            DensitySetting::Compact => CardDensity::Compact,
            DensitySetting::Comfortable => CardDensity::Comfortable,
            DensitySetting::Auto if terminal_height < COMPACT_HEIGHT_THRESHOLD => {
                CardDensity::Compact
            }
            DensitySetting::Auto => CardDensity::Comfortable,
        }
    }

    /// Card height including borders
    pub fn card_height(self) -> u16 {
        match self {
            CardDensity::Compact => 5,
            CardDensity::Comfortable => 7,
        }
    }
}

/// Cut `text` to at most `max_width` display columns, ending in '…' when cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - ELLIPSIS.width().unwrap_or(1);
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}

/// Five bubbles for a 0-5 rating, rounded to the nearest half
pub fn rating_bubbles(rating: f32) -> String {
    let halves = (rating.clamp(0.0, 5.0) * 2.0).round() as usize;
    let full = halves / 2;
    let half = halves % 2;
    let empty = 5 - full - half;
    format!("{}{}{}", "●".repeat(full), "◐".repeat(half), "○".repeat(empty))
}

/// "from €420", the pending label, or None when there is no offer
pub fn price_label(property: &Property) -> Option<String> {
    let offer = property.offer.as_ref()?;
    if offer.is_pending() {
        Some(PENDING_PRICE.to_string())
    } else {
        Some(format!("from {}", offer.display_price()))
    }
}

fn rating_line(property: &Property) -> Option<Line<'static>> {
    let rating = property.rating?;
    let mut spans = vec![Span::styled(
        rating_bubbles(rating),
        Style::default().fg(Color::Green),
    )];
    if let Some(reviews) = property.reviews {
        spans.push(Span::styled(
            format!(" {:.1} ({})", rating, reviews),
            Style::default().fg(Color::Gray),
        ));
    }
    Some(Line::from(spans))
}

/// Cuisine or category labels, with the restaurant price level in front
fn details_text(property: &Property) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();
    if let Some(level) = property.price_level {
        parts.push(level.symbol().to_string());
    }
    parts.extend(property.secondaries.iter().cloned());
    (!parts.is_empty()).then(|| parts.join(" · "))
}

fn price_line(property: &Property) -> Option<Line<'static>> {
    let label = price_label(property)?;
    let style = if label == PENDING_PRICE {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    } else {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    };
    Some(Line::from(Span::styled(label, style)))
}

/// Text lines for one card, each fitting `width` columns
pub fn card_lines(property: &Property, density: CardDensity, width: u16) -> Vec<Line<'static>> {
    let width = width as usize;
    let plain = |text: String| {
        Line::from(Span::styled(
            truncate_to_width(&text, width),
            Style::default().fg(Color::Gray),
        ))
    };

    let mut lines = vec![Line::from(Span::styled(
        truncate_to_width(&property.name, width),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))];

    match density {
        CardDensity::Compact => {
            lines.push(rating_line(property).unwrap_or_else(|| plain(property.kind.to_string())));
            if let Some(line) = price_line(property) {
                lines.push(line);
            } else if let Some(details) = details_text(property) {
                lines.push(plain(details));
            }
        }
        CardDensity::Comfortable => {
            let kind = match &property.city {
                Some(city) => format!("{} · {}", property.kind, city),
                None => property.kind.to_string(),
            };
            lines.push(plain(kind));
            if let Some(line) = rating_line(property) {
                lines.push(line);
            }
            if let Some(details) = details_text(property) {
                lines.push(plain(details));
            }
            if let Some(line) = price_line(property) {
                lines.push(line);
            }
        }
    }

    lines
}

#[cfg(test)]
#[path = "card_tests.rs"]
mod card_tests;
