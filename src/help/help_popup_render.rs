//! Key reference popup, one section per pane

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Focus};
use crate::help::help_content::{HELP_FOOTER, HelpSection, section_start, shown_sections};
use crate::widgets::popup;

pub const HELP_POPUP_WIDTH: u16 = 64;
const KEY_COLUMN: usize = 16;
const CURRENT_MARKER: &str = "▶ ";
const CURRENT_SUFFIX: &str = " (this pane)";

fn section_lines(section: &HelpSection, current: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(section.keys.len() + 2);

    let header = if current {
        Line::from(vec![
            Span::styled(
                format!("{}{}", CURRENT_MARKER, section.title),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(CURRENT_SUFFIX, Style::default().fg(Color::Green)),
        ])
    } else {
        Line::from(Span::styled(
            format!("  {}", section.title),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
    };
    lines.push(header);

    let key_style = if current {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let desc_style = if current {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    for (key, desc) in section.keys {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<width$}", key, width = KEY_COLUMN), key_style),
            Span::styled(*desc, desc_style),
        ]));
    }

    lines.push(Line::from(""));
    lines
}

/// Help body for the current view, highlighting `context`'s section
pub fn help_lines(app: &App, context: Option<Focus>) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = shown_sections(&app.view)
        .flat_map(|section| section_lines(section, context.is_some() && section.pane == context))
        .collect();

    lines.push(Line::from(Span::styled(
        format!("  {}", HELP_FOOTER),
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

pub fn render_popup(app: &mut App, frame: &mut Frame) {
    let frame_area = frame.area();
    if frame_area.width < 20 || frame_area.height < 10 {
        return;
    }

    let context = app.help.context;
    let lines = help_lines(app, context);
    // +2 for borders
    let popup_area = popup::centered_popup(frame_area, HELP_POPUP_WIDTH, lines.len() as u16 + 2);
    popup::clear_area(frame, popup_area);

    app.help
        .scroll
        .update_bounds(lines.len() as u32, popup_area.height.saturating_sub(2));
    if app.help.take_jump() {
        if let Some(pane) = context {
            app.help.scroll.offset = section_start(&app.view, pane).min(app.help.scroll.max_offset);
        }
    }

    let title = match context {
        Some(pane) => format!(" Keys: {} ", pane_label(pane)),
        None => " Keys ".to_string(),
    };
    let popup = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        )
        .scroll((app.help.scroll.offset, 0));

    frame.render_widget(popup, popup_area);
}

fn pane_label(pane: Focus) -> &'static str {
    match pane {
        Focus::SearchBar => "search bar",
        Focus::FilterChips => "filter chips",
        Focus::Map => "map",
        Focus::Carousel => "cards",
    }
}

#[cfg(test)]
#[path = "help_popup_render_tests.rs"]
mod help_popup_render_tests;
