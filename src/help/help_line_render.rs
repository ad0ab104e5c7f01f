//! Help line rendering
//!
//! This module handles rendering of the help line at the bottom of the screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::app::{App, Focus};

/// Render the help line (bottom of screen)
pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let help_text = match app.focus {
        Focus::SearchBar => " F1: Help | Enter: Search | Tab: Next Pane | Esc: Leave Search",
        Focus::FilterChips => " F1/?: Help | ←/→: Chip | Del: Remove Chip | Tab: Next Pane | q: Quit",
        Focus::Map => {
            " F1/?: Help | hjkl: Pan | +/-: Zoom | n/p: Marker | a: Search Area | Tab: Next Pane | q: Quit"
        }
        Focus::Carousel => {
            " F1/?: Help | ←/→: Cards | Enter: Select | Home/End: Jump | Tab: Next Pane | q: Quit"
        }
    };

    let help = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(help, area);
}
