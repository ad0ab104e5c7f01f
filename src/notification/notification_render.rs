use ratatui::{
    Frame,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::notification_state::{NotificationKind, NotificationState};
use crate::widgets::popup;

const MAX_WIDTH: u16 = 60;

/// Render the current notification in the top-right corner, if any
pub fn render_notification(frame: &mut Frame, state: &NotificationState) {
    let Some(notification) = state.current() else {
        return;
    };

    let color = match notification.kind {
        NotificationKind::Info => Color::Cyan,
        NotificationKind::Warning => Color::Yellow,
        NotificationKind::Error => Color::Red,
    };

    let width = (notification.message.width() as u16 + 4).min(MAX_WIDTH);
    let area = popup::top_right_popup(frame.area(), width, 3, 1);
    if area.width < 5 || area.height < 3 {
        return;
    }

    popup::clear_area(frame, area);
    let paragraph = Paragraph::new(notification.message.as_str())
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(paragraph, area);
}
