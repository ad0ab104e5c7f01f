use ratatui::{Frame, layout::Rect, widgets::Clear};

pub fn centered_popup(frame_area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(frame_area.width);
    let popup_height = height.min(frame_area.height);

    let popup_x = frame_area.x + (frame_area.width.saturating_sub(popup_width)) / 2;
    let popup_y = frame_area.y + (frame_area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Popup hugging the top-right corner of `area`, `margin` cells in from both edges
pub fn top_right_popup(area: Rect, width: u16, height: u16, margin: u16) -> Rect {
    let popup_width = width.min(area.width.saturating_sub(margin * 2));
    let popup_height = height.min(area.height.saturating_sub(margin));

    Rect {
        x: area.right().saturating_sub(popup_width + margin),
        y: area.y + margin,
        width: popup_width,
        height: popup_height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
