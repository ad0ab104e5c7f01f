//! Tests for widgets/popup

use super::*;

#[test]
fn test_centered_popup_basic() {
    let frame = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 50,
    };

    let popup = centered_popup(frame, 40, 20);

    assert_eq!(popup.x, 30);
    assert_eq!(popup.y, 15);
    assert_eq!(popup.width, 40);
    assert_eq!(popup.height, 20);
}

#[test]
fn test_centered_popup_too_large_is_clamped() {
    let frame = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 50,
    };

    let popup = centered_popup(frame, 200, 100);

    assert_eq!(popup.width, 100);
    assert_eq!(popup.height, 50);
    assert_eq!(popup.x, 0);
    assert_eq!(popup.y, 0);
}

#[test]
fn test_centered_popup_respects_offset_area() {
    let area = Rect::new(10, 5, 40, 20);
    let popup = centered_popup(area, 20, 10);

    assert_eq!(popup.x, 20);
    assert_eq!(popup.y, 10);
}

#[test]
fn test_top_right_popup() {
    let area = Rect::new(0, 0, 80, 24);
    let popup = top_right_popup(area, 30, 3, 1);

    assert_eq!(popup, Rect::new(49, 1, 30, 3));
}

#[test]
fn test_top_right_popup_narrow_area() {
    let area = Rect::new(0, 0, 20, 2);
    let popup = top_right_popup(area, 30, 3, 1);

    assert_eq!(popup.width, 18);
    assert_eq!(popup.height, 1);
    assert_eq!(popup.x, 1);
}
