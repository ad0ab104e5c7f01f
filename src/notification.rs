//! Notification module
//!
//! Transient one-line messages (search failures, config warnings) shown in
//! the top-right corner until they expire.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{Notification, NotificationKind, NotificationState};
