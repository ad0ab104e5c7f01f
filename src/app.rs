//! Application state, event routing and frame layout
//!
//! `App` owns the property sequence and every collaborator, and is the only
//! place where the selection controller meets the concrete map and carousel.

mod app_events;
mod app_render;
mod app_state;
mod mouse_click;

pub use app_state::{App, Focus};
