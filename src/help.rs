//! Help popup module
//!
//! Contains the help popup state and content for keyboard shortcuts display.

mod help_content;
pub mod help_line_render;
pub mod help_popup_render;
mod help_state;

pub use help_content::{HELP_FOOTER, HELP_SECTIONS, HelpSection};
pub use help_state::HelpPopupState;
