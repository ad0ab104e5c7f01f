//! staymap: map-centric property search in the terminal
//!
//! A map pane with property markers, a search bar with smart filter chips,
//! and a card carousel whose current card stays in step with the map's
//! selected marker.

pub mod app;
pub mod carousel;
pub mod config;
pub mod error;
pub mod help;
pub mod layout;
pub mod map;
pub mod notification;
pub mod property;
pub mod scroll;
pub mod search;
pub mod selection;
pub mod widgets;

#[cfg(test)]
mod test_utils;
