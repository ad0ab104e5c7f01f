//! Search module
//!
//! Search bar, smart filter chips and the background search worker that
//! answers queries with a new property sequence.

pub mod backend;
pub mod filters;
mod matcher;
pub mod search_render;
mod search_state;
pub mod smart_filter;
mod worker;

pub use backend::{CatalogBackend, SearchBackend, SearchError, SearchOutcome, SearchQuery};
pub use filters::{Filter, FilterSet};
pub use search_state::{SearchEvent, SearchState};
