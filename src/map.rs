//! Map pane: viewport, markers, and the collaborator contract the
//! selection controller talks to

pub mod map_render;
mod map_state;

pub use map_state::{MAX_ZOOM, MIN_ZOOM, MapMarker, MapState};

use crate::property::{Coordinate, PropertyId};

/// What the selection controller needs from a map
pub trait MapSurface {
    /// False until the map can accept commands; commands before then are no-ops
    fn is_ready(&self) -> bool;

    /// Highlight the marker for `id`, or none
    fn select_marker(&mut self, id: Option<PropertyId>);

    /// Move the viewport to `coordinate` at `zoom`
    fn center_on(&mut self, coordinate: Coordinate, zoom: f64);

    /// Current zoom level
    fn zoom(&self) -> f64;
}
