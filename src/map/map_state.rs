use ratatui::layout::Rect;

use super::MapSurface;
use crate::property::geo::centroid;
use crate::property::{Bounds, Coordinate, Property, PropertyId};

pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 18.0;

/// Fraction of the visible span moved per pan step
const PAN_STEP: f64 = 0.25;

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f64 = 2.0;

/// A property placed on the map
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub id: PropertyId,
    pub coordinate: Coordinate,
    pub label: String,
}

/// Viewport and marker state of the map pane
#[derive(Debug, Clone)]
pub struct MapState {
    center: Coordinate,
    zoom: f64,
    /// Inner drawing area, known after the first render
    area: Option<Rect>,
    markers: Vec<MapMarker>,
    selected: Option<PropertyId>,
    /// Viewport the user moved to and has not searched yet
    pending_bounds: Option<Bounds>,
}

impl MapState {
    pub fn new(center: Coordinate, zoom: f64) -> Self {
        Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            area: None,
            markers: Vec::new(),
            selected: None,
            pending_bounds: None,
        }
    }

    pub fn center(&self) -> Coordinate {
        self.center
    }

    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    pub fn markers(&self) -> &[MapMarker] {
        &self.markers
    }

    pub fn selected(&self) -> Option<PropertyId> {
        self.selected
    }

    pub fn pending_bounds(&self) -> Option<Bounds> {
        self.pending_bounds
    }

    pub fn clear_pending_bounds(&mut self) {
        self.pending_bounds = None;
    }

    /// Record where the map is drawn; the map becomes ready on first call.
    ///
    /// Returns true on the call that made the map ready.
    pub fn set_viewport_area(&mut self, area: Rect) -> bool {
        let became_ready = self.area.is_none();
        if became_ready {
            log::debug!("Map ready at {}x{}", area.width, area.height);
        }
        self.area = Some(area);
        became_ready
    }

    /// Replace markers with the located properties of a new result set
    pub fn set_markers(&mut self, properties: &[Property]) {
        self.markers = properties
            .iter()
            .filter_map(|p| {
                p.location.map(|coordinate| MapMarker {
                    id: p.id,
                    coordinate,
                    label: p.name.clone(),
                })
            })
            .collect();
    }

    /// Center on the average marker position, or `fallback` if there are none
    pub fn fit_markers(&mut self, fallback: Coordinate) {
        self.center = centroid(self.markers.iter().map(|m| m.coordinate)).unwrap_or(fallback);
        self.pending_bounds = None;
    }

    /// Longitude degrees visible across the pane
    pub fn lon_span(&self) -> f64 {
        360.0 / 2f64.powf(self.zoom)
    }

    /// Latitude degrees visible down the pane, following the pane's aspect
    pub fn lat_span(&self) -> f64 {
        let (cols, rows) = match self.area {
            Some(area) if area.width > 0 && area.height > 0 => {
                (area.width as f64, area.height as f64)
            }
            _ => (2.0, 1.0),
        };
        let aspect = rows * CELL_ASPECT / cols;
        self.lon_span() * aspect * self.center.lat.to_radians().cos().abs().max(0.01)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::around(self.center, self.lat_span(), self.lon_span())
    }

    /// Move the viewport by whole pan steps; invites an area search
    pub fn pan(&mut self, east_steps: i32, north_steps: i32) {
        let lon = self.center.lon + self.lon_span() * PAN_STEP * east_steps as f64;
        let lat = self.center.lat + self.lat_span() * PAN_STEP * north_steps as f64;
        self.center = Coordinate {
            lat: lat.clamp(-85.0, 85.0),
            lon: wrap_longitude(lon),
        };
        self.pending_bounds = Some(self.bounds());
    }

    /// Change zoom by `delta` levels; invites an area search
    pub fn zoom_by(&mut self, delta: f64) {
        let zoom = (self.zoom + delta).clamp(MIN_ZOOM, MAX_ZOOM);
        if zoom != self.zoom {
            self.zoom = zoom;
            self.pending_bounds = Some(self.bounds());
        }
    }

    /// Screen cell of `coordinate`, if it falls inside the drawn area
    pub fn project(&self, coordinate: Coordinate) -> Option<(u16, u16)> {
        let area = self.area?;
        if area.width == 0 || area.height == 0 {
            return None;
        }
        let bounds = self.bounds();
        if !bounds.contains(coordinate) {
            return None;
        }

        let x_ratio = (coordinate.lon - bounds.west) / (bounds.east - bounds.west);
        let y_ratio = (bounds.north - coordinate.lat) / (bounds.north - bounds.south);
        let col = (x_ratio * (area.width - 1) as f64).round() as u16;
        let row = (y_ratio * (area.height - 1) as f64).round() as u16;
        Some((area.x + col, area.y + row))
    }

    /// Marker nearest to screen cell (col, row), within one cell
    pub fn marker_at(&self, col: u16, row: u16) -> Option<PropertyId> {
        self.markers
            .iter()
            .filter_map(|marker| {
                let (x, y) = self.project(marker.coordinate)?;
                let dx = x.abs_diff(col);
                let dy = y.abs_diff(row);
                (dx <= 1 && dy <= 1).then_some((dx + dy, marker.id))
            })
            .min_by_key(|&(distance, _)| distance)
            .map(|(_, id)| id)
    }

    /// Marker after (or before) `current` in result order, wrapping around
    pub fn cycle_marker(&self, current: Option<PropertyId>, forward: bool) -> Option<PropertyId> {
        if self.markers.is_empty() {
            return None;
        }
        let len = self.markers.len();
        let position = current.and_then(|id| self.markers.iter().position(|m| m.id == id));
        let next = match (position, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        Some(self.markers[next].id)
    }
}

impl MapSurface for MapState {
    fn is_ready(&self) -> bool {
        self.area.is_some()
    }

    fn select_marker(&mut self, id: Option<PropertyId>) {
        self.selected = id;
    }

    fn center_on(&mut self, coordinate: Coordinate, zoom: f64) {
        self.center = coordinate;
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    fn zoom(&self) -> f64 {
        self.zoom
    }
}

fn wrap_longitude(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
#[path = "map_state_tests.rs"]
mod map_state_tests;
