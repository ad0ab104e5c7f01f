//! Geographic helpers: coordinates, bounding boxes, centroids

use serde::Deserialize;

/// WGS84 coordinate in degrees
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    pub fn is_valid(&self) -> bool {
        self.is_finite() && (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

/// Axis-aligned lat/lon box, inclusive on every edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// Box of the given spans centred on `center`, clamped to valid latitudes
    pub fn around(center: Coordinate, lat_span: f64, lon_span: f64) -> Self {
        let half_lat = lat_span / 2.0;
        let half_lon = lon_span / 2.0;
        Self {
            south: (center.lat - half_lat).max(-90.0),
            west: center.lon - half_lon,
            north: (center.lat + half_lat).min(90.0),
            east: center.lon + half_lon,
        }
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.lat >= self.south
            && coordinate.lat <= self.north
            && coordinate.lon >= self.west
            && coordinate.lon <= self.east
    }
}

/// Average of the given coordinates, `None` when there are none
pub fn centroid<I>(coordinates: I) -> Option<Coordinate>
where
    I: IntoIterator<Item = Coordinate>,
{
    let mut count = 0usize;
    let (lat_sum, lon_sum) = coordinates
        .into_iter()
        .inspect(|_| count += 1)
        .fold((0.0, 0.0), |(lat, lon), c| (lat + c.lat, lon + c.lon));

    if count == 0 {
        return None;
    }

    Some(Coordinate {
        lat: lat_sum / count as f64,
        lon: lon_sum / count as f64,
    })
}

#[cfg(test)]
#[path = "geo_tests.rs"]
mod geo_tests;
