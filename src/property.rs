//! Property records and the dataset they are loaded from
//!
//! Properties are owned by the search collaborator and are read-only for the
//! rest of the crate. Identity is the id alone.

pub mod geo;
mod reader;
mod types;

pub use geo::{Bounds, Coordinate};
pub use reader::{Dataset, DatasetReader, SearchLocation};
pub use types::{Availability, PriceLevel, PricedOffer, Property, PropertyId, PropertyType};

/// Index of the first property whose id equals `id`, scanning in visual order
pub fn position_of(id: Option<PropertyId>, properties: &[Property]) -> Option<usize> {
    let id = id?;
    properties.iter().position(|p| p.id == id)
}
