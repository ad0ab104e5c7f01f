use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use serde::Deserialize;

use super::geo::Coordinate;
use super::types::Property;
use crate::error::StaymapError;

/// Where the map starts before any property has been placed
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchLocation {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl SearchLocation {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// "Dublin, Ireland", "Ireland", or nothing
    pub fn display_name(&self) -> Option<String> {
        match (&self.city, &self.country) {
            (Some(city), Some(country)) => Some(format!("{}, {}", city, country)),
            (Some(city), None) => Some(city.clone()),
            (None, Some(country)) => Some(country.clone()),
            (None, None) => None,
        }
    }
}

/// Property catalog plus its initial location
#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub location: Option<SearchLocation>,
    #[serde(default)]
    pub properties: Vec<Property>,
}

/// Read a property dataset from stdin or a file
pub struct DatasetReader;

impl DatasetReader {
    /// Read a dataset from a file path, or from stdin when `path` is None
    pub fn read(path: Option<&Path>) -> Result<Dataset, StaymapError> {
        let json_str = match path {
            Some(file_path) => {
                let mut file = File::open(file_path)?;
                let mut contents = String::new();
                file.read_to_string(&mut contents)?;
                contents
            }
            None => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
        };

        Self::parse(&json_str)
    }

    /// Parse and validate dataset JSON
    pub fn parse(json_str: &str) -> Result<Dataset, StaymapError> {
        let dataset: Dataset = serde_json::from_str(json_str)
            .map_err(|e| StaymapError::InvalidDataset(e.to_string()))?;

        validate(&dataset)?;
        log::debug!(
            "Loaded dataset with {} properties",
            dataset.properties.len()
        );
        Ok(dataset)
    }
}

fn validate(dataset: &Dataset) -> Result<(), StaymapError> {
    let mut seen = HashSet::with_capacity(dataset.properties.len());

    for property in &dataset.properties {
        if !seen.insert(property.id) {
            return Err(StaymapError::InvalidDataset(format!(
                "duplicate property id {}",
                property.id
            )));
        }

        if let Some(location) = property.location {
            if !location.is_valid() {
                return Err(StaymapError::InvalidDataset(format!(
                    "property {} has an out-of-range coordinate",
                    property.id
                )));
            }
        }

        if let Some(rating) = property.rating {
            if !(0.0..=5.0).contains(&rating) {
                return Err(StaymapError::InvalidDataset(format!(
                    "property {} has rating {} outside 0-5",
                    property.id, rating
                )));
            }
        }
    }

    if let Some(location) = &dataset.location {
        if !location.coordinate().is_valid() {
            return Err(StaymapError::InvalidDataset(
                "dataset location is out of range".to_string(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod reader_tests;
