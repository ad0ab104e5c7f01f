// Configuration type definitions

use serde::Deserialize;

use crate::property::Coordinate;

/// What happens to a selection whose property vanished from a new result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StalePolicy {
    /// Leave the id selected until something else replaces it
    #[default]
    Keep,
    /// Clear the selection as soon as the id disappears
    Clear,
}

/// Card density selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DensitySetting {
    #[default]
    Auto,
    Compact,
    Comfortable,
}

/// Carousel configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Quiet period after the last user scroll before the card counts as settled
    pub settle_delay_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        CarouselConfig {
            settle_delay_ms: 500,
        }
    }
}

/// Map configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub fly_to_zoom: f64,
    pub default_zoom: f64,
    pub fallback_center: Coordinate,
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            fly_to_zoom: 14.0,
            default_zoom: 12.0,
            // Dublin city centre
            fallback_center: Coordinate {
                lat: 53.349801,
                lon: -6.260296,
            },
        }
    }
}

/// Search configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig { limit: 30 }
    }
}

/// Selection configuration section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub stale: StalePolicy,
}

/// Presentation variants of the map screen
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub search_bar: bool,
    pub filter_chips: bool,
    pub density: DensitySetting,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            search_bar: true,
            filter_chips: true,
            density: DensitySetting::Auto,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub selection: SelectionConfig,
    #[serde(default)]
    pub view: ViewConfig,
}
