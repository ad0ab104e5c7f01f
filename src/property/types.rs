use std::fmt;

use serde::Deserialize;

use super::geo::Coordinate;

/// Stable unique identifier of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(pub u64);

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category tag of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum PropertyType {
    #[serde(alias = "accommodation", alias = "hotel")]
    Accommodation,
    #[serde(rename = "Eat & Drink", alias = "restaurant")]
    EatAndDrink,
    #[serde(alias = "attraction")]
    Attraction,
}

impl PropertyType {
    pub const ALL: [PropertyType; 3] = [
        PropertyType::Accommodation,
        PropertyType::EatAndDrink,
        PropertyType::Attraction,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PropertyType::Accommodation => "Accommodation",
            PropertyType::EatAndDrink => "Eat & Drink",
            PropertyType::Attraction => "Attraction",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Availability of a priced offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    /// Price lookup still in progress
    Pending,
    #[default]
    Available,
}

/// Restaurant price bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PriceLevel {
    #[serde(rename = "Cheap Eats")]
    CheapEats,
    #[serde(rename = "Mid Range")]
    MidRange,
    #[serde(rename = "Fine Dining")]
    FineDining,
}

impl PriceLevel {
    pub fn symbol(self) -> &'static str {
        match self {
            PriceLevel::CheapEats => "$",
            PriceLevel::MidRange => "$$-$$$",
            PriceLevel::FineDining => "$$$$",
        }
    }
}

/// A bookable price attached to a property
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PricedOffer {
    pub amount: f64,
    /// Display string for the currency, e.g. "€" or "USD"
    pub currency: String,
    #[serde(default)]
    pub availability: Availability,
}

impl PricedOffer {
    pub fn is_pending(&self) -> bool {
        self.availability == Availability::Pending
    }

    /// Price as shown on a card: symbols are prefixed, codes are suffixed
    pub fn display_price(&self) -> String {
        let amount = format!("{:.0}", self.amount);
        if self.currency.chars().all(|c| c.is_ascii_alphabetic()) && !self.currency.is_empty() {
            format!("{} {}", amount, self.currency)
        } else {
            format!("{}{}", self.currency, amount)
        }
    }
}

/// A searchable map entity
#[derive(Debug, Clone, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    #[serde(default)]
    pub location: Option<Coordinate>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub reviews: Option<u32>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub price_level: Option<PriceLevel>,
    #[serde(default)]
    pub secondaries: Vec<String>,
    #[serde(default)]
    pub offer: Option<PricedOffer>,
}

impl PartialEq for Property {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Property {}

impl Property {
    /// Minimal property, mostly useful for building fixtures
    pub fn new(id: u64, name: impl Into<String>, kind: PropertyType) -> Self {
        Self {
            id: PropertyId(id),
            name: name.into(),
            kind,
            location: None,
            rating: None,
            reviews: None,
            city: None,
            price_level: None,
            secondaries: Vec::new(),
            offer: None,
        }
    }

    pub fn with_location(mut self, lat: f64, lon: f64) -> Self {
        self.location = Some(Coordinate { lat, lon });
        self
    }

    pub fn with_offer(mut self, amount: f64, currency: &str, availability: Availability) -> Self {
        self.offer = Some(PricedOffer {
            amount,
            currency: currency.to_string(),
            availability,
        });
        self
    }

    pub fn with_rating(mut self, rating: f32, reviews: u32) -> Self {
        self.rating = Some(rating);
        self.reviews = Some(reviews);
        self
    }

    pub fn with_city(mut self, city: &str) -> Self {
        self.city = Some(city.to_string());
        self
    }

    /// Offer amount, if there is a settled price
    pub fn price(&self) -> Option<f64> {
        self.offer
            .as_ref()
            .filter(|offer| !offer.is_pending())
            .map(|offer| offer.amount)
    }
}
