//! Structured filters shown as chips under the search bar

use std::fmt;

use crate::property::{Availability, Property, PropertyType};

/// One structured constraint on the result set
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Filter {
    /// Property category; several type filters widen each other
    Type(PropertyType),
    /// Settled price at or below the cap
    MaxPrice(u32),
    /// Rating at or above this many stars
    MinRating(u8),
    /// Only offers that are bookable now
    AvailableOnly,
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Type(kind) => write!(f, "{}", kind),
            Filter::MaxPrice(cap) => write!(f, "Under {}", cap),
            Filter::MinRating(stars) => write!(f, "{}+ ★", stars),
            Filter::AvailableOnly => write!(f, "Available"),
        }
    }
}

/// Ordered, de-duplicated list of filters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    filters: Vec<Filter>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Filter> {
        self.filters.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Filter> {
        self.filters.get(index)
    }

    /// Add a filter. Price caps and rating floors replace an existing one of
    /// the same kind; duplicates are ignored.
    pub fn insert(&mut self, filter: Filter) {
        let slot = self.filters.iter().position(|existing| match (existing, &filter) {
            (Filter::MaxPrice(_), Filter::MaxPrice(_)) => true,
            (Filter::MinRating(_), Filter::MinRating(_)) => true,
            (a, b) => a == b,
        });
        match slot {
            Some(index) => self.filters[index] = filter,
            None => self.filters.push(filter),
        }
    }

    pub fn remove(&mut self, index: usize) -> Option<Filter> {
        (index < self.filters.len()).then(|| self.filters.remove(index))
    }

    /// Whether `property` passes every filter
    pub fn matches(&self, property: &Property) -> bool {
        let mut wanted_types = self
            .filters
            .iter()
            .filter_map(|f| match f {
                Filter::Type(kind) => Some(*kind),
                _ => None,
            })
            .peekable();
        if wanted_types.peek().is_some() && !wanted_types.any(|kind| kind == property.kind) {
            return false;
        }

        self.filters.iter().all(|filter| match *filter {
            Filter::Type(_) => true,
            Filter::MaxPrice(cap) => property.price().is_some_and(|price| price <= cap as f64),
            Filter::MinRating(stars) => property.rating.is_some_and(|r| r >= stars as f32),
            Filter::AvailableOnly => property
                .offer
                .as_ref()
                .is_some_and(|offer| offer.availability == Availability::Available),
        })
    }
}

impl FromIterator<Filter> for FilterSet {
    fn from_iter<I: IntoIterator<Item = Filter>>(iter: I) -> Self {
        let mut set = FilterSet::new();
        for filter in iter {
            set.insert(filter);
        }
        set
    }
}

#[cfg(test)]
#[path = "filters_tests.rs"]
mod filters_tests;
