//! Search collaborator
//!
//! The view only knows the `SearchBackend` trait. `CatalogBackend` answers
//! queries from the loaded dataset, standing in for a remote search service.

use thiserror::Error;

use super::filters::FilterSet;
use super::matcher::PropertyMatcher;
use super::smart_filter::parse_query;
use crate::property::{Bounds, Property};

/// What the user asked for
#[derive(Debug, Clone, PartialEq)]
pub enum SearchQuery {
    /// Free text from the search bar. `filters: None` lets the backend
    /// derive filters from the text.
    Text {
        text: String,
        filters: Option<FilterSet>,
    },
    /// Everything inside the visible map bounds
    Area { bounds: Bounds, filters: FilterSet },
}

impl SearchQuery {
    pub fn text(text: impl Into<String>) -> Self {
        SearchQuery::Text {
            text: text.into(),
            filters: None,
        }
    }

    pub fn is_area(&self) -> bool {
        matches!(self, SearchQuery::Area { .. })
    }

    /// Whether the backend is expected to derive the filter set
    pub fn derives_filters(&self) -> bool {
        matches!(self, SearchQuery::Text { filters: None, .. })
    }
}

/// Result of a successful search
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOutcome {
    pub properties: Vec<Property>,
    /// Filters the search was answered with (derived or as given)
    pub filters: FilterSet,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("No properties are available to search")]
    CatalogUnavailable,

    #[error("Search service is not running")]
    WorkerUnavailable,

    #[error("Search failed: {0}")]
    Backend(String),
}

pub trait SearchBackend: Send {
    fn search(&self, query: &SearchQuery) -> Result<SearchOutcome, SearchError>;
}

/// In-process backend over a fixed property catalog
pub struct CatalogBackend {
    catalog: Vec<Property>,
    limit: usize,
    matcher: PropertyMatcher,
}

impl CatalogBackend {
    pub fn new(catalog: Vec<Property>, limit: usize) -> Self {
        Self {
            catalog,
            limit: limit.max(1),
            matcher: PropertyMatcher::new(),
        }
    }

    fn search_text(&self, text: &str, filters: Option<&FilterSet>) -> SearchOutcome {
        let parsed = parse_query(text);
        let filters = filters.cloned().unwrap_or(parsed.filters);

        let mut properties: Vec<Property> = self
            .matcher
            .rank(self.catalog.iter().filter(|p| filters.matches(p)), &parsed.words)
            .into_iter()
            .cloned()
            .collect();
        properties.truncate(self.limit);

        SearchOutcome { properties, filters }
    }

    fn search_area(&self, bounds: &Bounds, filters: &FilterSet) -> SearchOutcome {
        let properties = self
            .catalog
            .iter()
            .filter(|p| p.location.is_some_and(|c| bounds.contains(c)))
            .filter(|p| filters.matches(p))
            .take(self.limit)
            .cloned()
            .collect();

        SearchOutcome {
            properties,
            filters: filters.clone(),
        }
    }
}

impl SearchBackend for CatalogBackend {
    fn search(&self, query: &SearchQuery) -> Result<SearchOutcome, SearchError> {
        if self.catalog.is_empty() {
            return Err(SearchError::CatalogUnavailable);
        }

        let outcome = match query {
            SearchQuery::Text { text, filters } => self.search_text(text, filters.as_ref()),
            SearchQuery::Area { bounds, filters } => self.search_area(bounds, filters),
        };
        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod backend_tests;
