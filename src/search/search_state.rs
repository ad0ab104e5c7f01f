use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

use super::backend::{SearchBackend, SearchError, SearchQuery};
use super::filters::FilterSet;
use super::worker::{SearchRequest, SearchResponse, spawn_worker};
use crate::property::{Bounds, Property};

/// Something the owner has to react to after polling the worker
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// A new property sequence. `area` is true for "Search this area".
    Results {
        properties: Vec<Property>,
        area: bool,
    },
    Failed(String),
}

#[derive(Debug, Clone, Copy)]
struct InFlight {
    request_id: u64,
    derives_filters: bool,
    area: bool,
}

/// Creates a TextArea configured for the search bar.
fn create_search_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea.set_placeholder_text("Search hotels, restaurants, things to do");
    textarea
}

/// Search bar text, filter chips and the worker channel
pub struct SearchState {
    textarea: TextArea<'static>,
    filters: FilterSet,
    /// Highlighted chip while the chip row has focus
    chip_cursor: usize,
    /// Text of the last submitted query, reused when chips change
    last_query: Option<String>,
    request_id: u64,
    in_flight: Option<InFlight>,
    request_tx: Option<Sender<SearchRequest>>,
    response_rx: Option<Receiver<SearchResponse>>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    /// Search state with no worker; every request is a no-op
    pub fn new() -> Self {
        Self {
            textarea: create_search_textarea(),
            filters: FilterSet::new(),
            chip_cursor: 0,
            last_query: None,
            request_id: 0,
            in_flight: None,
            request_tx: None,
            response_rx: None,
        }
    }

    /// Search state backed by a worker thread running `backend`
    pub fn with_backend(backend: Box<dyn SearchBackend>) -> Self {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(backend, request_rx, response_tx);

        Self {
            request_tx: Some(request_tx),
            response_rx: Some(response_rx),
            ..Self::new()
        }
    }

    pub fn query(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    /// Replace the search bar text
    pub fn set_query(&mut self, text: &str) {
        self.textarea.select_all();
        self.textarea.cut();
        self.textarea.insert_str(text);
    }

    pub fn textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.textarea
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    pub fn is_searching(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn chip_cursor(&self) -> usize {
        self.chip_cursor
    }

    pub fn select_next_chip(&mut self) {
        if !self.filters.is_empty() {
            self.chip_cursor = (self.chip_cursor + 1) % self.filters.len();
        }
    }

    pub fn select_prev_chip(&mut self) {
        if !self.filters.is_empty() {
            self.chip_cursor = self
                .chip_cursor
                .checked_sub(1)
                .unwrap_or(self.filters.len() - 1);
        }
    }

    /// Submit the search bar text.
    ///
    /// Blank text is ignored. The request carries no filters so the backend
    /// derives them from the text. Returns whether a request was sent.
    pub fn submit(&mut self) -> Result<bool, SearchError> {
        let text = self.query().trim().to_string();
        if text.is_empty() {
            return Ok(false);
        }

        self.last_query = Some(text.clone());
        self.send(SearchQuery::Text {
            text,
            filters: None,
        })?;
        Ok(true)
    }

    /// Replace the filter set from the chip row.
    ///
    /// While a search is in flight the change is only recorded. Otherwise
    /// the last query is re-run with exactly these filters. Returns whether
    /// a request was sent.
    pub fn set_filters(&mut self, filters: FilterSet) -> Result<bool, SearchError> {
        self.filters = filters;
        self.clamp_chip_cursor();

        if let Some(in_flight) = &mut self.in_flight {
            in_flight.derives_filters = false;
            log::debug!("Filters changed during a search, recorded only");
            return Ok(false);
        }
        let Some(text) = self.last_query.clone() else {
            return Ok(false);
        };

        self.send(SearchQuery::Text {
            text,
            filters: Some(self.filters.clone()),
        })?;
        Ok(true)
    }

    /// Remove the highlighted chip, re-running the search as `set_filters` does
    pub fn remove_selected_chip(&mut self) -> Result<bool, SearchError> {
        let mut filters = self.filters.clone();
        if filters.remove(self.chip_cursor).is_none() {
            return Ok(false);
        }
        self.set_filters(filters)
    }

    /// Search everything inside `bounds` with the current filters
    pub fn search_area(&mut self, bounds: Bounds) -> Result<(), SearchError> {
        self.send(SearchQuery::Area {
            bounds,
            filters: self.filters.clone(),
        })
    }

    fn send(&mut self, query: SearchQuery) -> Result<(), SearchError> {
        let Some(tx) = &self.request_tx else {
            return Err(SearchError::WorkerUnavailable);
        };

        let request_id = self.request_id + 1;
        let in_flight = InFlight {
            request_id,
            derives_filters: query.derives_filters(),
            area: query.is_area(),
        };

        if tx.send(SearchRequest::Run { request_id, query }).is_err() {
            self.request_tx = None;
            return Err(SearchError::WorkerUnavailable);
        }

        self.request_id = request_id;
        self.in_flight = Some(in_flight);
        Ok(())
    }

    /// Drain worker responses, returning the one for the current request.
    ///
    /// Responses to superseded requests are dropped.
    pub fn poll_response(&mut self) -> Option<SearchEvent> {
        loop {
            let rx = self.response_rx.as_ref()?;
            let response = match rx.try_recv() {
                Ok(response) => response,
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => {
                    self.response_rx = None;
                    self.request_tx = None;
                    return self
                        .in_flight
                        .take()
                        .map(|_| SearchEvent::Failed(SearchError::WorkerUnavailable.to_string()));
                }
            };

            let Some(in_flight) = self.in_flight else {
                continue;
            };
            if response.request_id() != in_flight.request_id {
                log::debug!("Discarding stale search response {}", response.request_id());
                continue;
            }
            self.in_flight = None;

            return Some(match response {
                SearchResponse::Results { outcome, .. } => {
                    if in_flight.derives_filters {
                        self.filters = outcome.filters;
                        self.clamp_chip_cursor();
                    }
                    SearchEvent::Results {
                        properties: outcome.properties,
                        area: in_flight.area,
                    }
                }
                SearchResponse::Failed { error, .. } => SearchEvent::Failed(error.to_string()),
            });
        }
    }

    /// Close the request channel so the worker exits
    pub fn shutdown(&mut self) {
        self.request_tx = None;
        self.in_flight = None;
    }

    fn clamp_chip_cursor(&mut self) {
        self.chip_cursor = self.chip_cursor.min(self.filters.len().saturating_sub(1));
    }
}

#[cfg(test)]
#[path = "search_state_tests.rs"]
mod search_state_tests;
