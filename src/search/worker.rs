//! Search Worker Thread
//!
//! Runs searches in a background thread so typing and scrolling never wait
//! on the backend. Every request carries an id; the main thread discards
//! responses whose id is no longer current.

use std::sync::mpsc::{Receiver, Sender};

use super::backend::{SearchBackend, SearchError, SearchOutcome, SearchQuery};

#[derive(Debug, Clone)]
pub enum SearchRequest {
    Run { request_id: u64, query: SearchQuery },
}

#[derive(Debug, Clone)]
pub enum SearchResponse {
    Results {
        request_id: u64,
        outcome: SearchOutcome,
    },
    Failed {
        request_id: u64,
        error: SearchError,
    },
}

impl SearchResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            SearchResponse::Results { request_id, .. } => *request_id,
            SearchResponse::Failed { request_id, .. } => *request_id,
        }
    }
}

/// Spawn the search worker thread
///
/// The thread owns the backend and exits once the request channel closes.
pub fn spawn_worker(
    backend: Box<dyn SearchBackend>,
    request_rx: Receiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    std::thread::spawn(move || {
        worker_loop(backend.as_ref(), request_rx, response_tx);
    });
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(
    backend: &dyn SearchBackend,
    request_rx: Receiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        let SearchRequest::Run { request_id, query } = latest_request(request, &request_rx);
        log::debug!("Running search request {}: {:?}", request_id, query);

        let response = match backend.search(&query) {
            Ok(outcome) => {
                log::debug!(
                    "Search request {} returned {} properties",
                    request_id,
                    outcome.properties.len()
                );
                SearchResponse::Results {
                    request_id,
                    outcome,
                }
            }
            Err(error) => {
                log::warn!("Search request {} failed: {}", request_id, error);
                SearchResponse::Failed { request_id, error }
            }
        };

        if response_tx.send(response).is_err() {
            // Main thread gone
            break;
        }
    }

    log::debug!("Search worker thread shutting down");
}

/// Skip requests that were already superseded while queued
fn latest_request(first: SearchRequest, request_rx: &Receiver<SearchRequest>) -> SearchRequest {
    let mut latest = first;
    while let Ok(next) = request_rx.try_recv() {
        let SearchRequest::Run { request_id, .. } = &latest;
        log::debug!("Dropping superseded search request {}", request_id);
        latest = next;
    }
    latest
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
