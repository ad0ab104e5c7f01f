use std::time::Instant;

use crate::carousel::{CarouselState, ScrollableList, SelectionSync};
use crate::config::{Config, ViewConfig};
use crate::help::HelpPopupState;
use crate::layout::LayoutRegions;
use crate::map::MapState;
use crate::notification::{NotificationKind, NotificationState};
use crate::property::geo::centroid;
use crate::property::{Coordinate, Dataset, Property, PropertyId, SearchLocation};
use crate::search::{CatalogBackend, SearchEvent, SearchState};

pub const NO_LOCATION_MESSAGE: &str = "No location for this property";

/// Which pane receives key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    SearchBar,
    FilterChips,
    Map,
    Carousel,
}

const FOCUS_ORDER: [Focus; 4] = [
    Focus::SearchBar,
    Focus::FilterChips,
    Focus::Map,
    Focus::Carousel,
];

impl Focus {
    fn is_shown(self, view: &ViewConfig) -> bool {
        match self {
            Focus::SearchBar => view.search_bar,
            Focus::FilterChips => view.filter_chips,
            Focus::Map | Focus::Carousel => true,
        }
    }

    /// Next shown pane in tab order, wrapping around
    pub fn cycle(self, view: &ViewConfig, forward: bool) -> Focus {
        let len = FOCUS_ORDER.len();
        let start = FOCUS_ORDER.iter().position(|f| *f == self).unwrap_or(0);
        (1..=len)
            .map(|step| {
                let i = if forward {
                    (start + step) % len
                } else {
                    (start + len - step) % len
                };
                FOCUS_ORDER[i]
            })
            .find(|f| f.is_shown(view))
            .unwrap_or(self)
    }
}

/// Application state
pub struct App {
    /// Current result sequence in carousel order
    pub properties: Vec<Property>,
    pub sync: SelectionSync,
    pub map: MapState,
    pub carousel: CarouselState,
    pub search: SearchState,
    pub notification: NotificationState,
    pub help: HelpPopupState,
    pub layout_regions: LayoutRegions,
    pub focus: Focus,
    pub view: ViewConfig,
    /// City the dataset was searched in, shown in the map title
    pub location: Option<SearchLocation>,
    pub should_quit: bool,
    fallback_center: Coordinate,
}

impl App {
    /// App answering searches from the dataset's own catalog
    pub fn new(dataset: Dataset, config: &Config) -> Self {
        let backend = CatalogBackend::new(dataset.properties.clone(), config.search.limit);
        let search = SearchState::with_backend(Box::new(backend));
        Self::with_search(dataset, config, search)
    }

    pub fn with_search(dataset: Dataset, config: &Config, search: SearchState) -> Self {
        let Dataset {
            location,
            mut properties,
        } = dataset;
        properties.truncate(config.search.limit.max(1));

        let fallback_center = location
            .as_ref()
            .map(SearchLocation::coordinate)
            .filter(Coordinate::is_valid)
            .unwrap_or(config.map.fallback_center);
        let center =
            centroid(properties.iter().filter_map(|p| p.location)).unwrap_or(fallback_center);

        let mut map = MapState::new(center, config.map.default_zoom);
        map.set_markers(&properties);

        let focus = if config.view.search_bar {
            Focus::SearchBar
        } else {
            Focus::Carousel
        };

        Self {
            carousel: CarouselState::new(properties.len()),
            properties,
            sync: SelectionSync::from_config(config),
            map,
            search,
            notification: NotificationState::new(),
            help: HelpPopupState::new(),
            layout_regions: LayoutRegions::new(),
            focus,
            view: config.view.clone(),
            location,
            should_quit: false,
            fallback_center,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn selected_property(&self) -> Option<&Property> {
        let id = self.sync.selected()?;
        self.properties.iter().find(|p| p.id == id)
    }

    pub fn active_card(&self) -> usize {
        self.carousel.active_index()
    }

    /// Advance timers and apply worker results. Called once per loop turn.
    pub fn tick(&mut self, now: Instant) {
        self.notification.expire(now);
        self.poll_search(now);
        self.sync
            .tick(&self.properties, &mut self.map, &mut self.carousel, now);
        self.pump_list_events(now);
    }

    /// Deliver queued carousel position changes to the controller
    pub fn pump_list_events(&mut self, now: Instant) {
        while let Some(index) = self.carousel.take_index_change() {
            self.sync.on_scroll_position_changed(index, now);
        }
    }

    /// Card or marker click
    pub fn click_property(&mut self, id: PropertyId, now: Instant) {
        let centered = self
            .sync
            .click(id, &self.properties, &mut self.map, &mut self.carousel);
        self.pump_list_events(now);

        let unlocated = self
            .properties
            .iter()
            .any(|p| p.id == id && p.location.is_none());
        if centered.is_none() && unlocated {
            self.notification
                .show(NO_LOCATION_MESSAGE, NotificationKind::Info);
        }
    }

    /// Click on the card at `index`
    pub fn click_card(&mut self, index: usize, now: Instant) {
        if let Some(id) = self.properties.get(index).map(|p| p.id) {
            self.click_property(id, now);
        }
    }

    /// User scroll of the carousel by `delta` cards
    pub fn scroll_carousel(&mut self, delta: isize, now: Instant) {
        self.carousel.scroll_by(delta);
        self.pump_list_events(now);
    }

    pub fn submit_search(&mut self) {
        match self.search.submit() {
            Ok(true) => log::debug!("Search submitted: {:?}", self.search.query()),
            Ok(false) => {}
            Err(e) => log::debug!("Search skipped: {}", e),
        }
    }

    /// Fill the search bar with `query` and run it
    pub fn run_query(&mut self, query: &str) {
        self.search.set_query(query);
        self.submit_search();
    }

    pub fn remove_selected_chip(&mut self) {
        if let Err(e) = self.search.remove_selected_chip() {
            log::debug!("Filter re-run skipped: {}", e);
        }
    }

    /// Search inside the bounds the user moved the map to
    pub fn search_this_area(&mut self) {
        if self.search.is_searching() {
            return;
        }
        let Some(bounds) = self.map.pending_bounds() else {
            return;
        };
        match self.search.search_area(bounds) {
            Ok(()) => self.map.clear_pending_bounds(),
            Err(e) => log::debug!("Area search skipped: {}", e),
        }
    }

    fn poll_search(&mut self, now: Instant) {
        match self.search.poll_response() {
            Some(SearchEvent::Results { properties, area }) => {
                self.apply_results(properties, area, now);
            }
            Some(SearchEvent::Failed(message)) => {
                // Last-known properties stay on screen
                self.notification.show(message, NotificationKind::Error);
            }
            None => {}
        }
    }

    /// Adopt a new property sequence from the search collaborator
    pub fn apply_results(&mut self, properties: Vec<Property>, area: bool, now: Instant) {
        log::debug!("Applying {} search results", properties.len());
        self.properties = properties;
        self.map.set_markers(&self.properties);
        if area {
            self.map.clear_pending_bounds();
        } else {
            self.map.fit_markers(self.fallback_center);
        }

        self.sync
            .replace_properties(&self.properties, &mut self.map, &mut self.carousel);
        self.pump_list_events(now);
    }

    /// End of session: no timer may fire and the worker is released
    pub fn teardown(&mut self) {
        self.sync.teardown();
        self.search.shutdown();
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
