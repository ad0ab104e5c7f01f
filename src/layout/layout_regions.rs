use ratatui::layout::Rect;

/// Clickable parts of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    SearchBar,
    FilterChips,
    Map,
    Carousel,
}

/// Where each component was drawn in the last frame. Hidden components
/// (search bar or chips switched off in config) stay `None`.
#[derive(Debug, Clone, Default)]
pub struct LayoutRegions {
    pub search_bar: Option<Rect>,
    pub filter_chips: Option<Rect>,
    pub map: Option<Rect>,
    pub carousel: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn area_of(&self, region: Region) -> Option<Rect> {
        match region {
            Region::SearchBar => self.search_bar,
            Region::FilterChips => self.filter_chips,
            Region::Map => self.map,
            Region::Carousel => self.carousel,
        }
    }
}
