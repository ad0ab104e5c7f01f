use crate::app::Focus;
use crate::config::ViewConfig;

/// Keys of one pane (or the global keys when `pane` is None)
pub struct HelpSection {
    pub title: &'static str,
    pub pane: Option<Focus>,
    pub keys: &'static [(&'static str, &'static str)],
}

impl HelpSection {
    /// Sections for hidden panes are left out of the popup
    pub fn is_shown(&self, view: &ViewConfig) -> bool {
        match self.pane {
            Some(Focus::SearchBar) => view.search_bar,
            Some(Focus::FilterChips) => view.filter_chips,
            _ => true,
        }
    }

    /// Header plus one line per key plus the blank separator
    pub fn line_count(&self) -> u16 {
        self.keys.len() as u16 + 2
    }
}

pub const HELP_SECTIONS: &[HelpSection] = &[
    HelpSection {
        title: "GLOBAL",
        pane: None,
        keys: &[
            ("F1 or ?", "Toggle this help"),
            ("Tab/Shift+Tab", "Cycle focus between panes"),
            ("Ctrl+C", "Quit"),
            ("q", "Quit (outside the search bar)"),
        ],
    },
    HelpSection {
        title: "SEARCH BAR",
        pane: Some(Focus::SearchBar),
        keys: &[
            ("Enter", "Search; filters are derived from the text"),
            ("Esc", "Leave the search bar"),
        ],
    },
    HelpSection {
        title: "FILTER CHIPS",
        pane: Some(Focus::FilterChips),
        keys: &[
            ("←/→ or h/l", "Highlight previous/next chip"),
            ("Del/Backspace/x", "Remove chip and search again"),
        ],
    },
    HelpSection {
        title: "MAP",
        pane: Some(Focus::Map),
        keys: &[
            ("←↓↑→ or hjkl", "Pan the map"),
            ("+/-", "Zoom in/out"),
            ("n/p", "Select next/previous marker"),
            ("a", "Search this area"),
            ("Click", "Select a marker"),
        ],
    },
    HelpSection {
        title: "CARDS",
        pane: Some(Focus::Carousel),
        keys: &[
            ("←/→ or h/l", "Previous/next card"),
            ("Home/End", "First/last card"),
            ("Enter", "Select the card and fly the map to it"),
            ("Scroll wheel", "Scroll cards"),
            ("Click", "Select a card"),
        ],
    },
];

pub const HELP_FOOTER: &str = "j/k: scroll | Esc, q or ?: close";

/// Sections shown for this view, in display order
pub fn shown_sections(view: &ViewConfig) -> impl Iterator<Item = &'static HelpSection> + '_ {
    HELP_SECTIONS.iter().filter(move |s| s.is_shown(view))
}

/// First line of `pane`'s section in the popup body
pub fn section_start(view: &ViewConfig, pane: Focus) -> u16 {
    shown_sections(view)
        .take_while(|s| s.pane != Some(pane))
        .map(HelpSection::line_count)
        .sum()
}
