use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app_state::App;
use crate::carousel::card::CardDensity;
use crate::carousel::carousel_render::{carousel_height, render_carousel};
use crate::help::{help_line_render, help_popup_render};
use crate::map::map_render::render_map;
use crate::notification::render_notification;
use crate::search::search_render::{self, FILTER_CHIPS_HEIGHT, SEARCH_BAR_HEIGHT};

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let density = CardDensity::resolve(self.view.density, frame.area().height);

        let mut constraints = Vec::with_capacity(5);
        if self.view.search_bar {
            constraints.push(Constraint::Length(SEARCH_BAR_HEIGHT));
        }
        if self.view.filter_chips {
            constraints.push(Constraint::Length(FILTER_CHIPS_HEIGHT));
        }
        constraints.push(Constraint::Min(3));
        constraints.push(Constraint::Length(carousel_height(density)));
        constraints.push(Constraint::Length(1));

        let areas = Layout::vertical(constraints).split(frame.area());
        let mut next = areas.iter().copied();

        self.layout_regions.clear();
        self.layout_regions.search_bar = self.view.search_bar.then(|| next.next()).flatten();
        self.layout_regions.filter_chips = self.view.filter_chips.then(|| next.next()).flatten();
        let (Some(map_area), Some(carousel_area), Some(help_area)) =
            (next.next(), next.next(), next.next())
        else {
            return;
        };
        self.layout_regions.map = Some(map_area);
        self.layout_regions.carousel = Some(carousel_area);

        if let Some(area) = self.layout_regions.search_bar {
            search_render::render_bar(self, frame, area);
        }
        if let Some(area) = self.layout_regions.filter_chips {
            search_render::render_chips(self, frame, area);
        }
        render_map(self, frame, map_area);
        render_carousel(self, frame, carousel_area);
        help_line_render::render_line(self, frame, help_area);

        if self.help.visible {
            help_popup_render::render_popup(self, frame);
        }

        render_notification(frame, &self.notification);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
