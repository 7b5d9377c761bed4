//! One frame's worth of laid-out content.
//!
//! The sticky header (the navbar, when the page has one) and the scrolling
//! body are built fresh from the app state on every draw and every focus
//! lookup. Nothing here is cached between events.

use crate::site::Section;
use crate::ui::app::App;
use crate::ui::components::Action;
use crate::ui::dashboard::render_dashboard;
use crate::ui::document::{Document, Hotspot};
use crate::ui::layout::content_width;
use crate::ui::navbar::render_navbar;
use crate::ui::views::changelog::render_changelog;
use crate::ui::views::docs::render_docs;
use crate::ui::views::downloads::render_downloads;
use crate::ui::views::features::{render_feature_deep_dive, render_feature_grid};
use crate::ui::views::footer::render_footer;
use crate::ui::views::hero::render_hero;
use crate::ui::views::not_found::render_not_found;
use crate::ui::views::pricing::render_pricing;

pub struct Screen {
    header: Option<Document>,
    body: Document,
}

impl Screen {
    pub fn build(app: &App) -> Self {
        let width = content_width(app.size().0);
        let narrow = app.is_narrow();
        let root = Document::new(width, app.focus());
        let mut header = None;
        let mut body = root.child(width);

        for section in app.composition() {
            match section {
                Section::Navbar => {
                    let mut navbar = root.child(width);
                    render_navbar(&mut navbar, app.page(), app.navbar(), narrow);
                    header = Some(navbar);
                }
                Section::Hero => render_hero(&mut body, narrow),
                Section::FeatureGrid => render_feature_grid(&mut body, narrow),
                Section::FeatureDeepDive => render_feature_deep_dive(&mut body),
                Section::Pricing => render_pricing(&mut body, narrow),
                Section::Changelog => render_changelog(&mut body, narrow),
                Section::Docs => render_docs(&mut body, narrow),
                Section::Downloads => render_downloads(&mut body, narrow),
                Section::Dashboard => render_dashboard(&mut body, app.dashboard(), narrow),
                Section::Footer => render_footer(&mut body, narrow),
                Section::NotFound => render_not_found(&mut body),
            }
        }

        Self { header, body }
    }

    pub fn header(&self) -> Option<&Document> {
        self.header.as_ref()
    }

    pub fn body(&self) -> &Document {
        &self.body
    }

    pub fn header_height(&self) -> u16 {
        self.header
            .as_ref()
            .map_or(0, |header| u16::try_from(header.len()).unwrap_or(u16::MAX))
    }

    /// Rows left for the body in a terminal `rows` tall.
    pub fn body_height(&self, rows: u16) -> u16 {
        rows.saturating_sub(self.header_height())
    }

    /// Largest useful scroll offset for a body `height` rows tall.
    pub fn max_scroll(&self, height: u16) -> u16 {
        let overflow = self.body.len().saturating_sub(height as usize);
        u16::try_from(overflow).unwrap_or(u16::MAX)
    }

    /// Number of focusable hotspots on the screen.
    pub fn action_count(&self) -> usize {
        self.body.issued()
    }

    pub fn action(&self, index: usize) -> Option<&Action> {
        self.find(index).map(|(_, hotspot)| &hotspot.action)
    }

    /// Body line holding hotspot `index`; `None` for header hotspots.
    pub fn body_line(&self, index: usize) -> Option<usize> {
        match self.find(index) {
            Some((false, hotspot)) => Some(hotspot.line),
            _ => None,
        }
    }

    fn find(&self, index: usize) -> Option<(bool, &Hotspot)> {
        let in_header = self
            .header
            .iter()
            .flat_map(|header| header.hotspots())
            .find(|hotspot| hotspot.index == index)
            .map(|hotspot| (true, hotspot));
        in_header.or_else(|| {
            self.body
                .hotspots()
                .iter()
                .find(|hotspot| hotspot.index == index)
                .map(|hotspot| (false, hotspot))
        })
    }
}
