use crate::site::{compose, Page, Section};
use crate::ui::mvi::UiState;

/// Ticks the incoming page is drawn dimmed after a page change.
pub const FADE_TICKS: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transition {
    #[default]
    Idle,
    Entering { remaining: u8 },
}

/// Owner of the current page identifier.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouterState {
    page: Page,
    transition: Transition,
}

impl UiState for RouterState {}

impl RouterState {
    /// Start on `page` without a fade.
    pub fn new(page: Page) -> Self {
        Self {
            page,
            transition: Transition::Idle,
        }
    }

    pub(super) fn entering(page: Page) -> Self {
        Self {
            page,
            transition: Transition::Entering {
                remaining: FADE_TICKS,
            },
        }
    }

    pub(super) fn with_transition(self, transition: Transition) -> Self {
        Self { transition, ..self }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }

    pub fn is_fading(&self) -> bool {
        matches!(self.transition, Transition::Entering { .. })
    }

    /// Sections selected for the current page.
    pub fn composition(&self) -> Vec<Section> {
        compose(&self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_home_and_idle() {
        let state = RouterState::default();
        assert_eq!(state.page(), &Page::Home);
        assert!(!state.is_fading());
    }

    #[test]
    fn composition_follows_page() {
        let state = RouterState::new(Page::Docs);
        assert!(!state.composition().contains(&Section::Footer));
    }
}
