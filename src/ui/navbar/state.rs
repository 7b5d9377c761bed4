use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavbarState {
    /// Body scrolled past the threshold; the bar draws its bottom rule.
    pub scrolled: bool,
    pub mobile_open: bool,
}

impl UiState for NavbarState {}
