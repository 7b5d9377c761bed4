use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarIntent {
    /// Body scroll offset changed.
    Scrolled { offset: u16, threshold: u16 },
    ToggleMenu,
    CloseMenu,
}

impl Intent for NavbarIntent {}
