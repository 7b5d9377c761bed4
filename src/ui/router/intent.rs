use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterIntent {
    /// Switch to the page with this identifier. Not validated: unknown
    /// identifiers select the not-found page.
    Navigate { target: String },
    /// Advance the page fade by one tick.
    Tick,
}

impl Intent for RouterIntent {}
