//! Model-View-Intent (MVI) primitives.
//!
//! Every piece of view state in the site (the router, the navbar toggles,
//! the dashboard tab) is a [`UiState`] changed only by its [`Reducer`].
//!
//! ```text
//! Hotspot / key ──→ Intent ──→ Reducer ──→ State ──→ Screen
//!        ↑                                            │
//!        └────────────────────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
