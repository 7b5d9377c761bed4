//! Page routing state.

mod intent;
mod reducer;
mod state;

pub use intent::RouterIntent;
pub use reducer::RouterReducer;
pub use state::{RouterState, Transition, FADE_TICKS};
