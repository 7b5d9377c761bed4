//! Site navigation bar: logo, page links, account/download actions and the
//! collapsible menu used below the width breakpoint.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::NavbarIntent;
pub use reducer::NavbarReducer;
pub use state::NavbarState;
pub use view::{render_navbar, wide_row_width};
