//! Mock account dashboard shown for `login` and `account`.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::DashboardIntent;
pub use reducer::DashboardReducer;
pub use state::{DashboardState, DashboardTab};
pub use view::render_dashboard;
