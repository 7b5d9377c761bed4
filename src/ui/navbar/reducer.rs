use crate::ui::mvi::Reducer;
use crate::ui::navbar::intent::NavbarIntent;
use crate::ui::navbar::state::NavbarState;

pub struct NavbarReducer;

impl Reducer for NavbarReducer {
    type State = NavbarState;
    type Intent = NavbarIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavbarIntent::Scrolled { offset, threshold } => NavbarState {
                scrolled: offset > threshold,
                ..state
            },
            NavbarIntent::ToggleMenu => NavbarState {
                mobile_open: !state.mobile_open,
                ..state
            },
            NavbarIntent::CloseMenu => NavbarState {
                mobile_open: false,
                ..state
            },
        }
    }
}
