use crate::site::Page;
use crate::ui::mvi::Reducer;
use crate::ui::router::intent::RouterIntent;
use crate::ui::router::state::{RouterState, Transition};

pub struct RouterReducer;

impl Reducer for RouterReducer {
    type State = RouterState;
    type Intent = RouterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RouterIntent::Navigate { target } => {
                let page = Page::parse(&target);
                if &page == state.page() {
                    // Same page: no change, no fade.
                    state
                } else {
                    RouterState::entering(page)
                }
            }
            RouterIntent::Tick => match state.transition() {
                Transition::Entering { remaining } if remaining > 1 => {
                    state.with_transition(Transition::Entering {
                        remaining: remaining - 1,
                    })
                }
                Transition::Entering { .. } => state.with_transition(Transition::Idle),
                Transition::Idle => state,
            },
        }
    }
}
