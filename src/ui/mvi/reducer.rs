use super::intent::Intent;
use super::state::UiState;

/// The only place a state transition happens.
///
/// `reduce` is pure: `(State, Intent) -> State`. Side effects tied to a
/// transition (scroll reset, remounting views) are run by the caller after
/// comparing the old and new state.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
