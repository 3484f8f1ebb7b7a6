//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Fetch cycle =====
        Action::ProvidersFetch => {
            // Existing results stay visible while the new cycle is in flight.
            // A fetch started while one is running is not guarded against;
            // the last settle to arrive wins.
            state.is_loading = true;
            DispatchResult::changed_with(Effect::FetchProviders)
        }

        Action::ProvidersDidSettle(reports) => {
            state.results = reports;
            state.is_loading = false;
            let last = state.results.len().saturating_sub(1);
            state.selected = state.selected.min(last);
            DispatchResult::changed()
        }

        // ===== Pins =====
        Action::PinToggle(provider) => {
            if let Some(position) = state.pinned.iter().position(|pin| *pin == provider) {
                state.pinned.remove(position);
            } else {
                state.pinned.push(provider);
            }
            DispatchResult::changed()
        }

        // ===== Table cursor =====
        Action::RowNext => {
            let last = state.results.len().saturating_sub(1);
            if state.selected < last {
                state.selected += 1;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::RowPrev => {
            if state.selected > 0 {
                state.selected -= 1;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== Global actions =====
        Action::Quit => DispatchResult::unchanged(),
    }
}
