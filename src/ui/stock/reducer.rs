//! Reducer for the inventory view.

use crate::ui::mvi::Reducer;

use super::intent::StockIntent;
use super::state::StockViewState;

/// Whole-snapshot replacement. No merging, no diffing, no shape checks.
pub struct StockReducer;

impl Reducer for StockReducer {
    type State = StockViewState;
    type Intent = StockIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StockIntent::Replace { snapshot } => StockViewState::with_snapshot(snapshot),
            StockIntent::FetchFailed => state,
        }
    }
}
