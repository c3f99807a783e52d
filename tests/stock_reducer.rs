mod common;

use common::snapshot;
use stockview::inventory::InventorySnapshot;
use stockview::ui::mvi::{dispatch, Reducer};
use stockview::ui::stock::{StockIntent, StockReducer, StockViewState};

#[test]
fn initial_state_is_empty_mapping() {
    let state = StockViewState::default();
    assert_eq!(state.snapshot(), &InventorySnapshot::new());
}

#[test]
fn replace_sets_exact_mapping() {
    let state = StockReducer::reduce(
        StockViewState::default(),
        StockIntent::Replace {
            snapshot: snapshot(&[("apples", 3), ("bananas", 5)]),
        },
    );
    assert_eq!(state.snapshot(), &snapshot(&[("apples", 3), ("bananas", 5)]));
}

#[test]
fn failure_after_success_is_noop() {
    let mut state = StockViewState::default();
    dispatch::<StockReducer>(
        &mut state,
        StockIntent::Replace {
            snapshot: snapshot(&[("x", 0)]),
        },
    );
    let before = state.clone();
    dispatch::<StockReducer>(&mut state, StockIntent::FetchFailed);
    assert_eq!(state, before);
}
