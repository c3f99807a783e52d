//! Unidirectional data flow primitives for the UI layer.
//!
//! ```text
//! AppEvent ──→ Intent ──→ Reducer ──→ State ──→ draw()
//! ```
//!
//! Reducers are the only code allowed to produce a new state. Side
//! effects (HTTP, logging) stay in `App`, around the dispatch.

/// View state. Cloneable and comparable so tests can assert transitions.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Something that happened: a key press turned into an action, or an
/// async result arriving from the worker.
pub trait Intent: Send + 'static {}

/// Pure transition `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Run `R` over the state in `slot`, leaving the new state behind.
pub fn dispatch<R: Reducer>(slot: &mut R::State, intent: R::Intent) {
    *slot = R::reduce(std::mem::take(slot), intent);
}
