//! Inventory view feature module.
//!
//! Holds the snapshot shown in the list body.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Current snapshot
//! - `intent.rs` - Fetch outcomes (Replace, FetchFailed)
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::StockIntent;
pub use reducer::StockReducer;
pub use state::StockViewState;
