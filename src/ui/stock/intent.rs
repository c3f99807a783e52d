//! Intents for the inventory view.

use crate::inventory::InventorySnapshot;
use crate::ui::mvi::Intent;

#[derive(Debug)]
pub enum StockIntent {
    /// A list call succeeded. The snapshot replaces the current one.
    Replace { snapshot: InventorySnapshot },

    /// A list call failed. The current snapshot is kept.
    FetchFailed,
}

impl Intent for StockIntent {}
