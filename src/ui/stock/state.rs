use crate::inventory::InventorySnapshot;
use crate::ui::mvi::UiState;

/// Last successfully fetched snapshot. Empty until the first list call
/// succeeds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StockViewState {
    snapshot: InventorySnapshot,
}

impl UiState for StockViewState {}

impl StockViewState {
    pub fn snapshot(&self) -> &InventorySnapshot {
        &self.snapshot
    }

    pub(super) fn with_snapshot(snapshot: InventorySnapshot) -> Self {
        Self { snapshot }
    }
}
