//! Inventory data and the client for the remote inventory service.
//!
//! ```text
//! UiCommand ──→ worker ──→ StockClient ──→ GET/POST /v1/stocks
//!                  │
//!                  └──→ AppEvent::StocksFetched(Result<InventorySnapshot, ClientError>)
//! ```

pub mod client;
pub mod error;
pub mod snapshot;
pub mod worker;

pub use client::{StockClient, DEMO_ITEM_AMOUNT, DEMO_ITEM_NAME, STOCKS_PATH};
pub use error::ClientError;
pub use snapshot::InventorySnapshot;
pub use worker::{spawn_worker, UiCommand, UiCommandSender};
