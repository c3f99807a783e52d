//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use std::path::PathBuf;
use stockview::inventory::InventorySnapshot;
use stockview::ui::events::AppEvent;
use stockview::ui::App;
use std::sync::mpsc::Receiver;
use std::time::Duration;
use tempfile::TempDir;

pub use mock_service::{CapturedRequest, MockResponse, MockService};

pub fn snapshot(items: &[(&str, i64)]) -> InventorySnapshot {
    items.iter().map(|(name, amount)| (*name, *amount)).collect()
}

/// Write `content` to a `config.toml` in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Block until the next `StocksFetched` event and apply it to `app`.
///
/// Call from a multi-threaded tokio test so the worker keeps running.
pub fn pump_fetch(app: &mut App, events: &Receiver<AppEvent>, timeout: Duration) {
    loop {
        match events.recv_timeout(timeout) {
            Ok(AppEvent::StocksFetched(result)) => {
                app.on_stocks_fetched(result);
                return;
            }
            Ok(_) => continue,
            Err(err) => panic!("No stocks result within {:?}: {}", timeout, err),
        }
    }
}
