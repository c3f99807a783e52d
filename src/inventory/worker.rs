//! Bridges the synchronous UI loop and the async stock client.

use std::sync::mpsc::Sender;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::inventory::client::StockClient;
use crate::ui::events::AppEvent;

const COMMAND_CHANNEL_SIZE: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    RefreshStocks,
    CreateDemoItem,
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Spawn the command worker on the current tokio runtime.
///
/// Each command runs on its own task, so overlapping commands are neither
/// serialized nor cancelled. Results reach the UI as
/// [`AppEvent::StocksFetched`] in completion order.
pub fn spawn_worker(
    client: StockClient,
    events: Sender<AppEvent>,
) -> (UiCommandSender, JoinHandle<()>) {
    let (tx, mut rx) = mpsc::channel(COMMAND_CHANNEL_SIZE);
    let client = Arc::new(client);

    let handle = tokio::spawn(async move {
        while let Some(command) = rx.recv().await {
            let client = Arc::clone(&client);
            let events = events.clone();
            tokio::spawn(async move {
                let result = match command {
                    UiCommand::RefreshStocks => client.list_stocks().await,
                    UiCommand::CreateDemoItem => client.create_demo_then_list().await,
                };
                if events.send(AppEvent::StocksFetched(result)).is_err() {
                    tracing::trace!("Stocks result dropped (UI gone)");
                }
            });
        }
        tracing::debug!("Command channel closed, worker exiting");
    });

    (tx, handle)
}
