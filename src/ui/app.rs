use crate::inventory::{ClientError, InventorySnapshot, UiCommand, UiCommandSender};
use crate::ui::mvi::dispatch;
use crate::ui::stock::{StockIntent, StockReducer, StockViewState};

/// Top-level view. Owns the inventory view state and the capability to
/// send commands to the worker.
pub struct App {
    should_quit: bool,
    service_url: String,
    /// Inventory view state (MVI pattern).
    stocks: StockViewState,
    command_sender: Option<UiCommandSender>,
}

impl App {
    pub fn new(service_url: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            service_url: service_url.into(),
            stocks: StockViewState::default(),
            command_sender: None,
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    pub fn snapshot(&self) -> &InventorySnapshot {
        self.stocks.snapshot()
    }

    pub fn on_tick(&mut self) {}

    /// Issue a list call.
    pub fn request_refresh(&mut self) -> bool {
        self.send_command(UiCommand::RefreshStocks)
    }

    /// Issue the demo write followed by a list call. Not gated on
    /// requests already in flight.
    pub fn request_create_demo(&mut self) -> bool {
        self.send_command(UiCommand::CreateDemoItem)
    }

    /// Feed a list outcome back into the view state.
    pub fn on_stocks_fetched(&mut self, result: Result<InventorySnapshot, ClientError>) {
        match result {
            Ok(snapshot) => {
                tracing::debug!(items = snapshot.len(), "Replacing inventory snapshot");
                self.dispatch_stocks(StockIntent::Replace { snapshot });
            }
            Err(err) => {
                tracing::warn!(kind = err.kind(), "Stock list failed: {}", err);
                self.dispatch_stocks(StockIntent::FetchFailed);
            }
        }
    }

    fn dispatch_stocks(&mut self, intent: StockIntent) {
        dispatch::<StockReducer>(&mut self.stocks, intent);
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            tracing::debug!(?command, "No worker attached, command dropped");
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("Command send failed: {}", err);
                false
            }
        }
    }
}
