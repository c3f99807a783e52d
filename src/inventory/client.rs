use reqwest::{Client, Response};
use serde::Serialize;

use crate::inventory::error::ClientError;
use crate::inventory::snapshot::InventorySnapshot;

pub const STOCKS_PATH: &str = "/v1/stocks";
pub const DEMO_ITEM_NAME: &str = "demo";
pub const DEMO_ITEM_AMOUNT: u64 = 1;

#[derive(Debug, Serialize)]
struct NewStock<'a> {
    name: &'a str,
    amount: u64,
}

/// HTTP client for the two stock endpoints.
///
/// Calls have no timeout, retry or cancellation. Every call is
/// independent, so overlapping calls may complete in any order.
#[derive(Debug, Clone)]
pub struct StockClient {
    client: Client,
    stocks_url: String,
}

impl StockClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        let stocks_url = format!("{}{}", base_url.trim_end_matches('/'), STOCKS_PATH);
        Self { client, stocks_url }
    }

    pub fn stocks_url(&self) -> &str {
        &self.stocks_url
    }

    /// `GET /v1/stocks`
    pub async fn list_stocks(&self) -> Result<InventorySnapshot, ClientError> {
        tracing::debug!(url = %self.stocks_url, "Listing stocks");
        let resp = self
            .client
            .get(&self.stocks_url)
            .send()
            .await
            .map_err(|source| self.connection_error(source))?;
        let resp = ensure_success(resp).await?;

        let snapshot: InventorySnapshot = resp
            .json()
            .await
            .map_err(|source| ClientError::Decode { source })?;
        tracing::debug!(items = snapshot.len(), "Stocks listed");
        Ok(snapshot)
    }

    /// `POST /v1/stocks` with the fixed demo payload. The response body is
    /// not inspected.
    pub async fn create_demo_item(&self) -> Result<(), ClientError> {
        tracing::debug!(url = %self.stocks_url, "Creating demo item");
        let body = NewStock {
            name: DEMO_ITEM_NAME,
            amount: DEMO_ITEM_AMOUNT,
        };
        let resp = self
            .client
            .post(&self.stocks_url)
            .json(&body)
            .send()
            .await
            .map_err(|source| self.connection_error(source))?;
        ensure_success(resp).await?;
        Ok(())
    }

    /// Creates the demo item, then lists stocks exactly once whatever the
    /// outcome of the write.
    pub async fn create_demo_then_list(&self) -> Result<InventorySnapshot, ClientError> {
        if let Err(err) = self.create_demo_item().await {
            tracing::warn!(kind = err.kind(), "Demo item creation failed: {}", err);
        }
        self.list_stocks().await
    }

    fn connection_error(&self, source: reqwest::Error) -> ClientError {
        ClientError::Connection {
            url: self.stocks_url.clone(),
            source,
        }
    }
}

async fn ensure_success(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ClientError::Status {
        status: status.as_u16(),
        body,
    })
}
