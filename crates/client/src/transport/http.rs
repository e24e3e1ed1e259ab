use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use item_browser_domain::ItemId;
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;

use super::{ItemsPage, ItemsTransport, PageQuery};
use crate::config::ClientConfig;
use crate::errors::TransportError;

// =============================================================================
// Request Bodies
// =============================================================================

#[derive(Serialize)]
struct SelectBody {
    id: ItemId,
    selected: bool,
}

#[derive(Serialize)]
struct ReorderBody {
    items: Vec<ItemReference>,
}

#[derive(Serialize)]
struct ItemReference {
    id: ItemId,
}

// =============================================================================
// HttpTransport
// =============================================================================

/// Talks to the item browser API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpTransport {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Reuses an existing client and its connection pool.
    #[must_use]
    pub fn with_client(client: Client, config: &ClientConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            timeout: config.timeout,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, TransportError> {
        let response = request
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|error| self.map_send_error(&error))?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else if status.is_server_error() {
            Err(TransportError::ServiceUnavailable(format!("HTTP {status}")))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(TransportError::Rejected {
                status: status.as_u16(),
                message,
            })
        }
    }

    #[allow(clippy::cast_possible_truncation)] // Timeout in ms will not exceed u64
    fn map_send_error(&self, error: &reqwest::Error) -> TransportError {
        if error.is_timeout() {
            TransportError::Timeout(self.timeout.as_millis() as u64)
        } else if error.is_connect() {
            TransportError::ConnectionFailed(error.to_string())
        } else {
            TransportError::ServiceUnavailable(error.to_string())
        }
    }

    async fn get_page(&self, query: PageQuery) -> Result<ItemsPage, TransportError> {
        let request = self.client.get(self.url("/api/items")).query(&[
            ("page", query.page.to_string()),
            ("limit", query.limit.to_string()),
            ("search", query.search),
        ]);

        self.send(request)
            .await?
            .json()
            .await
            .map_err(|error| TransportError::Decode(error.to_string()))
    }

    async fn post_json<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), TransportError> {
        let request = self.client.post(self.url(path)).json(body);
        self.send(request).await.map(drop)
    }
}

impl ItemsTransport for HttpTransport {
    fn fetch_page(&self, query: PageQuery) -> BoxFuture<'_, Result<ItemsPage, TransportError>> {
        self.get_page(query).boxed()
    }

    fn set_selected(
        &self,
        id: ItemId,
        selected: bool,
    ) -> BoxFuture<'_, Result<(), TransportError>> {
        async move {
            self.post_json("/api/select", &SelectBody { id, selected })
                .await
        }
        .boxed()
    }

    fn reorder(&self, ids: Vec<ItemId>) -> BoxFuture<'_, Result<(), TransportError>> {
        async move {
            let body = ReorderBody {
                items: ids.into_iter().map(|id| ItemReference { id }).collect(),
            };
            self.post_json("/api/reorder", &body).await
        }
        .boxed()
    }
}
