use std::time::Duration;

use crate::errors::api::catalog::CatalogErrorResponse;
use crate::errors::ClientError;
use crate::types::dto::items::ItemRecord;
use crate::types::internal::AttributeBounds;

/// One fetch attempt must resolve within this window
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client for the item catalog service.
///
/// Fetches are bounded by [`REQUEST_TIMEOUT`] and retried once on
/// connect/timeout-class failures before a failure is reported.
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client for a service base URL such as `http://localhost:3000`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the items that fit within the given attribute bounds
    pub async fn fetch_items(
        &self,
        bounds: &AttributeBounds,
    ) -> Result<Vec<ItemRecord>, ClientError> {
        let url = format!("{}/items", self.base_url);
        let query = Self::query_pairs(bounds);

        let response = match self
            .http
            .get(&url)
            .query(&query)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response,
            // One retry for transient connectivity failures only
            Err(err) if err.is_connect() || err.is_timeout() => {
                tracing::debug!("Retrying item fetch after transient failure: {}", err);
                self.http
                    .get(&url)
                    .query(&query)
                    .timeout(REQUEST_TIMEOUT)
                    .send()
                    .await
                    .map_err(|e| ClientError::Network(e.to_string()))?
            }
            Err(err) => return Err(ClientError::Network(err.to_string())),
        };

        Self::read_response(response).await
    }

    async fn read_response(response: reqwest::Response) -> Result<Vec<ItemRecord>, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<CatalogErrorResponse>().await {
                Ok(body) => body.message,
                Err(_) => format!("item service returned status {}", status.as_u16()),
            };
            return Err(ClientError::Service {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<Vec<ItemRecord>>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    fn query_pairs(bounds: &AttributeBounds) -> Vec<(&'static str, String)> {
        bounds
            .iter()
            .map(|(attribute, bound)| (attribute.short_name(), bound.to_string()))
            .collect()
    }
}
