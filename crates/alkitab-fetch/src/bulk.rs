//! Bulk document transport.

use serde_json::Value;

use crate::http::{check_response, json_body};
use crate::{FetchClient, FetchError};

impl FetchClient {
    /// GET the bulk document and parse it as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request fails, the status is not a
    /// success, or the body is not JSON.
    pub async fn fetch_bulk_document(&self) -> Result<Value, FetchError> {
        let url = &self.endpoints.bulk_url;
        tracing::info!(%url, "fetching bulk document");
        let resp = self
            .http
            .get(url)
            .timeout(self.endpoints.bulk_timeout)
            .send()
            .await?;
        json_body(check_response(resp).await?).await
    }
}
