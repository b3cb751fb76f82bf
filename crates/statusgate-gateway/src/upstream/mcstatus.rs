use async_trait::async_trait;
use reqwest::{Client, Url};

use statusgate_core::error::{Result, StatusGateError};
use statusgate_core::McStatus;

use super::{error_chain, McStatusLookup};

/// mcstatus.io-compatible lookup: `GET <base>/<address>`, body parsed as JSON.
///
/// The upstream status code is not inspected. Whatever JSON comes back is the
/// answer, including upstream error objects.
pub struct HttpMcStatusLookup {
    client: Client,
    base: Url,
}

impl HttpMcStatusLookup {
    pub fn new(client: Client, base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| StatusGateError::Config(format!("mcstatus base url: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(StatusGateError::Config(format!(
                "mcstatus base url cannot take path segments: {base_url}"
            )));
        }
        Ok(Self { client, base })
    }

    /// Address is appended as a single, percent-encoded path segment.
    pub fn url_for(&self, address: &str) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| StatusGateError::Internal("mcstatus base url lost its path".into()))?
            .pop_if_empty()
            .push(address);
        Ok(url)
    }
}

#[async_trait]
impl McStatusLookup for HttpMcStatusLookup {
    async fn lookup(&self, address: &str) -> Result<McStatus> {
        let url = self.url_for(address)?;
        tracing::debug!(%url, "mcstatus lookup");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| StatusGateError::Upstream(error_chain(&e)))?;

        let body = resp
            .bytes()
            .await
            .map_err(|e| StatusGateError::Upstream(error_chain(&e)))?;

        McStatus::from_slice(&body)
    }
}
