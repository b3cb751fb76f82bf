use async_trait::async_trait;
use reqwest::Client;

use statusgate_core::error::{Result, StatusGateError};

use super::{error_chain, WebsiteProbe};

/// Single GET to the caller-supplied URL. The body is never read.
pub struct HttpWebsiteProbe {
    client: Client,
}

impl HttpWebsiteProbe {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WebsiteProbe for HttpWebsiteProbe {
    async fn probe(&self, url: &str) -> Result<u16> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| StatusGateError::Upstream(error_chain(&e)))?;
        Ok(resp.status().as_u16())
    }
}
