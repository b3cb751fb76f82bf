//! Outbound collaborators (Minecraft status API, generic website probe).
//!
//! Both sit behind traits so the router can be built with fakes in tests.
//! The real implementations share one pooled `reqwest::Client`.

pub mod mcstatus;
pub mod website;

use std::error::Error as StdError;

use async_trait::async_trait;

use statusgate_core::error::{Result, StatusGateError};
use statusgate_core::McStatus;

use crate::config::UpstreamSection;

pub use mcstatus::HttpMcStatusLookup;
pub use website::HttpWebsiteProbe;

/// Looks up a Minecraft server's status by address.
#[async_trait]
pub trait McStatusLookup: Send + Sync {
    async fn lookup(&self, address: &str) -> Result<McStatus>;
}

/// Fetches an arbitrary URL and reports the HTTP status it answered with.
/// Transport failures (bad URL, DNS, refused connection) are errors.
#[async_trait]
pub trait WebsiteProbe: Send + Sync {
    async fn probe(&self, url: &str) -> Result<u16>;
}

/// Build the shared outbound client. Transport defaults apply for timeouts.
pub fn build_http_client(cfg: &UpstreamSection) -> Result<reqwest::Client> {
    let redirect = if cfg.follow_redirects {
        reqwest::redirect::Policy::default()
    } else {
        reqwest::redirect::Policy::none()
    };

    reqwest::Client::builder()
        .user_agent(cfg.user_agent.clone())
        .redirect(redirect)
        .build()
        .map_err(|e| StatusGateError::Internal(format!("http client build failed: {e}")))
}

/// Flatten an error and its sources into one line, outermost first.
pub(crate) fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut out = err.to_string();
    let mut cur = err.source();
    while let Some(e) = cur {
        let msg = e.to_string();
        if !out.ends_with(&msg) {
            out.push_str(": ");
            out.push_str(&msg);
        }
        cur = e.source();
    }
    out
}
