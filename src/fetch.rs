//! HTTP plumbing for talking to the MBTA v3 API.
//!
//! The [`HttpClient`] trait keeps the network edge mockable; production code
//! uses [`BasicClient`], a thin wrapper around [`reqwest::Client`].

use anyhow::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: reqwest::Request) -> reqwest::Result<reqwest::Response>;
}

pub struct BasicClient(reqwest::Client);

impl BasicClient {
    pub fn new() -> Self {
        Self(reqwest::Client::new())
    }
}

impl Default for BasicClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for BasicClient {
    async fn execute(&self, req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        self.0.execute(req).await
    }
}

/// Issues a single GET and decodes the JSON response body.
///
/// # Errors
///
/// Returns an error if the URL is invalid, the request fails, or the body is
/// not valid JSON for `T`. Failures are not retried.
pub async fn fetch_json<C: HttpClient, T: DeserializeOwned>(client: &C, url: &str) -> Result<T> {
    debug!(url, "Fetching from API");
    let req = reqwest::Request::new(reqwest::Method::GET, url.parse()?);

    let resp = client.execute(req).await?;
    Ok(resp.json().await?)
}
