//! HTTP client for the analysis backend.
//!
//! Thin request/response plumbing: one method per endpoint, a shared
//! timeout, and extraction of the backend's structured `detail` message
//! from failure responses so the UI never shows a raw transport error
//! when the server said something better.

use anyhow::{anyhow, Context, Result};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::env;
use tokio::time::{timeout, Duration};
use tracing::{debug, info};
use url::Url;

use crate::types::{AnalyzeResponse, Article, Cluster};
use crate::TARGET_WEB_REQUEST;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";
pub const API_URL_ENV: &str = "NEWSLENS_API_URL";

/// Body of `POST /search`. Optional fields are omitted from the JSON
/// entirely when unset; dates are ISO-8601 strings passed through to the
/// backend.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Body of `POST /search/analyze`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
}

/// Structured error payload the backend attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Creates a client against the given base URL (for example
    /// `http://localhost:8000/api/v1`).
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url)
            .with_context(|| format!("invalid API base URL: {}", base_url))?;
        // Url::join treats the last path segment as a file unless the
        // path ends with a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let http = reqwest::Client::builder()
            .gzip(true)
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;
        Ok(ApiClient { http, base_url })
    }

    /// Creates a client from `NEWSLENS_API_URL`, defaulting to the local
    /// development backend.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(&base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `POST /search`: plain article search.
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<Article>> {
        self.post_json("search", request).await
    }

    /// `POST /search/analyze`: full clustering and bias analysis pipeline.
    pub async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse> {
        self.post_json("search/analyze", request).await
    }

    /// `GET /search/clusters/{id}`: one analyzed cluster.
    pub async fn cluster(&self, id: &str) -> Result<Cluster> {
        self.get_json(&format!("search/clusters/{}", id)).await
    }

    /// `GET /search/articles/{id}`: one article.
    pub async fn article(&self, id: &str) -> Result<Article> {
        self.get_json(&format!("search/articles/{}", id)).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        info!(target: TARGET_WEB_REQUEST, "POST {}", url);
        let response = timeout(REQUEST_TIMEOUT, self.http.post(url.clone()).json(body).send())
            .await
            .map_err(|_| anyhow!("request to {} timed out", url))?
            .with_context(|| format!("request to {} failed", url))?;
        decode_response(response).await
    }

    async fn get_json<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        info!(target: TARGET_WEB_REQUEST, "GET {}", url);
        let response = timeout(REQUEST_TIMEOUT, self.http.get(url.clone()).send())
            .await
            .map_err(|_| anyhow!("request to {} timed out", url))?
            .with_context(|| format!("request to {} failed", url))?;
        decode_response(response).await
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("invalid request path: {}", path))
    }
}

async fn decode_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        debug!(target: TARGET_WEB_REQUEST, "Error response ({}): {}", status, body);
        return Err(anyhow!(error_message(status, &body)));
    }
    response
        .json::<T>()
        .await
        .context("failed to decode response body")
}

/// Prefers the backend's `detail` message; otherwise reports the status.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .unwrap_or_else(|| format!("request failed with status {}", status))
}
