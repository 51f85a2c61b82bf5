//! # Relgate GitHub Source
//!
//! A [`ReleaseSource`] backed by the GitHub releases REST API.
//!
//! One `GET {api_base}/repos/{owner}/{name}/releases` per fetch, no
//! pagination and no retries; the gateway's manifest cache makes this a
//! once-per-repository call in practice.
//!
//! ## Usage
//!
//! ```no_run
//! use relgate_github::GithubReleaseSource;
//!
//! let source = GithubReleaseSource::new();
//! ```

use relgate_core::prelude::*;

use reqwest::header;
use std::time::Duration;
use tracing::debug;

/// Base URL of the GitHub REST API.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// GitHub rejects requests without a User-Agent.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct GithubReleaseSource {
    client: reqwest::Client,
    api_base: String,
}

impl GithubReleaseSource {
    pub fn new() -> Self {
        Self::with_api_base(DEFAULT_API_BASE)
    }

    /// Points the source at an alternative API host, e.g. a GitHub
    /// Enterprise instance or a local stand-in.
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.into(),
        }
    }
}

impl Default for GithubReleaseSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ReleaseSource for GithubReleaseSource {
    async fn fetch_releases(&self, repo: &RepoId) -> Result<Vec<Release>, SourceError> {
        let url = format!("{}/repos/{}/releases", self.api_base, repo);
        debug!("listing releases at {url}");

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| SourceError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        response
            .json::<Vec<Release>>()
            .await
            .map_err(|e| SourceError::Malformed(e.to_string()))
    }
}
