//! HTTP downloads.
//!
//! A thin blocking client used for the installer payload and its
//! published checksum. Every failure is reported as `DownloadFailed`.

use std::io::Write;
use std::time::Duration;

use anyhow::Context;
use reqwest::blocking::Client;

use crate::error::{InstallerError, Result};

/// Fetches files over HTTP/HTTPS.
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with default 60-second timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(60))
    }

    /// Create a new HTTP fetcher with custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("takeout-installer/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client, timeout })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch a small text document, such as a checksum file.
    pub fn fetch_text(&self, url: &str) -> Result<String> {
        tracing::debug!("Fetching {}", url);
        let response = self.get(url)?;
        response.text().map_err(|e| download_failed(url, e))
    }

    /// Stream a response body into `dest`, returning the number of bytes written.
    pub fn download_to<W: Write>(&self, url: &str, dest: &mut W) -> Result<u64> {
        tracing::debug!("Downloading {}", url);
        let mut response = self.get(url)?;
        let bytes = response
            .copy_to(&mut *dest)
            .map_err(|e| download_failed(url, e))?;
        dest.flush()?;
        tracing::debug!("Downloaded {} bytes from {}", bytes, url);
        Ok(bytes)
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| download_failed(url, e))?;

        if !response.status().is_success() {
            return Err(InstallerError::DownloadFailed {
                url: url.to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }

        Ok(response)
    }
}

fn download_failed(url: &str, err: impl std::fmt::Display) -> InstallerError {
    InstallerError::DownloadFailed {
        url: url.to_string(),
        message: err.to_string(),
    }
}
