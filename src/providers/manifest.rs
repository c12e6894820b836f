// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Canonical manifest sources: HTTP and local file.

use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, trace};
use url::Url;

use crate::error::{BindingsError, Result};
use crate::manifest::DeploymentManifest;
use crate::traits::ManifestSource;

/// Fetches the manifest with an HTTP GET and parses the JSON body.
///
/// # Examples
///
/// ```rust,no_run
/// use sky_bindings::providers::HttpManifestSource;
/// use sky_bindings::traits::ManifestSource;
///
/// # async fn example() -> Result<(), sky_bindings::BindingsError> {
/// let source = HttpManifestSource::parse("https://example.org/deployments.json")?;
/// let manifest = source.fetch().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpManifestSource {
    url: Url,
    client: Client,
}

impl HttpManifestSource {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            client: Client::new(),
        }
    }

    pub fn parse(url: &str) -> Result<Self> {
        Ok(Self::new(Url::parse(url)?))
    }

    /// Reuses an existing client (connection pool, proxy settings)
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl ManifestSource for HttpManifestSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<DeploymentManifest> {
        trace!("Requesting deployment manifest");

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(BindingsError::Network)?;

        let status_code = response.status();
        trace!(status_code = %status_code, "Received manifest response");

        response.error_for_status_ref()?;

        let body = response.text().await.map_err(BindingsError::Network)?;
        let manifest = DeploymentManifest::from_json(&body).map_err(|e| {
            BindingsError::InvalidManifest(format!("{} did not return a manifest: {e}", self.url))
        })?;

        debug!(
            contracts = manifest.len(),
            event = "manifest_fetched"
        );

        Ok(manifest)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

/// Reads the manifest from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileManifestSource {
    path: PathBuf,
}

impl FileManifestSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ManifestSource for FileManifestSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch(&self) -> Result<DeploymentManifest> {
        let body = tokio::fs::read_to_string(&self.path).await?;
        let manifest = DeploymentManifest::from_json(&body).map_err(|e| {
            BindingsError::InvalidManifest(format!("{}: {e}", self.path.display()))
        })?;

        debug!(contracts = manifest.len(), event = "manifest_loaded");

        Ok(manifest)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_source_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "sky-bindings-manifest-{}.json",
            std::process::id()
        ));
        let manifest = DeploymentManifest::from_registry();
        std::fs::write(&path, manifest.to_json_pretty().unwrap()).unwrap();

        let source = FileManifestSource::new(&path);
        let loaded = source.fetch().await.unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, manifest);
        assert_eq!(source.describe(), path.display().to_string());
    }

    #[tokio::test]
    async fn test_file_source_rejects_garbage() {
        let path = std::env::temp_dir().join(format!(
            "sky-bindings-garbage-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "{\"contracts\": [1, 2, 3]}").unwrap();

        let err = FileManifestSource::new(&path).fetch().await.unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(err, BindingsError::InvalidManifest(_)));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let err = FileManifestSource::new("/nonexistent/sky-bindings/manifest.json")
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, BindingsError::Io(_)));
    }

    #[test]
    fn test_http_source_parses_url() {
        let source = HttpManifestSource::parse("https://example.org/deployments.json").unwrap();
        assert_eq!(source.describe(), "https://example.org/deployments.json");
        assert!(HttpManifestSource::parse("not a url").is_err());
    }
}
