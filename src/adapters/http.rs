use crate::domain::model::PortfolioDocument;
use crate::domain::ports::DocumentSource;
use crate::utils::error::{PortfolioError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Fetches the portfolio document with a plain GET relative to the page.
pub struct HttpSource {
    client: Client,
    url: Url,
}

impl HttpSource {
    pub fn new(origin: &str, data_path: &str, timeout_seconds: u64) -> Result<Self> {
        let url = resolve_data_url(origin, data_path)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .user_agent(concat!("portfolio-render/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PortfolioError::ConfigError {
                message: format!("HTTP client could not be built: {}", e),
            })?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// Resolves `data_path` the way a browser resolves a relative fetch from a
/// page at `origin`. An origin whose last segment has no extension is taken
/// as a directory.
pub fn resolve_data_url(origin: &str, data_path: &str) -> Result<Url> {
    let invalid = |reason: String| PortfolioError::InvalidConfigValueError {
        field: "origin".to_string(),
        value: origin.to_string(),
        reason,
    };

    let mut base = Url::parse(origin).map_err(|e| invalid(format!("Invalid URL format: {}", e)))?;
    let last_segment = base.path().rsplit('/').next().unwrap_or("");
    if !base.path().ends_with('/') && !last_segment.contains('.') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join(data_path)
        .map_err(|e| invalid(format!("Cannot resolve {}: {}", data_path, e)))
}

#[async_trait]
impl DocumentSource for HttpSource {
    async fn fetch_document(&self) -> Result<PortfolioDocument> {
        tracing::debug!("Making request to: {}", self.url);
        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);
        if !status.is_success() {
            return Err(PortfolioError::FetchStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(PortfolioDocument::from_slice(&body)?)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}
