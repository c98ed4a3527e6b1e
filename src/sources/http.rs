use crate::models::PropertyRecord;
use crate::sources::traits::RecordSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Listings served as a JSON array by an HTTP endpoint
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    /// Create a source for `url` with a 30 second timeout
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("listing-scout/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl RecordSource for HttpSource {
    async fn load(&self) -> Result<Vec<PropertyRecord>> {
        debug!("Fetching URL: {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("Failed to fetch listings")?;

        if !response.status().is_success() {
            warn!("Listings endpoint returned status: {}", response.status());
            anyhow::bail!("Failed to fetch listings: {}", response.status());
        }

        let records: Vec<PropertyRecord> = response
            .json()
            .await
            .context("Failed to decode listings response")?;

        info!("Fetched {} listings from {}", records.len(), self.url);
        Ok(records)
    }

    fn source_name(&self) -> &'static str {
        "HTTP"
    }
}
