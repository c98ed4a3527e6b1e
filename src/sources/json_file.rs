use crate::models::PropertyRecord;
use crate::sources::traits::RecordSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, info};

/// Listings stored as a JSON array on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecordSource for JsonFileSource {
    async fn load(&self) -> Result<Vec<PropertyRecord>> {
        debug!("Reading listings from {}", self.path.display());

        let json = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read listings file {}", self.path.display()))?;

        let records: Vec<PropertyRecord> = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse listings in {}", self.path.display()))?;

        info!("Loaded {} listings from {}", records.len(), self.path.display());
        Ok(records)
    }

    fn source_name(&self) -> &'static str {
        "JSON file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::mock::sample_records;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("listing-scout-{}-{name}", std::process::id()))
    }

    #[tokio::test]
    async fn loads_what_was_written() {
        let path = temp_path("listings.json");
        let records = sample_records();
        tokio::fs::write(&path, serde_json::to_string_pretty(&records).unwrap())
            .await
            .unwrap();

        let loaded = JsonFileSource::new(&path).load().await.unwrap();
        assert_eq!(loaded, records);

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let err = JsonFileSource::new(temp_path("does-not-exist.json"))
            .load()
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read listings file"));
    }

    #[tokio::test]
    async fn malformed_json_is_an_error() {
        let path = temp_path("broken.json");
        tokio::fs::write(&path, "[{\"id\": 1").await.unwrap();

        let err = JsonFileSource::new(&path).load().await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse listings"));

        tokio::fs::remove_file(&path).await.unwrap();
    }
}
