use crate::models::PropertyRecord;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for everything that can supply the listing collection.
/// New backends (a real API, a database export) only need to implement this.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Load every listing, in collection order
    async fn load(&self) -> Result<Vec<PropertyRecord>>;

    /// Get the name of the source
    fn source_name(&self) -> &'static str;
}
