use crate::query::QueryState;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info, warn};

/// How many recent queries are remembered
pub const RECENT_LIMIT: usize = 10;

/// A named query state the user chose to keep
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedSearch {
    pub name: String,
    pub state: QueryState,
    pub saved_at: DateTime<Utc>,
}

/// Search history and saved searches, persisted as one JSON document
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(from = "Value")]
pub struct HistoryStore {
    /// Most recent first
    pub recent: Vec<String>,
    pub saved: Vec<SavedSearch>,
}

/// Entries that do not decode are skipped so one bad saved search does not
/// hide the rest.
impl From<Value> for HistoryStore {
    fn from(value: Value) -> Self {
        let Value::Object(mut map) = value else {
            warn!("History document is not an object, starting fresh");
            return Self::default();
        };

        let recent = match map.remove("recent") {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        };

        let saved = match map.remove("saved") {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|v| match serde_json::from_value::<SavedSearch>(v) {
                    Ok(saved) => Some(saved),
                    Err(e) => {
                        warn!("Skipping unreadable saved search: {}", e);
                        None
                    }
                })
                .collect(),
            _ => Vec::new(),
        };

        Self { recent, saved }
    }
}

impl HistoryStore {
    /// Load from `path`; a missing file is an empty history
    pub async fn load(path: &Path) -> Result<Self> {
        let json = match tokio::fs::read_to_string(path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No history at {}, starting fresh", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read history file {}", path.display()))
            }
        };

        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse history file {}", path.display()))
    }

    pub async fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("Failed to write history file {}", path.display()))?;
        debug!("💾 Saved history to {}", path.display());
        Ok(())
    }

    /// Remember a query. Blank queries are ignored and repeats move to the front.
    pub fn record_query(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        let folded = query.to_lowercase();
        self.recent.retain(|q| q.to_lowercase() != folded);
        self.recent.insert(0, query.to_string());
        self.recent.truncate(RECENT_LIMIT);
    }

    pub fn clear_recent(&mut self) {
        self.recent.clear();
    }

    /// Save `state` under `name`, replacing any search with that name
    pub fn save_search(&mut self, name: &str, state: &QueryState) {
        let entry = SavedSearch {
            name: name.trim().to_string(),
            state: state.clone(),
            saved_at: Utc::now(),
        };
        match self.saved.iter_mut().find(|s| s.name == entry.name) {
            Some(existing) => *existing = entry,
            None => self.saved.push(entry),
        }
        info!("Saved search \"{}\"", name.trim());
    }

    pub fn saved_search(&self, name: &str) -> Option<&SavedSearch> {
        self.saved.iter().find(|s| s.name == name.trim())
    }

    /// Returns whether a search was removed
    pub fn remove_search(&mut self, name: &str) -> bool {
        let before = self.saved.len();
        self.saved.retain(|s| s.name != name.trim());
        self.saved.len() != before
    }
}
