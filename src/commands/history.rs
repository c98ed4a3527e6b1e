//! History command - recent queries and saved searches.

use crate::config::{Config, OutputFormat};
use crate::history::HistoryStore;
use anyhow::Result;
use clap::Args;
use tracing::{info, warn};

/// Arguments for the history command.
#[derive(Debug, Args, Default)]
pub struct HistoryArgs {
    /// Forget recent queries
    #[arg(long)]
    pub clear: bool,

    /// Delete a saved search
    #[arg(long, value_name = "NAME")]
    pub remove: Option<String>,
}

/// Apply the requested edits. Returns whether anything changed.
pub fn apply_edits(history: &mut HistoryStore, args: &HistoryArgs) -> bool {
    let mut changed = false;
    if args.clear && !history.recent.is_empty() {
        history.clear_recent();
        info!("Cleared recent searches");
        changed = true;
    }
    if let Some(name) = &args.remove {
        if history.remove_search(name) {
            info!("Removed saved search \"{}\"", name.trim());
            changed = true;
        } else {
            warn!("No saved search named \"{}\"", name.trim());
        }
    }
    changed
}

/// Execute the history command.
pub async fn execute(args: HistoryArgs, config: &Config) -> Result<()> {
    let mut history = HistoryStore::load(&config.history_file).await?;
    if apply_edits(&mut history, &args) {
        history.save(&config.history_file).await?;
    }

    match config.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&history)?),
        OutputFormat::Text => {
            println!("Recent searches:");
            if history.recent.is_empty() {
                println!("  (none)");
            }
            for query in &history.recent {
                println!("  {query}");
            }

            println!("\nSaved searches:");
            if history.saved.is_empty() {
                println!("  (none)");
            }
            for saved in &history.saved {
                let state = &saved.state;
                println!(
                    "  {} - \"{}\", ₦{}-₦{}, sort {} (saved {})",
                    saved.name,
                    state.search_query,
                    state.filters.min_price,
                    state.filters.max_price,
                    state.sort_by,
                    saved.saved_at.format("%Y-%m-%d %H:%M")
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryState;

    fn sample_history() -> HistoryStore {
        let mut history = HistoryStore::default();
        history.record_query("ikeja");
        history.save_search("cheap", &QueryState::default());
        history
    }

    #[test]
    fn clear_and_remove_edit_the_history() {
        let mut history = sample_history();
        let args = HistoryArgs {
            clear: true,
            remove: Some("cheap".to_string()),
        };
        assert!(apply_edits(&mut history, &args));
        assert!(history.recent.is_empty());
        assert!(history.saved.is_empty());
    }

    #[test]
    fn no_flags_change_nothing() {
        let mut history = sample_history();
        let before = history.clone();
        assert!(!apply_edits(&mut history, &HistoryArgs::default()));
        assert_eq!(history, before);
    }

    #[test]
    fn removing_an_unknown_name_changes_nothing() {
        let mut history = sample_history();
        let args = HistoryArgs {
            clear: false,
            remove: Some("luxury".to_string()),
        };
        assert!(!apply_edits(&mut history, &args));
        assert_eq!(history.saved.len(), 1);
    }
}
