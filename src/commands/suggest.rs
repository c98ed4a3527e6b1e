//! Suggest command - best matches for a partial query.

use crate::config::{Config, OutputFormat};
use crate::query::{suggest_with_limit, SUGGESTION_LIMIT};
use anyhow::Result;
use clap::Args;
use serde_json::json;

/// Arguments for the suggest command.
#[derive(Debug, Args)]
pub struct SuggestArgs {
    /// Partial query as typed
    pub query: String,

    /// Maximum suggestions
    #[arg(long, default_value_t = SUGGESTION_LIMIT)]
    pub limit: usize,
}

/// Execute the suggest command.
pub async fn execute(args: SuggestArgs, config: &Config) -> Result<()> {
    let records = config.record_source()?.load().await?;
    let suggestions = suggest_with_limit(&records, &args.query, args.limit);

    match config.format {
        OutputFormat::Json => {
            let rows: Vec<_> = suggestions
                .iter()
                .map(|s| {
                    json!({
                        "id": s.record.id,
                        "title": s.record.title,
                        "city": s.record.location.city,
                        "score": s.score,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Text => {
            if suggestions.is_empty() {
                println!("No suggestions for \"{}\"", args.query);
            }
            for s in &suggestions {
                println!("{:>5.1}  {} ({})", s.score, s.record.title, s.record.location.city);
            }
        }
    }

    Ok(())
}
