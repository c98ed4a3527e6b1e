//! Search command - filter, sort and page through listings.

use crate::config::{Config, OutputFormat};
use crate::history::HistoryStore;
use crate::models::PropertyType;
use crate::query::{Filters, QueryState, SortBy, DEFAULT_ITEMS_PER_PAGE, DEFAULT_MAX_PRICE};
use crate::store::{ListingStore, ListingView};
use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

/// Arguments for the search command.
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Free text matched against title, description, city and address
    #[arg(long, short = 'q', default_value = "")]
    pub query: String,

    #[arg(long, default_value_t = 0)]
    pub min_price: u64,

    #[arg(long, default_value_t = DEFAULT_MAX_PRICE)]
    pub max_price: u64,

    /// City or state
    #[arg(long, default_value = "")]
    pub location: String,

    /// Property type; repeat to allow several
    #[arg(long = "type")]
    pub types: Vec<PropertyType>,

    /// Minimum bedrooms
    #[arg(long)]
    pub bedrooms: Option<u32>,

    /// Required amenity; repeat to require several
    #[arg(long = "amenity")]
    pub amenities: Vec<String>,

    #[arg(long, default_value_t = SortBy::Newest)]
    pub sort: SortBy,

    #[arg(long, default_value_t = 1)]
    pub page: usize,

    #[arg(long, default_value_t = DEFAULT_ITEMS_PER_PAGE)]
    pub per_page: usize,

    /// Start from a saved search instead of the flags above
    #[arg(long, conflicts_with = "save_as")]
    pub saved: Option<String>,

    /// Save this search under a name
    #[arg(long)]
    pub save_as: Option<String>,
}

impl SearchArgs {
    /// Query state described by the flags
    pub fn query_state(&self) -> QueryState {
        let mut state = QueryState {
            search_query: self.query.clone(),
            filters: Filters {
                min_price: self.min_price,
                max_price: self.max_price,
                location: self.location.clone(),
                property_types: self.types.iter().copied().collect(),
                bedrooms: self.bedrooms,
                amenities: self.amenities.iter().cloned().collect(),
            },
            sort_by: self.sort,
            current_page: self.page,
            items_per_page: self.per_page,
        };
        state.normalize();
        state
    }
}

/// Execute the search command.
pub async fn execute(args: SearchArgs, config: &Config) -> Result<()> {
    let mut history = HistoryStore::load(&config.history_file).await?;

    let state = match &args.saved {
        Some(name) => {
            let saved = history
                .saved_search(name)
                .with_context(|| format!("No saved search named \"{name}\""))?;
            info!("Running saved search \"{}\"", saved.name);
            saved.state.clone()
        }
        None => args.query_state(),
    };
    let page = state.current_page;

    let source = config.record_source()?;
    info!("Loading listings from {} source", source.source_name());
    let records = source.load().await?;

    let mut store = ListingStore::with_state(records, state);
    store.set_page(page);
    let view = store.view();

    match config.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
        OutputFormat::Text => print_view(&view),
    }

    history.record_query(&store.state().search_query);
    if let Some(name) = &args.save_as {
        history.save_search(name, store.state());
    }
    history.save(&config.history_file).await?;

    Ok(())
}

fn print_view(view: &ListingView) {
    if view.total_matches == 0 {
        println!("No listings match.");
        return;
    }
    if view.page.is_empty() {
        println!(
            "Page {} is past the end ({} pages).",
            view.current_page, view.total_pages
        );
        return;
    }

    println!(
        "Showing {}-{} of {} listings (page {}/{})\n",
        view.start_index + 1,
        view.end_index,
        view.total_matches,
        view.current_page,
        view.total_pages
    );
    for (i, record) in view.page.iter().enumerate() {
        println!(
            "{}. {} (₦{})",
            view.start_index + i + 1,
            record.title,
            record.price
        );
        println!(
            "   {} · {} bed, {} bath · rated {:.1}",
            record.property_type, record.bedrooms, record.bathrooms, record.rating
        );
        println!(
            "   {}, {}, {}",
            record.location.address, record.location.city, record.location.state
        );
        if !record.amenities.is_empty() {
            let amenities: Vec<&str> = record.amenities.iter().map(String::as_str).collect();
            println!("   Amenities: {}", amenities.join(", "));
        }
        println!("   ID: {}", record.id);
        println!();
    }
}
