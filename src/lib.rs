//! # listing-scout
//!
//! In-memory query engine for rental listings: text search, filters, stable
//! sorting and pagination over an immutable record collection, plus the
//! surrounding pieces a front-end needs (a subscribable store, record
//! sources, persisted search history and a CLI).

pub mod commands;
pub mod config;
pub mod history;
pub mod models;
pub mod query;
pub mod sources;
pub mod store;

pub use models::{Availability, Location, PropertyRecord, PropertyType};
pub use query::{apply_filters, paginate, reset_filters, Filters, Page, QueryState, SortBy};
pub use store::{ListingStore, ListingView};
