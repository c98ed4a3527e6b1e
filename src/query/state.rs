use crate::models::PropertyType;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;

/// Upper price bound used when no maximum has been chosen
pub const DEFAULT_MAX_PRICE: u64 = 10_000_000;

/// Page size used by the listing views
pub const DEFAULT_ITEMS_PER_PAGE: usize = 9;

/// Result ordering
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    Rating,
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortBy::Newest => "newest",
            SortBy::PriceAsc => "price_asc",
            SortBy::PriceDesc => "price_desc",
            SortBy::Rating => "rating",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "newest" => Ok(SortBy::Newest),
            "price_asc" => Ok(SortBy::PriceAsc),
            "price_desc" => Ok(SortBy::PriceDesc),
            "rating" => Ok(SortBy::Rating),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

/// Filter criteria from the sidebar.
///
/// Each optional stage is expressed by presence: an empty `location`, an
/// empty set or `bedrooms == None` means the stage is skipped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", from = "Value")]
pub struct Filters {
    pub min_price: u64,
    pub max_price: u64,
    pub location: String,
    pub property_types: BTreeSet<PropertyType>,
    /// Minimum bedroom count; `None` is "any", distinct from `Some(0)`
    pub bedrooms: Option<u32>,
    pub amenities: BTreeSet<String>,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            min_price: 0,
            max_price: DEFAULT_MAX_PRICE,
            location: String::new(),
            property_types: BTreeSet::new(),
            bedrooms: None,
            amenities: BTreeSet::new(),
        }
    }
}

/// Current search, filter, sort and pagination criteria
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", from = "Value")]
pub struct QueryState {
    pub search_query: String,
    pub filters: Filters,
    pub sort_by: SortBy,
    /// 1-indexed
    pub current_page: usize,
    pub items_per_page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            filters: Filters::default(),
            sort_by: SortBy::default(),
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl QueryState {
    /// Clamp pagination fields to their safe minimum
    pub fn normalize(&mut self) {
        self.current_page = self.current_page.max(1);
        self.items_per_page = self.items_per_page.max(1);
    }
}

// Decoding goes through `serde_json::Value` so that a field of the wrong
// shape falls back to its default instead of failing the whole document.

impl From<Value> for Filters {
    fn from(value: Value) -> Self {
        let defaults = Filters::default();
        let Value::Object(map) = value else {
            return defaults;
        };
        let field = |key: &str| map.get(key).unwrap_or(&Value::Null);

        Self {
            min_price: coerce_u64(field("minPrice")).unwrap_or(defaults.min_price),
            max_price: coerce_u64(field("maxPrice")).unwrap_or(defaults.max_price),
            location: coerce_string(field("location")),
            property_types: coerce_strings(field("propertyTypes"))
                .filter_map(|s| s.parse().ok())
                .collect(),
            bedrooms: coerce_u64(field("bedrooms")).map(|n| n.min(u32::MAX as u64) as u32),
            amenities: coerce_strings(field("amenities"))
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

impl From<Value> for QueryState {
    fn from(value: Value) -> Self {
        let Value::Object(map) = value else {
            return QueryState::default();
        };
        let field = |key: &str| map.get(key).cloned().unwrap_or(Value::Null);

        let mut state = QueryState {
            search_query: coerce_string(&field("searchQuery")),
            filters: Filters::from(field("filters")),
            sort_by: field("sortBy")
                .as_str()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
            current_page: coerce_u64(&field("currentPage")).map_or(1, |n| n as usize),
            items_per_page: coerce_u64(&field("itemsPerPage"))
                .map_or(DEFAULT_ITEMS_PER_PAGE, |n| n as usize),
        };
        state.normalize();
        state
    }
}

/// Strings pass through; anything else is empty.
fn coerce_string(value: &Value) -> String {
    value.as_str().map(str::to_string).unwrap_or_default()
}

/// String elements of an array; a non-array yields nothing.
fn coerce_strings(value: &Value) -> impl Iterator<Item = &str> {
    value
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
}

/// Numbers and numeric strings become a non-negative integer; anything else is `None`.
fn coerce_u64(value: &Value) -> Option<u64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().replace(',', "").parse::<f64>().ok()?,
        _ => return None,
    };
    if !n.is_finite() {
        return None;
    }
    Some(if n <= 0.0 { 0 } else { n.floor() as u64 })
}
