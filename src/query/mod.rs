pub mod engine;
pub mod pagination;
pub mod state;
pub mod suggest;

pub use engine::{apply_filters, matching_indices, reset_filters};
pub use pagination::{paginate, Page};
pub use state::{Filters, QueryState, SortBy, DEFAULT_ITEMS_PER_PAGE, DEFAULT_MAX_PRICE};
pub use suggest::{suggest, suggest_with_limit, Suggestion, SUGGESTION_LIMIT};
