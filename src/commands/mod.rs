pub mod history;
pub mod search;
pub mod suggest;
