pub mod http;
pub mod json_file;
pub mod mock;
pub mod traits;

pub use http::HttpSource;
pub use json_file::JsonFileSource;
pub use mock::MockSource;
pub use traits::RecordSource;
