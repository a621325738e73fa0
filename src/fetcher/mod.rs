pub mod client;
pub mod errors;
pub mod pipeline;
pub mod types;

pub use client::{DEFAULT_FETCH_TIMEOUT, Fetcher, build_client};
pub use errors::FetchError;
pub use types::{Charset, PageResponse};
