pub mod error;
pub mod http;
pub mod logger;
pub mod models;
pub mod output;
pub mod page_walker;
pub mod thread_fetcher;

#[cfg(test)]
pub(crate) mod test_support;

// Exporting types for convenience
pub use error::ExportError;
pub use http::{ApiClient, RequestOutcome};
pub use models::{Conversation, Thread};
pub use page_walker::PageWalker;
pub use thread_fetcher::ThreadFetcher;
