use log::info;
use url::Url;

use crate::error::ExportError;
use crate::http::ApiClient;
use crate::models::{Conversation, ConversationPage};
use crate::thread_fetcher::ThreadFetcher;

/// Walks the paginated conversation collection, enriching every
/// conversation with its threads before moving on. Strictly sequential:
/// both endpoints share one rate-limit budget, so nothing is fetched in
/// parallel.
pub struct PageWalker<'a> {
    client: &'a ApiClient,
    thread_fetcher: ThreadFetcher<'a>,
    start_url: String,
    conversations: Vec<Conversation>,
}

impl<'a> PageWalker<'a> {
    pub fn new(client: &'a ApiClient, base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        PageWalker {
            client,
            thread_fetcher: ThreadFetcher::new(client, base),
            start_url: format!("{}/conversations?status=all", base),
            conversations: Vec::new(),
        }
    }

    /// Follows next links until exhausted and returns all enriched
    /// conversations in page-then-record order. Any error aborts the
    /// whole walk; nothing fetched so far is returned.
    pub fn walk(mut self) -> Result<Vec<Conversation>, ExportError> {
        let mut url = self.start_url.clone();
        while !url.is_empty() {
            url = self.fetch_page(&url)?;
        }
        info!("Export complete: {} conversations", self.conversations.len());
        Ok(self.conversations)
    }

    /// Fetches and processes one page, returning the URL of the next
    /// page or an empty string when the walk is done. Throttling is
    /// absorbed inside the client, so a page is decoded and its records
    /// appended exactly once.
    fn fetch_page(&mut self, url: &str) -> Result<String, ExportError> {
        let body = self.client.get(url)?;
        let page: ConversationPage = serde_json::from_str(&body)?;

        let mut conversations = page.embedded.conversations;
        let total = conversations.len();
        info!("Fetched {} conversations. Fetching threads now...", total);

        for (i, conv) in conversations.iter_mut().enumerate() {
            info!(
                "Fetching threads for conversation {} [{}/{}]",
                conv.id,
                i + 1,
                total
            );
            conv.threads = self.thread_fetcher.fetch_threads(conv.id)?;
        }
        self.conversations.append(&mut conversations);

        let next = page.links.next.href;
        // An API echoing the current page as "next" would loop forever;
        // treat next == current as terminal.
        if next.is_empty() || next == url {
            return Ok(String::new());
        }
        if Url::parse(&next).is_err() {
            return Err(ExportError::BadNextLink(next));
        }
        Ok(next)
    }
}
