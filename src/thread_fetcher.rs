use log::debug;

use crate::error::ExportError;
use crate::http::ApiClient;
use crate::models::{Thread, ThreadPage};

/// Fetches the message threads of a single conversation via
/// `GET <base>/conversations/{id}/threads`. The endpoint is treated as
/// single-page; no next link is followed.
pub struct ThreadFetcher<'a> {
    client: &'a ApiClient,
    base_url: String,
}

impl<'a> ThreadFetcher<'a> {
    pub fn new(client: &'a ApiClient, base_url: &str) -> Self {
        ThreadFetcher {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn fetch_threads(&self, conversation_id: u64) -> Result<Vec<Thread>, ExportError> {
        let url = format!("{}/conversations/{}/threads", self.base_url, conversation_id);
        debug!("GET {}", url);

        let body = self.client.get(&url)?;
        let page: ThreadPage = serde_json::from_str(&body)?;
        Ok(page.embedded.threads)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::RequestOutcome;
    use crate::test_support::{RecordingSleeper, ScriptedTransport};
    use serde_json::json;
    use std::time::Duration;

    fn threads_json(ids: &[u64]) -> String {
        let threads: Vec<_> = ids
            .iter()
            .map(|id| json!({"id": id, "type": "message", "body": format!("t{}", id)}))
            .collect();
        json!({"_embedded": {"threads": threads}}).to_string()
    }

    #[test]
    fn builds_url_from_conversation_id() {
        let transport = ScriptedTransport::new();
        transport.respond(
            "https://api.test/v2/conversations/42/threads",
            RequestOutcome::Success(threads_json(&[7, 8])),
        );
        let client = ApiClient::with_parts(
            Box::new(transport.clone()),
            Box::new(RecordingSleeper::new()),
        );
        // Trailing slash on the base URL is tolerated.
        let fetcher = ThreadFetcher::new(&client, "https://api.test/v2/");

        let threads = fetcher.fetch_threads(42).unwrap();

        assert_eq!(
            transport.requests(),
            vec!["https://api.test/v2/conversations/42/threads"]
        );
        let ids: Vec<u64> = threads.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![7, 8]);
    }

    #[test]
    fn throttled_fetch_retries_until_success() {
        let url = "https://api.test/v2/conversations/1/threads";
        let transport = ScriptedTransport::new();
        transport.respond(url, RequestOutcome::Throttled(3));
        transport.respond(url, RequestOutcome::Success(threads_json(&[5])));
        let sleeper = RecordingSleeper::new();
        let client = ApiClient::with_parts(Box::new(transport.clone()), Box::new(sleeper.clone()));
        let fetcher = ThreadFetcher::new(&client, "https://api.test/v2");

        let threads = fetcher.fetch_threads(1).unwrap();

        assert_eq!(threads.len(), 1);
        assert_eq!(threads[0].id, 5);
        assert_eq!(transport.requests(), vec![url; 2]);
        assert_eq!(sleeper.slept(), vec![Duration::from_secs(3)]);
    }

    #[test]
    fn decode_failure_is_fatal() {
        let url = "https://api.test/v2/conversations/1/threads";
        let transport = ScriptedTransport::new();
        transport.respond(url, RequestOutcome::Success("not json".to_string()));
        let client = ApiClient::with_parts(
            Box::new(transport.clone()),
            Box::new(RecordingSleeper::new()),
        );
        let fetcher = ThreadFetcher::new(&client, "https://api.test/v2");

        assert!(matches!(
            fetcher.fetch_threads(1),
            Err(ExportError::Decode(_))
        ));
    }
}
