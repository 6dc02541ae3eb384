use std::time::Duration;

use log::{info, warn};
use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;

use crate::error::ExportError;

pub const RETRY_AFTER_HEADER: &str = "X-RateLimit-Retry-After";
pub const DEFAULT_RETRY_AFTER_SECS: u64 = 60;
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Classified result of one authenticated GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    /// HTTP 200; the raw body for the caller to decode.
    Success(String),
    /// HTTP 429; wait this many seconds, then retry the identical URL.
    Throttled(u64),
    /// Any other status; non-retryable, the body is the diagnostic.
    Failure { status: u16, body: String },
}

/// One blocking authenticated GET. The trait seam exists so the retry
/// loop and the page walk can be exercised against a scripted fake.
pub trait HttpTransport {
    fn get(&self, url: &str) -> Result<RequestOutcome, ExportError>;
}

pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

pub struct ReqwestTransport {
    client: Client,
    auth_header: String,
}

impl ReqwestTransport {
    /// `auth_header` is the full `Bearer <token>` value, treated as opaque.
    pub fn new(auth_header: String) -> Result<Self, ExportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(ReqwestTransport {
            client,
            auth_header,
        })
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &str) -> Result<RequestOutcome, ExportError> {
        let resp = self
            .client
            .get(url)
            .header(AUTHORIZATION, &self.auth_header)
            .send()?;

        let status = resp.status().as_u16();
        let retry_after = resp
            .headers()
            .get(RETRY_AFTER_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());
        let body = resp.text()?;

        Ok(classify(status, retry_after.as_deref(), body))
    }
}

pub fn classify(status: u16, retry_after: Option<&str>, body: String) -> RequestOutcome {
    match status {
        200 => RequestOutcome::Success(body),
        429 => RequestOutcome::Throttled(parse_retry_after(retry_after)),
        _ => RequestOutcome::Failure { status, body },
    }
}

/// Whole-second wait hint from `X-RateLimit-Retry-After`. Missing, zero
/// or unparsable values fall back to 60 seconds.
fn parse_retry_after(header: Option<&str>) -> u64 {
    match header.and_then(|v| v.trim().parse::<u64>().ok()) {
        Some(secs) if secs > 0 => secs,
        _ => {
            warn!(
                "Unusable {} header {:?}, waiting {} seconds",
                RETRY_AFTER_HEADER, header, DEFAULT_RETRY_AFTER_SECS
            );
            DEFAULT_RETRY_AFTER_SECS
        }
    }
}

/// Authenticated client with transparent throttling recovery. Both the
/// page walk and the per-conversation thread fetch go through `get`, so
/// the retry policy lives in exactly one place.
pub struct ApiClient {
    transport: Box<dyn HttpTransport>,
    sleeper: Box<dyn Sleeper>,
}

impl ApiClient {
    pub fn new(auth_header: String) -> Result<Self, ExportError> {
        Ok(ApiClient {
            transport: Box::new(ReqwestTransport::new(auth_header)?),
            sleeper: Box::new(ThreadSleeper),
        })
    }

    pub fn with_parts(transport: Box<dyn HttpTransport>, sleeper: Box<dyn Sleeper>) -> Self {
        ApiClient { transport, sleeper }
    }

    /// One GET with 429 absorbed: sleep for the hinted seconds, then
    /// re-issue the identical URL until it either succeeds or fails
    /// hard. Callers never observe throttling.
    pub fn get(&self, url: &str) -> Result<String, ExportError> {
        loop {
            match self.transport.get(url)? {
                RequestOutcome::Success(body) => return Ok(body),
                RequestOutcome::Throttled(secs) => {
                    info!("Sleeping for {} seconds due to rate limiting", secs);
                    self.sleeper.sleep(Duration::from_secs(secs));
                }
                RequestOutcome::Failure { status, body } => {
                    return Err(ExportError::Api { status, body });
                }
            }
        }
    }
}
