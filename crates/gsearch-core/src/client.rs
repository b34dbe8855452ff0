//! HTTP fetcher for Google result pages
//!
//! Issues one GET per page with a rotated User-Agent. Any status other
//! than 200 is treated as a ban and aborts the scrape; there are no retries.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use tokio::sync::Mutex;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, warn};

use crate::error::{Result, SearchError};
use crate::user_agent::UserAgentPool;

/// Anything that can turn a page URL into an HTML body
///
/// The orchestrator only talks to this trait, so tests can stand in
/// for the network.
pub trait PageFetcher {
    /// Fetch the HTML body of `url`
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Configuration for the HTTP fetcher
#[derive(Debug, Default)]
pub struct ClientConfig {
    /// Request timeout in seconds (default: none, the client's default applies)
    pub timeout_secs: Option<u64>,
    /// Maximum requests per second (default: none, no pacing)
    pub requests_per_second: Option<f64>,
    /// Pool of User-Agent strings rotated per request
    pub user_agents: UserAgentPool,
}

/// Keeps consecutive requests at least `gap` apart
///
/// The first request goes out immediately; every later one waits for the
/// slot booked by its predecessor.
#[derive(Debug)]
pub struct RequestPacer {
    gap: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl RequestPacer {
    /// Pacer allowing at most `per_second` requests per second
    ///
    /// Returns `None` for zero, negative or non-finite rates, and for rates
    /// so low the gap does not fit in a `Duration`.
    pub fn from_rate(per_second: f64) -> Option<Self> {
        if !per_second.is_finite() || per_second <= 0.0 {
            return None;
        }
        let gap = Duration::try_from_secs_f64(per_second.recip()).ok()?;
        Some(Self {
            gap,
            next_slot: Mutex::new(None),
        })
    }

    pub fn gap(&self) -> Duration {
        self.gap
    }

    /// Sleep until this request's slot, then book the next one
    pub async fn wait_turn(&self) {
        let mut next_slot = self.next_slot.lock().await;
        if let Some(slot) = *next_slot {
            sleep_until(slot).await;
        }
        *next_slot = Some(Instant::now() + self.gap);
    }
}

/// reqwest-backed [`PageFetcher`]
pub struct HttpFetcher {
    client: reqwest::Client,
    user_agents: UserAgentPool,
    pacer: Option<RequestPacer>,
}

impl HttpFetcher {
    /// Create a fetcher with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a fetcher with custom configuration
    ///
    /// # Errors
    /// `TransportError` if the underlying client cannot be built
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        let pacer = config
            .requests_per_second
            .and_then(RequestPacer::from_rate);

        Ok(Self {
            client,
            user_agents: config.user_agents,
            pacer,
        })
    }

    pub fn pacer(&self) -> Option<&RequestPacer> {
        self.pacer.as_ref()
    }
}

impl PageFetcher for HttpFetcher {
    /// # Errors
    /// - `TransportError` - DNS, connection, timeout or body read failures
    /// - `BlockedOrError` - any status other than 200
    /// - `ParseError` - the response is declared as something other than HTML
    async fn fetch(&self, url: &str) -> Result<String> {
        if let Some(pacer) = &self.pacer {
            pacer.wait_turn().await;
        }

        let agent = self.user_agents.pick();
        debug!(url, user_agent = agent, "Fetching page");

        let response = self.client.get(url).header(USER_AGENT, agent).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(url, status = status.as_u16(), "Non-200 response, assuming a ban");
            return Err(SearchError::BlockedOrError {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        if let Some(content_type) = response.headers().get(CONTENT_TYPE)
            && let Ok(content_type) = content_type.to_str()
            && !is_html_content_type(content_type)
        {
            return Err(SearchError::ParseError(format!(
                "expected an HTML document, got {}",
                content_type
            )));
        }

        Ok(response.text().await?)
    }
}

/// Whether a Content-Type header value denotes an HTML document
fn is_html_content_type(value: &str) -> bool {
    let mime = value
        .split(';')
        .next()
        .unwrap_or(value)
        .trim()
        .to_ascii_lowercase();
    mime == "text/html" || mime == "application/xhtml+xml"
}
