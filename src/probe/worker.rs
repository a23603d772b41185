use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use reqwest::StatusCode;
use reqwest::redirect::Policy;

use crate::config::Config;
use crate::core::error::Result;
use crate::core::types::{CandidateUrl, ProbeErrorKind, ProbeOutcome};

/// A single probe against one candidate URL.
///
/// Implementations must report exactly one outcome per call and must never
/// fail: transport problems are folded into the outcome.
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self, url: CandidateUrl) -> ProbeOutcome;
}

/// Probe backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: reqwest::Client,
}

impl HttpProbe {
    /// Build the client once for the whole run.
    ///
    /// The timeout covers the full exchange including redirects, which
    /// follow the client's default policy.
    pub fn from_config(config: &Config) -> Result<Self> {
        let user_agent = config.user_agent.as_deref().unwrap_or(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        let client = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .redirect(Policy::default())
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Probe for HttpProbe {
    async fn probe(&self, url: CandidateUrl) -> ProbeOutcome {
        match self.client.get(url.as_str()).send().await {
            Ok(response) => {
                let reason = response
                    .extensions()
                    .get::<ReasonPhrase>()
                    .map(|reason| String::from_utf8_lossy(reason.as_bytes()).into_owned());
                ProbeOutcome::status(url, status_line(response.status(), reason.as_deref()))
            }
            Err(err) => ProbeOutcome::error(url, classify_error(&err)),
        }
    }
}

/// Render a status as `<code> <reason>`, e.g. `404 Not Found`.
///
/// `reason` is the phrase the server sent. The client only carries it when
/// it differs from the canonical one, so the canonical phrase fills in when
/// it is absent. Codes with neither render as the bare number.
pub fn status_line(status: StatusCode, reason: Option<&str>) -> String {
    match reason.filter(|r| !r.is_empty()).or(status.canonical_reason()) {
        Some(reason) => format!("{} {reason}", status.as_u16()),
        None => status.as_u16().to_string(),
    }
}

/// Map a client error to the coarse kind carried in the outcome.
pub fn classify_error(err: &reqwest::Error) -> ProbeErrorKind {
    if err.is_timeout() {
        ProbeErrorKind::Timeout
    } else if err.is_connect() {
        ProbeErrorKind::Connect
    } else if err.is_redirect() {
        ProbeErrorKind::Redirect
    } else if err.is_request() || err.is_body() || err.is_builder() {
        ProbeErrorKind::Request
    } else {
        ProbeErrorKind::Other
    }
}
