use serde::Serialize;
use std::fmt;

/// A fully-qualified URL derived from one input line.
///
/// Candidates are built by the expander and never mutated afterwards; each
/// one is probed exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CandidateUrl(String);

impl CandidateUrl {
    /// Wrap an already-built URL string.
    ///
    /// # Examples
    /// ```
    /// use statuscheck::CandidateUrl;
    ///
    /// let url = CandidateUrl::new("http://example.com/health");
    /// assert_eq!(url.as_str(), "http://example.com/health");
    /// ```
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CandidateUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CandidateUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Why a probe failed to complete an HTTP exchange.
///
/// Only used for diagnostics; reporting treats every kind the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeErrorKind {
    /// The configured timeout elapsed
    Timeout,
    /// DNS resolution, TCP connect or TLS handshake failed
    Connect,
    /// Redirect loop or too many redirects
    Redirect,
    /// Request could not be built or the body could not be read
    Request,
    /// Anything else the client reported
    Other,
}

impl fmt::Display for ProbeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProbeErrorKind::Timeout => "timeout",
            ProbeErrorKind::Connect => "connect",
            ProbeErrorKind::Redirect => "redirect",
            ProbeErrorKind::Request => "request",
            ProbeErrorKind::Other => "other",
        };
        f.write_str(label)
    }
}

/// The classification of one probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// A completed exchange, holding the status line such as `404 Not Found`
    Status(String),
    /// Any transport-level failure
    Error(ProbeErrorKind),
}

impl Classification {
    pub fn is_error(&self) -> bool {
        matches!(self, Classification::Error(_))
    }

    /// The status line, or `None` for transport errors.
    pub fn status(&self) -> Option<&str> {
        match self {
            Classification::Status(status) => Some(status),
            Classification::Error(_) => None,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Status(status) => f.write_str(status),
            Classification::Error(_) => f.write_str("error"),
        }
    }
}

/// Result of probing one candidate URL. Produced exactly once per candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub classification: Classification,
    pub url: CandidateUrl,
}

impl ProbeOutcome {
    pub fn status(url: CandidateUrl, status: impl Into<String>) -> Self {
        Self {
            classification: Classification::Status(status.into()),
            url,
        }
    }

    pub fn error(url: CandidateUrl, kind: ProbeErrorKind) -> Self {
        Self {
            classification: Classification::Error(kind),
            url,
        }
    }

    pub fn is_error(&self) -> bool {
        self.classification.is_error()
    }
}
