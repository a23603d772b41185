//! statuscheck - probe a list of hosts over HTTP and group them by status
//!
//! Every input line is expanded into one or more candidate URLs, each
//! candidate is probed concurrently with a single GET, and the status lines
//! that came back are grouped into a report.
//!
//! ## Module Organization
//!
//! - [`core`] - Core types, errors, and constants
//! - [`config`] - Configuration management
//! - [`discovery`] - Reading input and expanding candidate URLs
//! - [`probe`] - Concurrent probing and aggregation
//! - [`reporting`] - Report rendering and logging
//! - [`ui`] - CLI, progress, and shell completions

pub mod config;
pub mod core;
pub mod discovery;
pub mod probe;
pub mod reporting;
pub mod ui;

// Re-export commonly used types at the crate root
pub use config::{CliConfig, Config};
pub use crate::core::{CandidateUrl, Classification, ProbeErrorKind, ProbeOutcome, Result, StatusCheckError};
pub use discovery::{CandidateList, expand_line, read_candidates};
pub use probe::{DispatchStrategy, Dispatcher, HttpProbe, Probe, ResultGrouping, RunSummary};
pub use reporting::{ReportDestination, Reporter};
