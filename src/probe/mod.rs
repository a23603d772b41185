//! Concurrent HTTP probing
//!
//! This module issues one GET per candidate URL, collects the outcomes
//! through a single channel and groups them by status line.

pub mod dispatcher;
pub mod grouping;
pub mod worker;

// Re-export commonly used items
pub use dispatcher::{DispatchStrategy, Dispatcher, RunSummary};
pub use grouping::ResultGrouping;
pub use worker::{HttpProbe, Probe};
