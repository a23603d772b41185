//! Reporting and logging
//!
//! This module renders the final status grouping and owns the
//! structured logging helpers used throughout the application.

pub mod logging;
pub mod report;

// Re-export commonly used items
pub use report::{ReportDestination, ReportFormat, ReportSink, Reporter};
