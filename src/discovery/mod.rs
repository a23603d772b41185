//! Input discovery
//!
//! This module reads the host list and expands each line into the
//! candidate URLs that will be probed.

pub mod expander;
pub mod input;

// Re-export commonly used items
pub use expander::{expand_line, expand_lines, strip_scheme};
pub use input::{CandidateList, read_candidates};
