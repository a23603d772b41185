use rustc_hash::FxHashMap;

use crate::core::types::{CandidateUrl, Classification, ProbeOutcome};

/// Status line → URLs that produced it, in the order outcomes arrived.
///
/// Transport errors never enter the grouping. Iteration over [`iter`] has
/// no defined key order; use [`sorted`] when a stable order is needed.
///
/// [`iter`]: ResultGrouping::iter
/// [`sorted`]: ResultGrouping::sorted
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResultGrouping {
    entries: FxHashMap<String, Vec<CandidateUrl>>,
}

impl ResultGrouping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one outcome. Returns `false` when it was an error and dropped.
    pub fn record(&mut self, outcome: ProbeOutcome) -> bool {
        match outcome.classification {
            Classification::Status(status) => {
                self.entries.entry(status).or_default().push(outcome.url);
                true
            }
            Classification::Error(_) => false,
        }
    }

    pub fn get(&self, status: &str) -> Option<&[CandidateUrl]> {
        self.entries.get(status).map(Vec::as_slice)
    }

    /// Number of distinct status lines
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of URLs across all status lines
    pub fn url_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CandidateUrl])> {
        self.entries
            .iter()
            .map(|(status, urls)| (status.as_str(), urls.as_slice()))
    }

    /// Entries ordered by status line
    pub fn sorted(&self) -> Vec<(&str, &[CandidateUrl])> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
