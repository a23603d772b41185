//! Reading the host list and turning it into candidate URLs.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::config::Config;
use crate::core::error::{Result, StatusCheckError};
use crate::core::types::CandidateUrl;
use crate::discovery::expander::expand_line;

/// Candidate URLs built from an input file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateList {
    /// Candidates in input order
    pub urls: Vec<CandidateUrl>,
    /// Number of lines read, blank ones included
    pub original_count: usize,
}

impl CandidateList {
    pub fn generated_count(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

/// Read `path` line by line and expand every line with `config`.
///
/// Both a failure to open the file and a read error mid-scan are fatal.
pub fn read_candidates<P: AsRef<Path>>(path: P, config: &Config) -> Result<CandidateList> {
    let path = path.as_ref();
    let input_error = |source| StatusCheckError::Input {
        path: path.display().to_string(),
        source,
    };

    let file = File::open(path).map_err(input_error)?;
    let candidates = read_candidates_from(BufReader::new(file), config).map_err(input_error)?;

    debug!(
        "Read {} line(s) from '{}', expanded to {} URL(s)",
        candidates.original_count,
        path.display(),
        candidates.generated_count()
    );
    Ok(candidates)
}

/// Expand every line of an already-open reader.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so such
/// a line is still probed. Only a failing read aborts.
pub fn read_candidates_from<R: BufRead>(
    mut reader: R,
    config: &Config,
) -> std::io::Result<CandidateList> {
    let mut candidates = CandidateList::default();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        candidates.urls.extend(expand_line(&line, config));
        candidates.original_count += 1;
    }
    Ok(candidates)
}
