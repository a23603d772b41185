//! Expansion of raw input lines into candidate URLs.

use crate::config::Config;
use crate::core::constants::schemes;
use crate::core::types::CandidateUrl;

/// Strip one leading `http://` and then one leading `https://` from a line.
///
/// Running the expander over its own output never double-prefixes a URL.
pub fn strip_scheme(line: &str) -> &str {
    let line = line.strip_prefix(schemes::HTTP).unwrap_or(line);
    line.strip_prefix(schemes::HTTPS).unwrap_or(line)
}

/// Expand one input line into zero or more candidate URLs.
///
/// Blank lines (after trimming and scheme stripping) produce nothing. The
/// `http://` candidate always comes first; the `https://` one is added only
/// when the config asks for it. The path suffix is appended verbatim.
///
/// # Examples
/// ```
/// use statuscheck::config::Config;
/// use statuscheck::discovery::expand_line;
///
/// let config = Config {
///     https: Some(true),
///     path: Some("/health".to_string()),
///     ..Default::default()
/// };
/// let urls: Vec<String> = expand_line("foo.com", &config)
///     .into_iter()
///     .map(|url| url.into_inner())
///     .collect();
/// assert_eq!(urls, ["http://foo.com/health", "https://foo.com/health"]);
/// ```
pub fn expand_line(line: &str, config: &Config) -> Vec<CandidateUrl> {
    let base = strip_scheme(line.trim());
    if base.is_empty() {
        return Vec::new();
    }

    let suffix = config.path_suffix();
    let mut urls = Vec::with_capacity(2);
    urls.push(CandidateUrl::new(format!("{}{base}{suffix}", schemes::HTTP)));
    if config.probe_https() {
        urls.push(CandidateUrl::new(format!("{}{base}{suffix}", schemes::HTTPS)));
    }
    urls
}

/// Expand many lines, keeping input order.
pub fn expand_lines<'a, I>(lines: I, config: &Config) -> Vec<CandidateUrl>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .flat_map(|line| expand_line(line, config))
        .collect()
}
