//! Configuration management
//!
//! This module handles loading run configuration from TOML files and
//! merging it with CLI arguments. The resulting [`Config`] is built once at
//! startup and then only ever passed around by reference.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::core::constants::{concurrency, config_files, output_formats, timeouts};
use crate::core::error::{Result, StatusCheckError};
use crate::probe::DispatchStrategy;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Per-probe timeout in seconds
    pub timeout: Option<u64>,

    /// Also probe `https://` for every input line
    pub https: Option<bool>,

    /// Write the report to this file instead of stdout
    pub outfile: Option<String>,

    /// Suffix appended verbatim to every candidate URL
    pub path: Option<String>,

    /// Maximum number of in-flight probes (unbounded when unset)
    pub concurrency: Option<usize>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// Report format (text, json)
    pub output_format: Option<String>,

    /// Sort report entries by status line
    pub sort: Option<bool>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Some(timeouts::DEFAULT_TIMEOUT_SECONDS),
            https: Some(false),
            outfile: None,
            path: None,
            concurrency: None, // One task per URL
            user_agent: None,
            output_format: Some(output_formats::DEFAULT.to_string()),
            sort: Some(false),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file and validate it
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            StatusCheckError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            StatusCheckError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load the first config file found in the working directory or one of
    /// its parents, or the defaults when there is none.
    ///
    /// A file that exists but cannot be read, parsed or validated is an error.
    pub fn load_from_standard_locations() -> Result<Self> {
        Self::load_from_standard_locations_in(Path::new("."))
    }

    /// Same search as [`Config::load_from_standard_locations`], rooted at `dir`
    pub fn load_from_standard_locations_in(dir: &Path) -> Result<Self> {
        let mut candidate = dir.to_path_buf();
        for _ in 0..=config_files::PARENT_SEARCH_DEPTH {
            let path = candidate.join(config_files::FILE_NAME);
            if path.is_file() {
                return Self::load_from_file(&path);
            }
            candidate.push("..");
        }

        Ok(Self::default())
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        // Probe options
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if cli_config.https {
            self.https = Some(true);
        }
        if let Some(ref path) = cli_config.path {
            self.path = Some(path.clone());
        }
        if let Some(concurrency) = cli_config.concurrency {
            self.concurrency = Some(concurrency);
        }
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }

        // Output
        if let Some(ref outfile) = cli_config.outfile {
            self.outfile = Some(outfile.clone());
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if cli_config.sort {
            self.sort = Some(true);
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Get timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(timeouts::DEFAULT_TIMEOUT_SECONDS))
    }

    /// Whether every line is also probed over `https://`
    pub fn probe_https(&self) -> bool {
        self.https.unwrap_or(false)
    }

    /// Suffix appended to every candidate URL, empty when unset
    pub fn path_suffix(&self) -> &str {
        self.path.as_deref().unwrap_or("")
    }

    pub fn output_format(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
    }

    pub fn sort_output(&self) -> bool {
        self.sort.unwrap_or(false)
    }

    /// How the dispatcher fans out probes
    pub fn dispatch_strategy(&self) -> DispatchStrategy {
        match self.concurrency {
            Some(limit) => DispatchStrategy::Bounded(limit),
            None => DispatchStrategy::Unbounded,
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err(StatusCheckError::Config(
                    "Timeout cannot be 0. Expected a positive integer representing seconds."
                        .to_string(),
                ));
            }
            if timeout > timeouts::MAX_TIMEOUT_SECONDS {
                return Err(StatusCheckError::Config(format!(
                    "Timeout of {timeout} seconds is extremely large (>24 hours). Consider using a smaller value."
                )));
            }
        }

        if let Some(limit) = self.concurrency {
            if limit == 0 {
                return Err(StatusCheckError::Config(
                    "Concurrency cannot be 0. Expected a positive integer.".to_string(),
                ));
            }
            if limit > concurrency::MAX_CONCURRENCY {
                return Err(StatusCheckError::Config(format!(
                    "Concurrency of {limit} exceeds the maximum of {}.",
                    concurrency::MAX_CONCURRENCY
                )));
            }
        }

        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(StatusCheckError::Config(format!(
                "Invalid output format '{format}'. Expected one of: {}.",
                output_formats::ALL.join(", ")
            )));
        }

        if let Some(ref outfile) = self.outfile
            && outfile.trim().is_empty()
        {
            return Err(StatusCheckError::Config(
                "Output file path cannot be empty.".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Probe options
    pub timeout: Option<u64>,        // --timeout
    pub https: bool,                 // --https
    pub path: Option<String>,        // --path
    pub concurrency: Option<usize>,  // --concurrency
    pub user_agent: Option<String>,  // --user-agent

    // Output
    pub outfile: Option<String>,       // --outfile
    pub output_format: Option<String>, // --format
    pub sort: bool,                    // --sort
    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose
    pub no_progress: bool,             // --no-progress

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
