// Command-line interface definitions and parsing for statuscheck

use crate::config::CliConfig;
use crate::core::constants::{output_formats, timeouts};
use crate::core::error::{Result, StatusCheckError};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// File with one hostname or URL per line
    #[arg(value_name = "INFILE", required = true)]
    pub infile: Option<PathBuf>,

    // Probe Options
    /// Request timeout in seconds (default: 10)
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        help_heading = "Probe Options"
    )]
    pub timeout: Option<u64>,

    /// Also probe https:// for every line
    #[arg(short = 's', long, help_heading = "Probe Options")]
    pub https: bool,

    /// Path to append to each URL (e.g. /health)
    #[arg(
        short = 'p',
        long,
        value_name = "PATH",
        allow_hyphen_values = true,
        help_heading = "Probe Options"
    )]
    pub path: Option<String>,

    /// Maximum concurrent probes (default: one per URL)
    #[arg(long, value_name = "COUNT", help_heading = "Probe Options")]
    pub concurrency: Option<usize>,

    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Probe Options")]
    pub user_agent: Option<String>,

    // Output & Verbosity
    /// File to write the report to (default: stdout)
    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help_heading = "Output & Verbosity"
    )]
    pub outfile: Option<String>,

    /// Report format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    /// Sort report entries by status line
    #[arg(long, help_heading = "Output & Verbosity")]
    pub sort: bool,

    /// Suppress console messages and progress (the report is still written)
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Disable the progress bar
    #[arg(long, help_heading = "Output & Verbosity")]
    pub no_progress: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Convert derive-based CLI arguments to a CliConfig structure
pub fn cli_to_config(cli: &Cli) -> Result<CliConfig> {
    let mut cli_config = CliConfig::default();

    // Probe options
    if let Some(timeout) = cli.timeout {
        if timeout == 0 {
            return Err(StatusCheckError::InvalidArgument(
                "Timeout cannot be 0. Expected a positive integer representing seconds."
                    .to_string(),
            ));
        }
        if timeout > timeouts::WARN_TIMEOUT_SECONDS {
            eprintln!(
                "Warning: Timeout of {timeout} seconds is quite large. Consider using a smaller value for better user experience."
            );
        }
        cli_config.timeout = Some(timeout);
    }

    cli_config.https = cli.https;
    cli_config.path = cli.path.clone();

    if let Some(concurrency) = cli.concurrency {
        if concurrency == 0 {
            return Err(StatusCheckError::InvalidArgument(
                "Concurrency cannot be 0. Expected a positive integer representing the number of concurrent probes."
                    .to_string(),
            ));
        }
        cli_config.concurrency = Some(concurrency);
    }

    cli_config.user_agent = cli.user_agent.clone();

    // Output & format
    cli_config.outfile = cli.outfile.clone();
    cli_config.output_format = cli.format.clone();
    cli_config.sort = cli.sort;
    cli_config.quiet = cli.quiet;
    cli_config.verbose = cli.verbose;
    cli_config.no_progress = cli.no_progress;

    // Configuration
    cli_config.config_file = cli.config.clone();
    cli_config.no_config = cli.no_config;

    Ok(cli_config)
}
