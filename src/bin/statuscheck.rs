use clap::{CommandFactory, Parser};
use statuscheck::config::{CliConfig, Config};
use statuscheck::core::constants::output_formats;
use statuscheck::discovery::{CandidateList, read_candidates};
use statuscheck::probe::{Dispatcher, HttpProbe, RunSummary};
use statuscheck::reporting::logging;
use statuscheck::reporting::{ReportDestination, Reporter};
use statuscheck::ui::{Cli, Commands, ProgressReporter, cli_to_config, print_completions};

use std::path::Path;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Handle completion commands first
    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    match run_statuscheck_logic(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle completion commands and return exit code if a completion command was processed
pub fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Some(Commands::CompletionGenerate { shell }) => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(0)
        }
        None => None,
    }
}

/// Main probing logic extracted from main() for testing
pub async fn run_statuscheck_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli)?;
    let config = load_and_merge_config(&cli_config)?;

    let output_settings = setup_output_settings(&cli_config, &config);
    logging::init_logger(output_settings.verbose, output_settings.quiet);
    logging::log_config_info(&config);

    let infile = cli.infile.as_deref().ok_or("No input file provided")?;
    let candidates = read_input(infile, &config)?;

    // Fail on an unwritable report destination before any probe goes out
    let reporter = Reporter::from_config(&config)?;
    let mut sink = ReportDestination::from_config(&config)
        .open()
        .inspect_err(|e| {
            logging::log_error("Could not open report destination", Some(e));
        })?;

    if output_settings.should_show_console_info() {
        display_candidate_info(&config, &candidates);
    }

    let mut progress = create_progress_reporter(&output_settings);
    let summary = probe_candidates(candidates, &config, progress.as_mut()).await?;

    reporter.write(&summary, &mut sink).inspect_err(|e| {
        logging::log_error("Could not write report", Some(e));
    })?;

    Ok(0)
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file)?
    } else {
        Config::load_from_standard_locations()?
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Settings for console output
pub struct OutputSettings {
    pub quiet: bool,
    pub verbose: bool,
    pub output_format: String,
    pub report_to_stdout: bool,
    pub show_progress: bool,
}

impl OutputSettings {
    /// Console lines share stdout with the report only when no outfile is set,
    /// and a JSON report there must stay parseable
    pub fn should_show_console_info(&self) -> bool {
        !self.quiet && (self.output_format == output_formats::TEXT || !self.report_to_stdout)
    }
}

/// Setup output settings based on CLI and config
pub fn setup_output_settings(cli_config: &CliConfig, config: &Config) -> OutputSettings {
    let quiet = cli_config.quiet;
    let verbose = config.verbose.unwrap_or(false);
    let output_format = config.output_format().to_string();
    let report_to_stdout = config.outfile.is_none();
    let show_progress = !quiet && !cli_config.no_progress;

    OutputSettings {
        quiet,
        verbose,
        output_format,
        report_to_stdout,
        show_progress,
    }
}

/// Read the input file and expand every line into candidate URLs
pub fn read_input(
    infile: &Path,
    config: &Config,
) -> Result<CandidateList, Box<dyn std::error::Error>> {
    let candidates = read_candidates(infile, config).inspect_err(|e| {
        logging::log_error("Could not read input file", Some(e));
    })?;
    logging::log_input_info(
        infile,
        candidates.original_count,
        candidates.generated_count(),
    );
    Ok(candidates)
}

/// Display what is about to be probed
pub fn display_candidate_info(config: &Config, candidates: &CandidateList) {
    let path = config.path_suffix();
    if !path.is_empty() {
        println!("Appending path: {path}");
    }
    println!(
        "Generated {} URLs from original list of {}",
        candidates.generated_count(),
        candidates.original_count
    );
    println!("Checking all URLs for status codes:");
}

/// Create progress reporter if needed
pub fn create_progress_reporter(output_settings: &OutputSettings) -> Option<ProgressReporter> {
    if output_settings.show_progress {
        Some(ProgressReporter::new(true))
    } else {
        None
    }
}

/// Probe every candidate and aggregate the outcomes
pub async fn probe_candidates(
    candidates: CandidateList,
    config: &Config,
    progress: Option<&mut ProgressReporter>,
) -> Result<RunSummary, Box<dyn std::error::Error>> {
    let probe = HttpProbe::from_config(config)?;
    let dispatcher = Dispatcher::new(probe, config.dispatch_strategy());

    let start_time = std::time::Instant::now();
    let summary = dispatcher.run(candidates.urls, progress).await;
    logging::log_run_complete(
        summary.dispatched,
        summary.errors,
        start_time.elapsed().as_millis(),
    );

    Ok(summary)
}
