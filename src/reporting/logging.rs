use crate::config::Config;
use crate::core::types::{Classification, ProbeOutcome};
use log::{debug, error, info, warn};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    // A second init in the same process (tests) is not an error worth surfacing
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    let timeout = config.timeout_duration().as_secs();
    let https = config.probe_https();
    let path = config.path_suffix();
    let strategy = config.dispatch_strategy();

    info!("Configuration: timeout={timeout}s, https={https}, path={path:?}");
    info!("Dispatch: {strategy}");
    match config.outfile {
        Some(ref outfile) => info!("Output: {outfile} ({})", config.output_format()),
        None => info!("Output: stdout ({})", config.output_format()),
    }
}

/// Log input file information
pub fn log_input_info(path: &Path, original_count: usize, generated_count: usize) {
    info!(
        "Read {original_count} line(s) from {}, generated {generated_count} URL(s)",
        path.display()
    );
}

/// Log the start of a probe run
pub fn log_dispatch_start(url_count: usize) {
    info!("Starting {url_count} probe(s)");
}

/// Log one received outcome for debugging
pub fn log_outcome(outcome: &ProbeOutcome) {
    match outcome.classification {
        Classification::Status(ref status) => debug!("✓ {} -> {status}", outcome.url),
        Classification::Error(kind) => debug!("✗ {} -> {kind} error", outcome.url),
    }
}

/// Log run completion
pub fn log_run_complete(dispatched: usize, errors: usize, duration_ms: u128) {
    if errors == 0 {
        info!("✅ Probing complete: {dispatched}/{dispatched} URLs responded ({duration_ms}ms)");
    } else {
        warn!(
            "Probing complete: {}/{} URLs responded, {} transport error(s) dropped ({}ms)",
            dispatched - errors,
            dispatched,
            errors,
            duration_ms
        );
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}
