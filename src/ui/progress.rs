use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// Progress bar advanced once per received probe outcome.
pub struct ProgressReporter {
    probe_progress: Option<ProgressBar>,
    enabled: bool,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        Self {
            probe_progress: None,
            enabled,
        }
    }

    pub fn start_probing(&mut self, total_urls: usize) {
        if !self.enabled {
            return;
        }

        let pb = ProgressBar::with_draw_target(
            Some(total_urls as u64),
            ProgressDrawTarget::stderr(),
        );
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} URLs checked ({eta}) {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb.enable_steady_tick(Duration::from_millis(120));
        self.probe_progress = Some(pb);
    }

    /// Advance by one completed probe
    pub fn advance(&self) {
        if let Some(ref pb) = self.probe_progress {
            pb.inc(1);
        }
    }

    pub fn set_position(&self, current: usize) {
        if let Some(ref pb) = self.probe_progress {
            pb.set_position(current as u64);
        }
    }

    /// Current position, zero when disabled
    pub fn position(&self) -> u64 {
        self.probe_progress
            .as_ref()
            .map(ProgressBar::position)
            .unwrap_or(0)
    }

    pub fn finish_probing(&self, status_count: usize, total_count: usize) {
        if let Some(ref pb) = self.probe_progress {
            pb.finish_with_message(format!(
                "✓ {status_count}/{total_count} URLs responded"
            ));
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
