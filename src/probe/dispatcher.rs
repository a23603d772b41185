use std::fmt;
use std::sync::Arc;

use tokio::sync::{Semaphore, mpsc};

use crate::core::types::CandidateUrl;
use crate::probe::grouping::ResultGrouping;
use crate::probe::worker::Probe;
use crate::reporting::logging;
use crate::ui::progress::ProgressReporter;

/// How many probes may be in flight at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchStrategy {
    /// Every probe starts immediately
    #[default]
    Unbounded,
    /// At most `n` probes hold a permit at the same time
    Bounded(usize),
}

impl fmt::Display for DispatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchStrategy::Unbounded => write!(f, "unbounded"),
            DispatchStrategy::Bounded(limit) => write!(f, "bounded ({limit} in flight)"),
        }
    }
}

/// What a finished run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub grouping: ResultGrouping,
    /// Probes launched
    pub dispatched: usize,
    /// Outcomes taken off the channel
    pub received: usize,
    /// Transport errors, plus probes that vanished without reporting
    pub errors: usize,
}

/// Fans probes out as tokio tasks and aggregates their outcomes.
///
/// Workers only ever send on the channel. The grouping is owned by the
/// receive loop in [`Dispatcher::run`], so it is never touched concurrently.
pub struct Dispatcher<P> {
    probe: Arc<P>,
    strategy: DispatchStrategy,
}

impl<P: Probe + 'static> Dispatcher<P> {
    pub fn new(probe: P, strategy: DispatchStrategy) -> Self {
        Self {
            probe: Arc::new(probe),
            strategy,
        }
    }

    pub fn strategy(&self) -> DispatchStrategy {
        self.strategy
    }

    /// Probe every URL once and group the outcomes.
    ///
    /// Returns after exactly `urls.len()` outcomes were received. A worker
    /// that dies without reporting closes its sender, so the loop still ends
    /// and the missing outcome is counted as an error.
    pub async fn run(
        &self,
        urls: Vec<CandidateUrl>,
        mut progress: Option<&mut ProgressReporter>,
    ) -> RunSummary {
        let expected = urls.len();
        logging::log_dispatch_start(expected);

        if let Some(ref mut prog) = progress {
            prog.start_probing(expected);
        }

        let (tx, mut rx) = mpsc::unbounded_channel();
        let permits = match self.strategy {
            DispatchStrategy::Bounded(limit) => Some(Arc::new(Semaphore::new(limit.max(1)))),
            DispatchStrategy::Unbounded => None,
        };

        for url in urls {
            let tx = tx.clone();
            let probe = Arc::clone(&self.probe);
            let permits = permits.clone();
            tokio::spawn(async move {
                let _permit = match permits {
                    Some(semaphore) => semaphore.acquire_owned().await.ok(),
                    None => None,
                };
                let outcome = probe.probe(url).await;
                // The receiver outlives every sender that still has work to report
                let _ = tx.send(outcome);
            });
        }
        drop(tx);

        let mut summary = RunSummary {
            dispatched: expected,
            ..Default::default()
        };

        while summary.received < expected {
            let Some(outcome) = rx.recv().await else {
                break;
            };
            summary.received += 1;
            logging::log_outcome(&outcome);

            if !summary.grouping.record(outcome) {
                summary.errors += 1;
            }

            if let Some(ref prog) = progress {
                prog.advance();
            }
        }

        let lost = expected - summary.received;
        if lost > 0 {
            logging::log_warning(&format!(
                "{lost} probe(s) ended without reporting an outcome"
            ));
            summary.errors += lost;
        }

        if let Some(ref prog) = progress {
            prog.set_position(expected);
            prog.finish_probing(expected - summary.errors, expected);
        }

        summary
    }
}
