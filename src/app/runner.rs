//! Tick replay over a set of triggers.
//!
//! The runner plays the part of a market-data source: every tick goes to
//! every trigger, in order, and each trigger decides for itself whether the
//! tick concerns it.

use std::io::BufRead;

use tracing::{debug, info};

use crate::application::{PriceThresholdTrigger, TickOutcome};
use crate::domain::{CompletionNotice, FailureNotice, PriceTick};
use crate::error::{Error, Result};
use crate::port::outbound::notifier::Observer;

/// Counters for one replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub ticks: usize,
    pub completions: usize,
    pub failures: usize,
}

impl ReplaySummary {
    fn record(&mut self, outcome: TickOutcome) {
        match outcome {
            TickOutcome::Completed => self.completions += 1,
            TickOutcome::Failed => self.failures += 1,
            TickOutcome::Ignored => {}
        }
    }
}

/// Delivers ticks to an ordered set of triggers.
#[derive(Debug, Default)]
pub struct Runner {
    triggers: Vec<PriceThresholdTrigger>,
}

impl Runner {
    #[must_use]
    pub fn new(triggers: Vec<PriceThresholdTrigger>) -> Self {
        Self { triggers }
    }

    #[must_use]
    pub fn triggers(&self) -> &[PriceThresholdTrigger] {
        &self.triggers
    }

    /// Subscribe `observer` to both outcome channels of every trigger.
    pub fn observe_all<O>(&self, observer: O)
    where
        O: Observer<CompletionNotice> + Observer<FailureNotice> + Clone + 'static,
    {
        for trigger in &self.triggers {
            trigger.subscribe_completion(observer.clone());
            trigger.subscribe_failure(observer.clone());
        }
    }

    /// Deliver one tick to every trigger.
    pub fn dispatch(&self, tick: &PriceTick) -> Vec<TickOutcome> {
        self.triggers.iter().map(|t| t.on_tick(tick)).collect()
    }

    /// Read JSON-lines ticks from `reader` and deliver each one.
    ///
    /// Blank lines are skipped. A malformed line stops the replay with
    /// [`Error::Tick`]; ticks before it have already been delivered.
    pub fn replay<R: BufRead>(&self, reader: R) -> Result<ReplaySummary> {
        let mut summary = ReplaySummary::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let tick: PriceTick = serde_json::from_str(line).map_err(|source| Error::Tick {
                line: index + 1,
                source,
            })?;
            debug!(instrument = %tick.instrument, price = %tick.price, "Tick received");

            summary.ticks += 1;
            for outcome in self.dispatch(&tick) {
                summary.record(outcome);
            }
        }

        info!(
            ticks = summary.ticks,
            completions = summary.completions,
            failures = summary.failures,
            "Replay finished"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::executor::ScriptedExecutor;
    use crate::testkit::observer::RecordingObserver;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn runner() -> Runner {
        let executor = Arc::new(ScriptedExecutor::accepting());
        Runner::new(vec![
            PriceThresholdTrigger::new("FB", 100, dec!(200.0)).with_executor(executor.clone()),
            PriceThresholdTrigger::new("MSFT", 300, dec!(100.0)).with_executor(executor),
        ])
    }

    #[test]
    fn replay_counts_outcomes_and_skips_blank_lines() {
        let runner = runner();
        let recorder = RecordingObserver::new();
        runner.observe_all(recorder.clone());

        let input = r#"{"instrument":"FB","price":"199.9"}

{"instrument":"MSFT","price":"99.0"}
{"instrument":"GOOG","price":"999.0"}
"#;
        let summary = runner.replay(input.as_bytes()).unwrap();

        assert_eq!(
            summary,
            ReplaySummary {
                ticks: 3,
                completions: 2,
                failures: 0,
            }
        );
        let instruments: Vec<_> = recorder
            .notices()
            .iter()
            .map(|n| n.instrument().to_string())
            .collect();
        assert_eq!(instruments, vec!["FB", "MSFT"]);
    }

    #[test]
    fn replay_reports_line_of_malformed_tick() {
        let runner = runner();
        let input = "{\"instrument\":\"FB\",\"price\":\"250\"}\nnot json\n";

        match runner.replay(input.as_bytes()) {
            Err(Error::Tick { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected tick error, got {other:?}"),
        }
    }
}
