//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, capturing intermediate
//! artifacts for debugging, and emitting structured telemetry.
//!
//! Pass [`NoopObserver`] for zero-overhead execution; use
//! [`StageTimingObserver`] to collect per-stage reports.

use std::time::{Duration, Instant};

use crate::pipeline::artifacts::{CandidateSet, FrequencyTable, RankedResult, SentenceSet};

/// Stage name constants, in execution order.
pub const STAGE_TOKENIZE: &str = "tokenize";
pub const STAGE_CANDIDATES: &str = "candidates";
pub const STAGE_COUNT: &str = "count";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_FORMAT: &str = "format";

// ─── Timing ─────────────────────────────────────────────────────────────────

/// Wall-clock stopwatch for one stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    start: Instant,
}

impl StageClock {
    /// Start the clock.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time since the clock started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

// ─── Reports ────────────────────────────────────────────────────────────────

/// Per-stage metrics handed to observers at each stage boundary.
///
/// Every report carries elapsed time; the remaining fields are populated
/// only by the stages they apply to.
#[derive(Debug, Clone, Default)]
pub struct StageReport {
    elapsed: Duration,
    sentences: Option<usize>,
    tokens: Option<usize>,
    candidates: Option<usize>,
    distinct: Option<usize>,
    suppressed: Option<usize>,
    emitted: Option<usize>,
}

impl StageReport {
    /// A report carrying only elapsed time.
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Self::default()
        }
    }

    /// Wall-clock time the stage took.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Sentence count (tokenize stage).
    pub fn sentences(&self) -> Option<usize> {
        self.sentences
    }

    /// Total token count (tokenize stage).
    pub fn tokens(&self) -> Option<usize> {
        self.tokens
    }

    /// Candidate count including repeats (candidates stage).
    pub fn candidates(&self) -> Option<usize> {
        self.candidates
    }

    /// Distinct phrase count (count stage).
    pub fn distinct(&self) -> Option<usize> {
        self.distinct
    }

    /// Number of phrases removed by subphrase suppression (rank stage).
    pub fn suppressed(&self) -> Option<usize> {
        self.suppressed
    }

    /// Number of phrases in the final ranking (rank stage).
    pub fn emitted(&self) -> Option<usize> {
        self.emitted
    }
}

/// Fluent construction of a [`StageReport`] with optional metrics.
#[derive(Debug, Clone)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    /// Start from elapsed time.
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    /// Record the sentence count.
    pub fn sentences(mut self, n: usize) -> Self {
        self.report.sentences = Some(n);
        self
    }

    /// Record the total token count.
    pub fn tokens(mut self, n: usize) -> Self {
        self.report.tokens = Some(n);
        self
    }

    /// Record the candidate count.
    pub fn candidates(mut self, n: usize) -> Self {
        self.report.candidates = Some(n);
        self
    }

    /// Record the distinct phrase count.
    pub fn distinct(mut self, n: usize) -> Self {
        self.report.distinct = Some(n);
        self
    }

    /// Record the suppressed phrase count.
    pub fn suppressed(mut self, n: usize) -> Self {
        self.report.suppressed = Some(n);
        self
    }

    /// Record the emitted phrase count.
    pub fn emitted(mut self, n: usize) -> Self {
        self.report.emitted = Some(n);
        self
    }

    /// Finish the report.
    pub fn build(self) -> StageReport {
        self.report
    }
}

// ─── Observer ───────────────────────────────────────────────────────────────

/// Callbacks fired at pipeline stage boundaries.
///
/// All methods have empty default bodies, so implementors override only what
/// they care about.
pub trait PipelineObserver {
    /// A stage is about to run.
    fn on_stage_start(&mut self, _stage: &'static str) {}

    /// A stage finished; `report` carries its timing and metrics.
    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// The tokenizer's output.
    fn on_sentences(&mut self, _sentences: &SentenceSet) {}

    /// The candidate generator's output.
    fn on_candidates(&mut self, _candidates: &CandidateSet) {}

    /// The counter's output.
    fn on_table(&mut self, _table: &FrequencyTable) {}

    /// The ranker's output.
    fn on_ranked(&mut self, _ranked: &RankedResult) {}
}

/// Observer that does nothing — the zero-overhead default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records every stage's report, in execution order.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    /// Create an empty timing observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The collected (stage, report) pairs.
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_builder_sets_metrics() {
        let report = StageReportBuilder::new(Duration::from_millis(5))
            .sentences(3)
            .tokens(12)
            .build();
        assert_eq!(report.sentences(), Some(3));
        assert_eq!(report.tokens(), Some(12));
        assert_eq!(report.candidates(), None);
    }

    #[test]
    fn test_plain_report_has_no_metrics() {
        let report = StageReport::new(Duration::ZERO);
        assert!(report.sentences().is_none());
        assert!(report.suppressed().is_none());
        assert!(report.emitted().is_none());
    }

    #[test]
    fn test_timing_observer_collects_in_order() {
        let mut obs = StageTimingObserver::new();
        obs.on_stage_end(STAGE_TOKENIZE, &StageReport::new(Duration::ZERO));
        obs.on_stage_end(STAGE_RANK, &StageReport::new(Duration::ZERO));
        let names: Vec<&str> = obs.reports().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec![STAGE_TOKENIZE, STAGE_RANK]);
    }

    #[test]
    fn test_clock_measures_something() {
        let clock = StageClock::start();
        assert!(clock.elapsed() <= clock.elapsed() + Duration::from_nanos(1));
    }
}
