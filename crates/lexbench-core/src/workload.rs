//! Operation sequences run between seeding and reporting
//!
//! Any `FnMut(&mut TimingAnalyzer)` closure is an [`OperationSequence`]. For
//! reproducible runs prefer a [`Workload`]: an explicit, serializable list of
//! steps replayed in order.

use crate::analyzer::TimingAnalyzer;
use crate::stats::OperationKind;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Work performed against the analyzer before the report is built
pub trait OperationSequence {
    fn run(&mut self, analyzer: &mut TimingAnalyzer);
}

impl<F> OperationSequence for F
where
    F: FnMut(&mut TimingAnalyzer),
{
    fn run(&mut self, analyzer: &mut TimingAnalyzer) {
        self(analyzer)
    }
}

/// One recorded operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadStep {
    pub kind: OperationKind,
    pub lexeme: String,
}

/// Recorded sequence of operations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    steps: Vec<WorkloadStep>,
}

impl Workload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(self, lexeme: impl Into<String>) -> Self {
        self.step(OperationKind::Add, lexeme)
    }

    pub fn search(self, lexeme: impl Into<String>) -> Self {
        self.step(OperationKind::Search, lexeme)
    }

    pub fn remove(self, lexeme: impl Into<String>) -> Self {
        self.step(OperationKind::Remove, lexeme)
    }

    pub fn step(mut self, kind: OperationKind, lexeme: impl Into<String>) -> Self {
        self.steps.push(WorkloadStep { kind, lexeme: lexeme.into() });
        self
    }

    /// Build a workload from the analyzer's current queue.
    ///
    /// Draws a sample size `k` with [`TimingAnalyzer::random_sample_size`]
    /// and, for each of the first `k` queued lexemes, searches it, removes it
    /// and adds it back. Fails with [`crate::Error::EmptyQueue`] when nothing
    /// is queued.
    pub fn sampled(analyzer: &mut TimingAnalyzer) -> Result<Self> {
        let count = analyzer.random_sample_size()?;
        let workload = (0..count)
            .filter_map(|position| analyzer.lexeme_at_position(position))
            .fold(Self::new(), |workload, lexeme| {
                workload.search(lexeme).remove(lexeme).add(lexeme)
            });
        Ok(workload)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn steps(&self) -> &[WorkloadStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of steps of `kind`
    pub fn count(&self, kind: OperationKind) -> usize {
        self.steps.iter().filter(|step| step.kind == kind).count()
    }
}

impl OperationSequence for Workload {
    fn run(&mut self, analyzer: &mut TimingAnalyzer) {
        tracing::debug!(steps = self.steps.len(), "replaying workload");
        for step in &self.steps {
            match step.kind {
                OperationKind::Add => analyzer.add_lexeme(step.lexeme.as_str()),
                OperationKind::Search => {
                    analyzer.search_lexeme(&step.lexeme);
                },
                OperationKind::Remove => {
                    analyzer.remove_lexeme(&step.lexeme);
                },
            }
        }
    }
}

/// Operation sequence that samples a [`Workload`] from the freshly seeded
/// queue and replays it.
///
/// With an empty queue there is nothing to sample: no operation runs and no
/// statistics change.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampledWorkload;

impl OperationSequence for SampledWorkload {
    fn run(&mut self, analyzer: &mut TimingAnalyzer) {
        if analyzer.queue().is_empty() {
            tracing::debug!("queue is empty, no sampled workload to run");
            return;
        }
        match Workload::sampled(analyzer) {
            Ok(mut workload) => workload.run(analyzer),
            Err(e) => tracing::warn!("skipping sampled workload: {}", e),
        }
    }
}
