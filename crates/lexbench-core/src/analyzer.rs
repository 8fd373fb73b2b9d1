//! Timing analyzer for queue and stack operations
//!
//! [`TimingAnalyzer`] owns a FIFO queue and a LIFO stack of lexemes together
//! with one [`OperationStats`] record per structure. Every add, search and
//! remove issued through the analyzer is applied to both structures, each
//! call timed on its own, so the two records describe identical workloads.
//!
//! # Lifecycle
//!
//! ```text
//! constructed (empty) ──seed_from_code──▶ seeded ──run_analysis──▶ analyzed
//!                                           ▲                         │
//!                                           └─────────────────────────┘
//! ```
//!
//! Statistics are never reset; repeated runs accumulate. Build a new
//! analyzer for an isolated measurement.

use crate::config::AnalyzerConfig;
use crate::lexeme::{self, CodeLexer, LexemeCategory, LexemeSource};
use crate::report::{PerformanceReport, SeededContents};
use crate::sampler::{RandomSampler, Sampler};
use crate::stats::{OperationStats, StructureKind, StructureStats};
use crate::timed::{timed_add, timed_remove, timed_search};
use crate::visualize::{TextChart, Visualizer};
use crate::workload::OperationSequence;
use crate::{Error, Result};
use std::collections::VecDeque;
use std::io::{self, Write};

/// Per-structure outcome of a search or removal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Presence {
    pub queue: bool,
    pub stack: bool,
}

impl Presence {
    pub fn both(self) -> bool {
        self.queue && self.stack
    }

    pub fn neither(self) -> bool {
        !self.queue && !self.stack
    }
}

/// Benchmark harness comparing queue and stack operations on lexemes
pub struct TimingAnalyzer {
    queue: VecDeque<String>,
    stack: Vec<String>,
    stats: StructureStats,
    sampler: Box<dyn Sampler>,
    lexeme_source: Box<dyn LexemeSource>,
    visualizer: Box<dyn Visualizer>,
    output: Box<dyn Write + Send>,
    config: AnalyzerConfig,
}

impl TimingAnalyzer {
    /// Analyzer with default configuration, writing to stdout
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    /// Analyzer using `config`; a configured seed makes sampling reproducible
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self {
            queue: VecDeque::new(),
            stack: Vec::new(),
            stats: StructureStats::new(),
            sampler: Box::new(RandomSampler::new(config.seed)),
            lexeme_source: Box::new(CodeLexer::new()),
            visualizer: Box::new(TextChart::stdout(config.chart_width, config.time_unit)),
            output: Box::new(io::stdout()),
            config,
        }
    }

    pub fn with_lexeme_source(mut self, source: impl LexemeSource + 'static) -> Self {
        self.lexeme_source = Box::new(source);
        self
    }

    pub fn with_sampler(mut self, sampler: impl Sampler + 'static) -> Self {
        self.sampler = Box::new(sampler);
        self
    }

    pub fn with_visualizer(mut self, visualizer: impl Visualizer + 'static) -> Self {
        self.visualizer = Box::new(visualizer);
        self
    }

    /// Sink for the seeded-contents listing and the textual report
    pub fn with_output(mut self, output: impl Write + Send + 'static) -> Self {
        self.output = Box::new(output);
        self
    }

    /// Seed both structures with a random subset of the lexemes in `code`.
    ///
    /// The pool is shuffled and a size `k` in `1..=pool_len` is drawn; the
    /// first `k` lexemes are added to both structures. Returns `k`.
    ///
    /// Fails with [`Error::EmptyLexemePool`] before touching any state when
    /// the lexeme source yields nothing.
    pub fn seed_from_code(
        &mut self,
        code: &str,
        category: Option<LexemeCategory>,
    ) -> Result<usize> {
        let mut pool = lexeme::flatten(self.lexeme_source.analyze(code, category));
        if pool.is_empty() {
            tracing::warn!(?category, "no lexemes extracted from source text");
            return Err(Error::EmptyLexemePool);
        }

        self.sampler.shuffle(&mut pool);
        let count = self.sampler.sample_size(pool.len()).min(pool.len());
        tracing::debug!(pool = pool.len(), count, "seeding queue and stack");

        pool.truncate(count);
        for lexeme in pool {
            self.add_lexeme(lexeme);
        }
        Ok(count)
    }

    /// Add `lexeme` to the tail of the queue and the top of the stack
    pub fn add_lexeme(&mut self, lexeme: impl Into<String>) {
        let lexeme = lexeme.into();
        timed_add(lexeme.clone(), &mut self.queue, &mut self.stats[StructureKind::Queue]);
        timed_add(lexeme, &mut self.stack, &mut self.stats[StructureKind::Stack]);
    }

    /// Remove the first occurrence of `lexeme` from both structures.
    ///
    /// Removing an absent lexeme is not an error; it is still timed and counted.
    pub fn remove_lexeme(&mut self, lexeme: &str) -> Presence {
        let presence = Presence {
            queue: timed_remove(lexeme, &mut self.queue, &mut self.stats[StructureKind::Queue]),
            stack: timed_remove(lexeme, &mut self.stack, &mut self.stats[StructureKind::Stack]),
        };
        tracing::trace!(lexeme, ?presence, "removed lexeme");
        presence
    }

    /// Search both structures for `lexeme`; hits and misses are timed alike
    pub fn search_lexeme(&mut self, lexeme: &str) -> Presence {
        let presence = Presence {
            queue: timed_search(lexeme, &self.queue, &mut self.stats[StructureKind::Queue]),
            stack: timed_search(lexeme, &self.stack, &mut self.stats[StructureKind::Stack]),
        };
        tracing::trace!(lexeme, ?presence, "searched lexeme");
        presence
    }

    /// Seed from `code`, run `operation`, then report and visualize.
    ///
    /// The seeded contents and the report table are written to the output
    /// sink, after which the visualizer receives the structure labels, kinds
    /// and statistics. Nothing is reported when seeding fails.
    pub fn run_analysis<O>(
        &mut self,
        code: &str,
        mut operation: O,
        category: Option<LexemeCategory>,
    ) -> Result<PerformanceReport>
    where
        O: OperationSequence,
    {
        self.seed_from_code(code, category)?;
        if self.queue.is_empty() && self.stack.is_empty() {
            return Err(Error::EmptyLexemePool);
        }

        let seeded = SeededContents {
            queue: self.queue.iter().cloned().collect(),
            stack: self.stack.clone(),
        };
        tracing::info!(queue = self.queue.len(), stack = self.stack.len(), "seeded structures");
        writeln!(self.output, "{}", seeded)?;

        operation.run(self);

        let report = PerformanceReport::from_stats(&self.stats, seeded, self.config.time_unit);
        writeln!(self.output, "{}", report)?;
        self.output.flush()?;

        let labels = self.labels();
        self.visualizer.render(&labels, &StructureKind::ALL, &self.stats)?;

        tracing::info!(
            queue_ops = self.stats[StructureKind::Queue].total_count(),
            stack_ops = self.stats[StructureKind::Stack].total_count(),
            "analysis complete"
        );
        Ok(report)
    }

    /// A size drawn uniformly from `1..=queue_len`, for building workloads
    pub fn random_sample_size(&mut self) -> Result<usize> {
        if self.queue.is_empty() {
            return Err(Error::EmptyQueue);
        }
        Ok(self.sampler.sample_size(self.queue.len()))
    }

    /// Lexeme at `index` in queue order, without timing or mutation
    pub fn lexeme_at_position(&self, index: usize) -> Option<&str> {
        self.queue.get(index).map(String::as_str)
    }

    /// Queue contents, head first
    pub fn queue(&self) -> &VecDeque<String> {
        &self.queue
    }

    /// Stack contents, bottom first (the last element is the top)
    pub fn stack(&self) -> &[String] {
        &self.stack
    }

    pub fn stats(&self) -> &StructureStats {
        &self.stats
    }

    pub fn stats_for(&self, kind: StructureKind) -> &OperationStats {
        &self.stats[kind]
    }

    /// Structure kinds in report order
    pub fn kinds(&self) -> [StructureKind; 2] {
        StructureKind::ALL
    }

    /// Display labels, aligned with [`kinds`](Self::kinds)
    pub fn labels(&self) -> [&'static str; 2] {
        StructureKind::ALL.map(StructureKind::label)
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}

impl Default for TimingAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
