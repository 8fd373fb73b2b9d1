//! Per-structure operation statistics
//!
//! Every timed container operation lands in exactly one [`OperationStats`]
//! record: the one belonging to the structure it ran against.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::time::Duration;

/// The container a measurement applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureKind {
    /// FIFO queue, inserts at the tail
    Queue,
    /// LIFO stack, pushes on top
    Stack,
}

impl StructureKind {
    /// Supported structures, in report and chart order
    pub const ALL: [StructureKind; 2] = [StructureKind::Queue, StructureKind::Stack];

    /// Display label used in reports and charts
    pub fn label(self) -> &'static str {
        match self {
            StructureKind::Queue => "Queue",
            StructureKind::Stack => "Stack",
        }
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The kind of a timed operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Add,
    Search,
    Remove,
}

impl OperationKind {
    pub const ALL: [OperationKind; 3] =
        [OperationKind::Add, OperationKind::Search, OperationKind::Remove];

    /// Plural name used in the textual report
    pub fn report_name(self) -> &'static str {
        match self {
            OperationKind::Add => "Additions",
            OperationKind::Search => "Searches",
            OperationKind::Remove => "Removals",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Add => write!(f, "add"),
            OperationKind::Search => write!(f, "search"),
            OperationKind::Remove => write!(f, "remove"),
        }
    }
}

/// Counts and accumulated elapsed time for add, search and remove.
///
/// Values only grow: every [`record`](Self::record) adds one to a count and a
/// measured duration to the matching total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationStats {
    add_count: u64,
    add_elapsed: Duration,
    search_count: u64,
    search_elapsed: Duration,
    remove_count: u64,
    remove_elapsed: Duration,
}

impl OperationStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one operation of `kind` that took `elapsed`
    pub fn record(&mut self, kind: OperationKind, elapsed: Duration) {
        let (count, total) = match kind {
            OperationKind::Add => (&mut self.add_count, &mut self.add_elapsed),
            OperationKind::Search => (&mut self.search_count, &mut self.search_elapsed),
            OperationKind::Remove => (&mut self.remove_count, &mut self.remove_elapsed),
        };
        *count += 1;
        *total += elapsed;
    }

    pub fn count(&self, kind: OperationKind) -> u64 {
        match kind {
            OperationKind::Add => self.add_count,
            OperationKind::Search => self.search_count,
            OperationKind::Remove => self.remove_count,
        }
    }

    pub fn elapsed(&self, kind: OperationKind) -> Duration {
        match kind {
            OperationKind::Add => self.add_elapsed,
            OperationKind::Search => self.search_elapsed,
            OperationKind::Remove => self.remove_elapsed,
        }
    }

    /// Mean duration of one operation of `kind`, zero when none ran
    pub fn avg_elapsed(&self, kind: OperationKind) -> Duration {
        let count = self.count(kind);
        if count == 0 {
            return Duration::ZERO;
        }
        Duration::from_nanos((self.elapsed(kind).as_nanos() / u128::from(count)) as u64)
    }

    pub fn total_count(&self) -> u64 {
        self.add_count + self.search_count + self.remove_count
    }
}

/// One [`OperationStats`] record per [`StructureKind`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureStats {
    queue: OperationStats,
    stack: OperationStats,
}

impl StructureStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records in [`StructureKind::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (StructureKind, &OperationStats)> {
        StructureKind::ALL.into_iter().map(move |kind| (kind, &self[kind]))
    }

    /// Largest accumulated elapsed time for `kind` across all structures
    pub fn max_elapsed(&self, kind: OperationKind) -> Duration {
        self.iter().map(|(_, stats)| stats.elapsed(kind)).max().unwrap_or_default()
    }
}

impl Index<StructureKind> for StructureStats {
    type Output = OperationStats;

    fn index(&self, kind: StructureKind) -> &OperationStats {
        match kind {
            StructureKind::Queue => &self.queue,
            StructureKind::Stack => &self.stack,
        }
    }
}

impl IndexMut<StructureKind> for StructureStats {
    fn index_mut(&mut self, kind: StructureKind) -> &mut OperationStats {
        match kind {
            StructureKind::Queue => &mut self.queue,
            StructureKind::Stack => &mut self.stack,
        }
    }
}
