//! Performance report
//!
//! A [`PerformanceReport`] is a snapshot of the statistics after an analysis
//! run: one entry per structure and operation kind, plus the lexemes the
//! containers were seeded with. It renders as a plain-text table and exports
//! to JSON.

use crate::config::TimeUnit;
use crate::stats::{OperationKind, StructureKind, StructureStats};
use crate::Result;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Count and accumulated time for one structure and operation kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub structure: StructureKind,
    pub label: String,
    pub operation: OperationKind,
    pub count: u64,
    pub elapsed_ns: u64,
    /// Mean time of one operation, zero when none ran
    pub avg_elapsed_ns: u64,
}

impl ReportEntry {
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.elapsed_ns)
    }

    pub fn avg_elapsed(&self) -> Duration {
        Duration::from_nanos(self.avg_elapsed_ns)
    }
}

/// Container contents right after seeding, in iteration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeededContents {
    pub queue: Vec<String>,
    pub stack: Vec<String>,
}

impl fmt::Display for SeededContents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Extracted lexemes in each data structure:")?;
        writeln!(f, "{}: [{}]", StructureKind::Queue, self.queue.join(", "))?;
        writeln!(f, "{}: [{}]", StructureKind::Stack, self.stack.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceReport {
    /// RFC 3339 timestamp of report creation
    pub generated_at: String,
    pub time_unit: TimeUnit,
    pub seeded: SeededContents,
    /// Entries in structure order, then add/search/remove
    pub entries: Vec<ReportEntry>,
}

impl PerformanceReport {
    pub fn from_stats(stats: &StructureStats, seeded: SeededContents, time_unit: TimeUnit) -> Self {
        let entries = stats
            .iter()
            .flat_map(|(structure, record)| {
                OperationKind::ALL.into_iter().map(move |operation| ReportEntry {
                    structure,
                    label: structure.label().to_string(),
                    operation,
                    count: record.count(operation),
                    elapsed_ns: record.elapsed(operation).as_nanos() as u64,
                    avg_elapsed_ns: record.avg_elapsed(operation).as_nanos() as u64,
                })
            })
            .collect();

        Self {
            generated_at: Utc::now().to_rfc3339(),
            time_unit,
            seeded,
            entries,
        }
    }

    pub fn entry(
        &self,
        structure: StructureKind,
        operation: OperationKind,
    ) -> Option<&ReportEntry> {
        self.entries
            .iter()
            .find(|e| e.structure == structure && e.operation == operation)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for PerformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Timing analysis of each function:")?;
        for entry in &self.entries {
            writeln!(
                f,
                "{} {}: {} operations, {} (avg {})",
                entry.label,
                entry.operation.report_name(),
                entry.count,
                self.time_unit.format(entry.elapsed()),
                self.time_unit.format(entry.avg_elapsed())
            )?;
        }
        Ok(())
    }
}
