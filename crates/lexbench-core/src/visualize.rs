//! Visualization of structure statistics
//!
//! A [`Visualizer`] receives the display labels, the structure kinds they
//! belong to (positionally aligned) and the statistics to draw.
//! [`TextChart`] is the built-in implementation: a horizontal bar chart per
//! operation kind, written to any [`Write`] sink.

use crate::config::TimeUnit;
use crate::stats::{OperationKind, StructureKind, StructureStats};
use crate::{Error, Result};
use std::io::{self, Write};
use std::time::Duration;

pub trait Visualizer: Send {
    fn render(
        &mut self,
        labels: &[&str],
        kinds: &[StructureKind],
        stats: &StructureStats,
    ) -> Result<()>;
}

/// Horizontal bar chart rendered as text
pub struct TextChart<W: Write> {
    out: W,
    width: usize,
    time_unit: TimeUnit,
}

impl TextChart<io::Stdout> {
    pub fn stdout(width: usize, time_unit: TimeUnit) -> Self {
        Self::new(io::stdout(), width, time_unit)
    }
}

impl<W: Write> TextChart<W> {
    pub fn new(out: W, width: usize, time_unit: TimeUnit) -> Self {
        Self { out, width, time_unit }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Bar length for `elapsed` relative to the group maximum.
    ///
    /// Any non-zero time gets at least one cell so it stays visible.
    fn bar_len(&self, elapsed: Duration, max: Duration) -> usize {
        if self.width == 0 || max.is_zero() || elapsed.is_zero() {
            return 0;
        }
        let scaled = elapsed.as_nanos() * self.width as u128 / max.as_nanos();
        (scaled as usize).clamp(1, self.width)
    }
}

impl<W: Write + Send> Visualizer for TextChart<W> {
    fn render(
        &mut self,
        labels: &[&str],
        kinds: &[StructureKind],
        stats: &StructureStats,
    ) -> Result<()> {
        if labels.len() != kinds.len() {
            return Err(Error::Visualization(format!(
                "{} labels for {} structure kinds",
                labels.len(),
                kinds.len()
            )));
        }

        let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        writeln!(self.out, "Performance comparison ({})", self.time_unit)?;
        for operation in OperationKind::ALL {
            let max = stats.max_elapsed(operation);

            writeln!(self.out, "{}", operation.report_name())?;
            for (label, &kind) in labels.iter().zip(kinds) {
                let elapsed = stats[kind].elapsed(operation);
                let bar = "█".repeat(self.bar_len(elapsed, max));
                writeln!(
                    self.out,
                    "  {:<width$} |{} {}",
                    label,
                    bar,
                    self.time_unit.format(elapsed),
                    width = label_width
                )?;
            }
        }
        self.out.flush()?;

        tracing::debug!(series = kinds.len(), "rendered performance chart");
        Ok(())
    }
}
