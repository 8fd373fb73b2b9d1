//! Test utilities and helper functions for analyzer tests
//!
//! This module provides deterministic stand-ins for the analyzer's
//! collaborators so tests can pin down seeding and inspect output.

use crate::lexeme::{CategorizedLexemes, LexemeCategory, LexemeSource};
use crate::sampler::Sampler;
use crate::stats::{StructureKind, StructureStats};
use crate::visualize::Visualizer;
use crate::Result;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::Arc;

/// Lexeme source that ignores the code text and returns fixed lexemes
#[derive(Debug, Clone, Default)]
pub struct StaticLexemeSource {
    lexemes: CategorizedLexemes,
}

impl StaticLexemeSource {
    pub fn new(lexemes: CategorizedLexemes) -> Self {
        Self { lexemes }
    }

    /// Every lexeme filed under [`LexemeCategory::Identifier`]
    pub fn identifiers(lexemes: &[&str]) -> Self {
        let mut categorized = CategorizedLexemes::new();
        if !lexemes.is_empty() {
            categorized.insert(
                LexemeCategory::Identifier,
                lexemes.iter().map(|s| s.to_string()).collect(),
            );
        }
        Self::new(categorized)
    }
}

impl LexemeSource for StaticLexemeSource {
    fn analyze(&self, _code: &str, category: Option<LexemeCategory>) -> CategorizedLexemes {
        self.lexemes
            .iter()
            .filter(|(c, _)| c.matches(category))
            .map(|(c, set)| (*c, set.clone()))
            .collect()
    }
}

/// Sampler that never shuffles and returns scripted sizes
///
/// Each call to `sample_size` consumes the next scripted size (clamped to
/// the upper bound); once the script runs out it returns the upper bound.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSampler {
    sizes: VecDeque<usize>,
}

impl ScriptedSampler {
    pub fn new(sizes: &[usize]) -> Self {
        Self { sizes: sizes.iter().copied().collect() }
    }
}

impl Sampler for ScriptedSampler {
    fn shuffle(&mut self, _pool: &mut [String]) {}

    fn sample_size(&mut self, upper: usize) -> usize {
        self.sizes.pop_front().map_or(upper, |size| size.clamp(1, upper))
    }
}

/// One captured [`Visualizer::render`] call
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCall {
    pub labels: Vec<String>,
    pub kinds: Vec<StructureKind>,
    pub stats: StructureStats,
}

/// Visualizer that records every render call; clones share the record
#[derive(Debug, Clone, Default)]
pub struct RecordingVisualizer {
    calls: Arc<Mutex<Vec<RenderCall>>>,
}

impl RecordingVisualizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.lock().clone()
    }
}

impl Visualizer for RecordingVisualizer {
    fn render(
        &mut self,
        labels: &[&str],
        kinds: &[StructureKind],
        stats: &StructureStats,
    ) -> Result<()> {
        self.calls.lock().push(RenderCall {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            kinds: kinds.to_vec(),
            stats: stats.clone(),
        });
        Ok(())
    }
}

/// In-memory writer whose clones share one buffer
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
