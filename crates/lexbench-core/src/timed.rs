//! Timed container operations
//!
//! Each function performs exactly one container operation between two reads
//! of the monotonic clock and records the measured duration in the given
//! [`OperationStats`]. The outcome (found, removed) never affects what is
//! recorded.

use crate::stats::{OperationKind, OperationStats};
use std::collections::VecDeque;
use std::time::Instant;

/// A container of lexemes that can be timed.
///
/// Iteration order is the container's natural order: head to tail for a
/// queue, bottom to top (push order) for a stack.
pub trait LexemeContainer {
    /// Insert at the natural insertion point
    fn insert(&mut self, lexeme: String);

    /// Linear scan for an equal lexeme
    fn contains_lexeme(&self, lexeme: &str) -> bool;

    /// Remove the first equal lexeme in iteration order, if any
    fn remove_first(&mut self, lexeme: &str) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Queue: insert at the tail, iterate from the head
impl LexemeContainer for VecDeque<String> {
    fn insert(&mut self, lexeme: String) {
        self.push_back(lexeme);
    }

    fn contains_lexeme(&self, lexeme: &str) -> bool {
        self.iter().any(|item| item == lexeme)
    }

    fn remove_first(&mut self, lexeme: &str) -> bool {
        match self.iter().position(|item| item == lexeme) {
            Some(idx) => self.remove(idx).is_some(),
            None => false,
        }
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

/// Stack: push on top, iterate from the bottom
impl LexemeContainer for Vec<String> {
    fn insert(&mut self, lexeme: String) {
        self.push(lexeme);
    }

    fn contains_lexeme(&self, lexeme: &str) -> bool {
        self.iter().any(|item| item == lexeme)
    }

    fn remove_first(&mut self, lexeme: &str) -> bool {
        match self.iter().position(|item| item == lexeme) {
            Some(idx) => {
                self.remove(idx);
                true
            },
            None => false,
        }
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// Insert `lexeme` and record an add
pub fn timed_add<C: LexemeContainer>(
    lexeme: String,
    container: &mut C,
    stats: &mut OperationStats,
) {
    let start = Instant::now();
    container.insert(lexeme);
    stats.record(OperationKind::Add, start.elapsed());
}

/// Look for `lexeme` and record a search, hit or miss
pub fn timed_search<C: LexemeContainer>(
    lexeme: &str,
    container: &C,
    stats: &mut OperationStats,
) -> bool {
    let start = Instant::now();
    let found = container.contains_lexeme(lexeme);
    stats.record(OperationKind::Search, start.elapsed());
    found
}

/// Remove the first occurrence of `lexeme` and record a removal, even when absent
pub fn timed_remove<C: LexemeContainer>(
    lexeme: &str,
    container: &mut C,
    stats: &mut OperationStats,
) -> bool {
    let start = Instant::now();
    let removed = container.remove_first(lexeme);
    stats.record(OperationKind::Remove, start.elapsed());
    removed
}
