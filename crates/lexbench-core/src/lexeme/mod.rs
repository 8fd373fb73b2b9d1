//! Lexeme extraction
//!
//! This module turns source text into categorized sets of unique lexemes,
//! the raw material the analyzer seeds its containers from.

pub mod lexer;
pub mod token;

pub use lexer::Lexer;
pub use token::{Lexeme, LexemeCategory};

use std::collections::{BTreeMap, BTreeSet};

/// Unique lexeme texts grouped by category
pub type CategorizedLexemes = BTreeMap<LexemeCategory, BTreeSet<String>>;

/// A source of categorized lexemes.
///
/// Implementations must be deterministic: identical input yields identical
/// output, so that seeding is reproducible under a fixed sampler seed.
pub trait LexemeSource: Send {
    /// Extract lexemes from `code`, keeping only `category` when one is given.
    ///
    /// `None` selects every category.
    fn analyze(&self, code: &str, category: Option<LexemeCategory>) -> CategorizedLexemes;
}

/// Default lexeme source backed by [`Lexer`]
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeLexer;

impl CodeLexer {
    pub fn new() -> Self {
        Self
    }
}

impl LexemeSource for CodeLexer {
    fn analyze(&self, code: &str, category: Option<LexemeCategory>) -> CategorizedLexemes {
        let mut categorized = CategorizedLexemes::new();

        for lexeme in Lexer::new(code).tokenize() {
            if lexeme.category.matches(category) {
                categorized.entry(lexeme.category).or_default().insert(lexeme.text);
            }
        }

        tracing::debug!(
            categories = categorized.len(),
            lexemes = categorized.values().map(BTreeSet::len).sum::<usize>(),
            "analyzed source text"
        );
        categorized
    }
}

/// Flatten categorized lexemes into a pool, in category then set order
pub fn flatten(categorized: CategorizedLexemes) -> Vec<String> {
    categorized.into_values().flatten().collect()
}
