//! Lexeme definitions for source-code analysis

use serde::{Deserialize, Serialize};
use std::fmt;

/// A lexeme extracted from source text with position information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    /// The category this lexeme was classified into
    pub category: LexemeCategory,
    /// The source text for this lexeme, exactly as written
    pub text: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl Lexeme {
    /// Create a new lexeme
    pub fn new(category: LexemeCategory, text: String, line: usize, column: usize) -> Self {
        Self { category, text, line, column }
    }
}

/// Classification tag for a lexeme
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LexemeCategory {
    Keyword,
    Identifier,
    Operator,
    Literal,
    Separator,
    Comment,
}

impl LexemeCategory {
    /// Every category, in map iteration order
    pub const ALL: [LexemeCategory; 6] = [
        LexemeCategory::Keyword,
        LexemeCategory::Identifier,
        LexemeCategory::Operator,
        LexemeCategory::Literal,
        LexemeCategory::Separator,
        LexemeCategory::Comment,
    ];

    /// Check whether this category passes an optional filter.
    ///
    /// `None` means "no filter", which is the same as selecting every category.
    pub fn matches(self, filter: Option<LexemeCategory>) -> bool {
        filter.map_or(true, |wanted| wanted == self)
    }
}

impl fmt::Display for LexemeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexemeCategory::Keyword => write!(f, "keyword"),
            LexemeCategory::Identifier => write!(f, "identifier"),
            LexemeCategory::Operator => write!(f, "operator"),
            LexemeCategory::Literal => write!(f, "literal"),
            LexemeCategory::Separator => write!(f, "separator"),
            LexemeCategory::Comment => write!(f, "comment"),
        }
    }
}
