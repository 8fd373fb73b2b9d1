//! Lexer for C/Java-family source text
//!
//! The lexer splits source code into a stream of classified lexemes.
//! Whitespace is dropped; characters that cannot start any lexeme are skipped.

use super::token::{Lexeme, LexemeCategory};

const KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "var", "void", "volatile", "while",
];

/// Words that read like identifiers but denote values
const WORD_LITERALS: &[&str] = &["true", "false", "null"];

/// Longest spellings first so that `>>=` never lexes as `>` `>=`
const OPERATORS: &[&str] = &[
    ">>>=", "<<=", ">>=", ">>>", "==", "!=", "<=", ">=", "&&", "||", "++", "--", "+=", "-=",
    "*=", "/=", "%=", "&=", "|=", "^=", "<<", ">>", "->", "::", "+", "-", "*", "/", "%", "=",
    "<", ">", "!", "&", "|", "^", "~", "?", ":",
];

const SEPARATORS: &[char] = &['(', ')', '{', '}', '[', ']', ';', ',', '.', '@'];

/// Lexer for tokenizing source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer from source code
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Get the next lexeme, or `None` once the input is exhausted
    pub fn next_lexeme(&mut self) -> Option<Lexeme> {
        loop {
            self.skip_whitespace();

            if self.is_at_end() {
                return None;
            }

            let ch = self.current_char();

            if ch == '/' {
                match self.peek_char() {
                    Some('/') => return Some(self.lex_line_comment()),
                    Some('*') => return Some(self.lex_block_comment()),
                    _ => {},
                }
            }

            if ch == '"' || ch == '\'' {
                return Some(self.lex_quoted(ch));
            }

            let leading_dot_number =
                ch == '.' && self.peek_char().is_some_and(|next| next.is_ascii_digit());
            if ch.is_ascii_digit() || leading_dot_number {
                return Some(self.lex_number());
            }

            if ch.is_alphabetic() || ch == '_' || ch == '$' {
                return Some(self.lex_word());
            }

            if let Some(lexeme) = self.lex_operator_or_separator() {
                return Some(lexeme);
            }

            let (line, column) = (self.line, self.column);
            let skipped = self.advance();
            tracing::debug!(%skipped, line, column, "skipping unrecognized character");
        }
    }

    /// Tokenize all input
    pub fn tokenize(&mut self) -> Vec<Lexeme> {
        let mut lexemes = Vec::new();
        while let Some(lexeme) = self.next_lexeme() {
            lexemes.push(lexeme);
        }
        lexemes
    }

    fn current_char(&self) -> char {
        self.input[self.position]
    }

    fn peek_char(&self) -> Option<char> {
        self.peek_nth(1)
    }

    fn peek_nth(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn starts_with(&self, pattern: &str) -> bool {
        pattern
            .chars()
            .enumerate()
            .all(|(offset, ch)| self.peek_nth(offset) == Some(ch))
    }

    fn advance(&mut self) -> char {
        let ch = self.current_char();
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        ch
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && self.current_char().is_whitespace() {
            self.advance();
        }
    }

    fn lex_line_comment(&mut self) -> Lexeme {
        let (line, column) = (self.line, self.column);
        let mut text = String::new();

        while !self.is_at_end() && self.current_char() != '\n' {
            text.push(self.advance());
        }

        Lexeme::new(LexemeCategory::Comment, text.trim_end().to_string(), line, column)
    }

    fn lex_block_comment(&mut self) -> Lexeme {
        let (line, column) = (self.line, self.column);
        let mut text = String::new();

        // Opening `/*`
        text.push(self.advance());
        text.push(self.advance());

        while !self.is_at_end() {
            if self.starts_with("*/") {
                text.push(self.advance());
                text.push(self.advance());
                break;
            }
            text.push(self.advance());
        }

        Lexeme::new(LexemeCategory::Comment, text, line, column)
    }

    /// String and character literals. An unterminated literal ends at the line break.
    fn lex_quoted(&mut self, quote: char) -> Lexeme {
        let (line, column) = (self.line, self.column);
        let mut text = String::new();

        text.push(self.advance());

        while !self.is_at_end() && self.current_char() != '\n' {
            let ch = self.advance();
            text.push(ch);

            if ch == '\\' {
                if !self.is_at_end() && self.current_char() != '\n' {
                    text.push(self.advance());
                }
            } else if ch == quote {
                break;
            }
        }

        Lexeme::new(LexemeCategory::Literal, text, line, column)
    }

    fn lex_number(&mut self) -> Lexeme {
        let (line, column) = (self.line, self.column);
        let mut text = String::new();

        if self.current_char() == '0' && matches!(self.peek_char(), Some('x') | Some('X')) {
            text.push(self.advance());
            text.push(self.advance());
            while !self.is_at_end()
                && (self.current_char().is_ascii_hexdigit() || self.current_char() == '_')
            {
                text.push(self.advance());
            }
            self.lex_number_suffix(&mut text);
            return Lexeme::new(LexemeCategory::Literal, text, line, column);
        }

        self.lex_digits(&mut text);

        // A dot only belongs to the number when a digit follows it
        if !self.is_at_end()
            && self.current_char() == '.'
            && self.peek_char().is_some_and(|next| next.is_ascii_digit())
        {
            text.push(self.advance());
            self.lex_digits(&mut text);
        }

        if !self.is_at_end() && matches!(self.current_char(), 'e' | 'E') {
            let exponent_follows = match self.peek_char() {
                Some(next) if next.is_ascii_digit() => true,
                Some('+') | Some('-') => self.peek_nth(2).is_some_and(|d| d.is_ascii_digit()),
                _ => false,
            };
            if exponent_follows {
                text.push(self.advance());
                if matches!(self.current_char(), '+' | '-') {
                    text.push(self.advance());
                }
                self.lex_digits(&mut text);
            }
        }

        self.lex_number_suffix(&mut text);
        Lexeme::new(LexemeCategory::Literal, text, line, column)
    }

    fn lex_digits(&mut self, text: &mut String) {
        while !self.is_at_end()
            && (self.current_char().is_ascii_digit() || self.current_char() == '_')
        {
            text.push(self.advance());
        }
    }

    fn lex_number_suffix(&mut self, text: &mut String) {
        if !self.is_at_end() && matches!(self.current_char(), 'l' | 'L' | 'f' | 'F' | 'd' | 'D') {
            text.push(self.advance());
        }
    }

    fn lex_word(&mut self) -> Lexeme {
        let (line, column) = (self.line, self.column);
        let mut word = String::new();

        while !self.is_at_end() {
            let ch = self.current_char();
            if ch.is_alphanumeric() || ch == '_' || ch == '$' {
                word.push(self.advance());
            } else {
                break;
            }
        }

        let category = if KEYWORDS.contains(&word.as_str()) {
            LexemeCategory::Keyword
        } else if WORD_LITERALS.contains(&word.as_str()) {
            LexemeCategory::Literal
        } else {
            LexemeCategory::Identifier
        };

        Lexeme::new(category, word, line, column)
    }

    fn lex_operator_or_separator(&mut self) -> Option<Lexeme> {
        let (line, column) = (self.line, self.column);

        if let Some(op) = OPERATORS.iter().find(|op| self.starts_with(op)) {
            for _ in 0..op.chars().count() {
                self.advance();
            }
            return Some(Lexeme::new(LexemeCategory::Operator, op.to_string(), line, column));
        }

        let ch = self.current_char();
        if SEPARATORS.contains(&ch) {
            self.advance();
            return Some(Lexeme::new(LexemeCategory::Separator, ch.to_string(), line, column));
        }

        None
    }
}
