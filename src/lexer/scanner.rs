//! Line lexer
//!
//! Splits a line on whitespace and classifies every piece with the DFA. The
//! lexer holds only its options and a reference to a shared table, so one
//! instance can be reused for any number of lines.

use crate::error::{LexError, LexResult};
use super::engine;
use super::table::{TransitionTable, Variant};
use super::token::{classify_token, Token, TokenCategory};

/// Characters that separate tokens
pub const DELIMITERS: &[char] = &[' ', '\t', '\n', '\r'];

/// Longest line accepted by default
pub const DEFAULT_MAX_LINE_LENGTH: usize = 99;

/// Configuration for a `Lexer`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerOptions {
    /// Which transition table to use
    pub variant: Variant,
    /// Longest line in characters, not counting the line terminator;
    /// 0 means unlimited
    pub max_line_length: usize,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

/// Lexer for whitespace-separated tokens
#[derive(Debug, Clone)]
pub struct Lexer {
    options: LexerOptions,
    table: &'static TransitionTable,
}

impl Lexer {
    /// Create a new lexer
    pub fn new(options: LexerOptions) -> Self {
        Self {
            options,
            table: options.variant.table(),
        }
    }

    pub fn options(&self) -> &LexerOptions {
        &self.options
    }

    pub fn table(&self) -> &TransitionTable {
        self.table
    }

    /// Split a line into tokens, in input order
    pub fn split<'a>(&self, line: &'a str) -> impl Iterator<Item = &'a str> {
        line.split(DELIMITERS).filter(|piece| !piece.is_empty())
    }

    /// Classify a single token
    pub fn recognise(&self, token: &str) -> TokenCategory {
        classify_token(engine::run(self.table, token), token)
    }

    /// Split and classify a whole line
    pub fn tokenize(&self, line: &str) -> LexResult<Vec<Token>> {
        self.check_length(line)?;

        Ok(self
            .split(line)
            .map(|piece| Token::new(self.recognise(piece), piece))
            .collect())
    }

    /// Like `tokenize`, classifying tokens on the rayon thread pool
    #[cfg(feature = "parallel")]
    pub fn tokenize_parallel(&self, line: &str) -> LexResult<Vec<Token>> {
        use rayon::prelude::*;

        self.check_length(line)?;

        let pieces: Vec<&str> = self.split(line).collect();
        Ok(pieces
            .par_iter()
            .map(|piece| Token::new(self.recognise(piece), *piece))
            .collect())
    }

    fn check_length(&self, line: &str) -> LexResult<()> {
        let limit = self.options.max_line_length;
        if limit == 0 {
            return Ok(());
        }

        let length = line.trim_end_matches(&['\n', '\r'][..]).chars().count();
        if length > limit {
            return Err(LexError::LineTooLong { length, limit });
        }
        Ok(())
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new(LexerOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn categories(line: &str) -> Vec<TokenCategory> {
        Lexer::default()
            .tokenize(line)
            .unwrap()
            .into_iter()
            .map(|token| token.category)
            .collect()
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(categories(""), Vec::<TokenCategory>::new());
        assert_eq!(categories(" \t \n"), Vec::<TokenCategory>::new());
    }

    #[test]
    fn test_mixed_line() {
        use TokenCategory::*;
        assert_eq!(
            categories("id1 + 23 out 3.14 $"),
            vec![Identifier, Operator, UnsignedInteger, KeywordOut, Float, Unknown]
        );
    }

    #[test]
    fn test_split_on_tabs_and_runs_of_spaces() {
        let lexer = Lexer::default();
        let pieces: Vec<_> = lexer.split("in\t\tidx   *\r\n").collect();
        assert_eq!(pieces, vec!["in", "idx", "*"]);
    }

    #[test]
    fn test_lexemes_are_kept() {
        let tokens = Lexer::default().tokenize("idA / 0.5\n").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenCategory::Identifier, "idA"),
                Token::new(TokenCategory::Operator, "/"),
                Token::new(TokenCategory::Float, "0.5"),
            ]
        );
    }

    #[test]
    fn test_variants() {
        let baseline = Lexer::new(LexerOptions {
            variant: Variant::Baseline,
            ..LexerOptions::default()
        });
        assert_eq!(baseline.recognise("42"), TokenCategory::Unknown);
        assert_eq!(baseline.recognise("in"), TokenCategory::KeywordIn);

        let integer = Lexer::new(LexerOptions {
            variant: Variant::Integer,
            ..LexerOptions::default()
        });
        assert_eq!(integer.recognise("42"), TokenCategory::UnsignedInteger);
        assert_eq!(integer.recognise("4.2"), TokenCategory::Unknown);
    }

    #[test]
    fn test_line_too_long() {
        let lexer = Lexer::new(LexerOptions {
            max_line_length: 5,
            ..LexerOptions::default()
        });
        assert!(lexer.tokenize("id1 +\n").is_ok());
        assert_eq!(
            lexer.tokenize("id1 + 2"),
            Err(LexError::LineTooLong { length: 7, limit: 5 })
        );
    }

    #[test]
    fn test_unlimited_line() {
        let lexer = Lexer::new(LexerOptions {
            max_line_length: 0,
            ..LexerOptions::default()
        });
        let line = "1 ".repeat(500);
        assert_eq!(lexer.tokenize(&line).unwrap().len(), 500);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_keeps_order() {
        let lexer = Lexer::new(LexerOptions {
            max_line_length: 0,
            ..LexerOptions::default()
        });
        let line = "id1 + 23 out 3.14 $ ".repeat(50);
        assert_eq!(
            lexer.tokenize_parallel(&line).unwrap(),
            lexer.tokenize(&line).unwrap()
        );
    }
}
