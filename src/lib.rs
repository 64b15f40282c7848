//! # lexdfa
//!
//! A small table-driven lexer that sorts whitespace-separated tokens into:
//! - the keywords `in` and `out`
//! - the arithmetic operators `+ - * /`
//! - identifiers starting with `id`
//! - unsigned integers and floating point numbers
//!
//! ## Architecture
//!
//! - `lexer::char_class`: maps each character to a class
//! - `lexer::table`: transition tables, one per lexer variant
//! - `lexer::engine`: runs a table over a token
//! - `lexer::token`: turns the final state plus the token into a category
//! - `lexer::scanner`: splits lines and drives the above
//! - `error`: error handling and diagnostics

pub mod error;
pub mod lexer;

// Re-export commonly used types
pub use error::{Diagnostic, LexError, LexResult};
pub use lexer::{
    classify_token, run, CharClass, Lexer, LexerOptions, State, Token, TokenCategory,
    TransitionTable, Variant,
};

/// Version of the lexer
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Classify one token with the floating point table
pub fn classify(token: &str) -> TokenCategory {
    let table = Variant::Float.table();
    classify_token(run(table, token), token)
}

/// Split a line and classify every token with the default options
pub fn tokenize(line: &str) -> LexResult<Vec<Token>> {
    Lexer::default().tokenize(line)
}
