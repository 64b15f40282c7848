//! Lexical analysis module
//!
//! A character classifier feeds a table-driven DFA; the state the DFA ends in,
//! together with the raw token, decides the token's category.

pub mod char_class;
pub mod engine;
pub mod scanner;
pub mod state;
pub mod table;
pub mod token;

pub use char_class::CharClass;
pub use engine::{run, run_traced, Step, Trace};
pub use scanner::{Lexer, LexerOptions};
pub use state::State;
pub use table::{TableBuilder, TransitionTable, Variant};
pub use token::{classify_token, Token, TokenCategory};
