//! Token categories and acceptance
//!
//! The final state alone doesn't decide the category. The Identifier state
//! forgets which prefix led to it, and keywords aren't tracked by the
//! automaton at all, so acceptance looks at the raw token as well.

use std::fmt;

use super::state::State;

/// Category assigned to a whitespace-delimited token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    KeywordIn,       // in
    KeywordOut,      // out
    UnsignedInteger, // 123
    Float,           // 3.14
    Operator,        // + - * /
    Identifier,      // id followed by letters or digits
    Unknown,
}

impl TokenCategory {
    pub const ALL: [TokenCategory; 7] = [
        Self::KeywordIn,
        Self::KeywordOut,
        Self::UnsignedInteger,
        Self::Float,
        Self::Operator,
        Self::Identifier,
        Self::Unknown,
    ];

    /// Human-readable label, one per category
    pub fn label(&self) -> &'static str {
        match self {
            Self::KeywordIn => "Keyword 'in'",
            Self::KeywordOut => "Keyword 'out'",
            Self::UnsignedInteger => "Unsigned Integer",
            Self::Float => "Floating Point",
            Self::Operator => "Operator",
            Self::Identifier => "Identifier",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Decide the category of `token` given the state the automaton ended in.
///
/// Rules are tried in order; the first match wins. Keyword checks come last
/// and only look at the raw string.
pub fn classify_token(final_state: State, token: &str) -> TokenCategory {
    if final_state == State::Identifier && token.starts_with("id") {
        return TokenCategory::Identifier;
    }

    if final_state == State::Float && has_digits_around_dot(token) {
        return TokenCategory::Float;
    }

    if final_state == State::UnsignedInteger {
        return TokenCategory::UnsignedInteger;
    }

    if final_state == State::Operator && token.chars().count() == 1 {
        return TokenCategory::Operator;
    }

    match token {
        "in" => TokenCategory::KeywordIn,
        "out" => TokenCategory::KeywordOut,
        _ => TokenCategory::Unknown,
    }
}

/// The first '.' must exist with at least one character on each side.
/// The float table already guarantees this; the check holds for any table.
fn has_digits_around_dot(token: &str) -> bool {
    match token.find('.') {
        Some(dot) => {
            let before = token[..dot].chars().count();
            let after = token[dot + 1..].chars().count();
            before > 0 && after > 0
        }
        None => false,
    }
}

/// A classified token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub category: TokenCategory,
    pub lexeme: String,
}

impl Token {
    /// Create a new token
    pub fn new(category: TokenCategory, lexeme: impl Into<String>) -> Self {
        Self {
            category,
            lexeme: lexeme.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token: {}; String: {}", self.category, self.lexeme)
    }
}
