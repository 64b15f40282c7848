//! Character classes
//!
//! The DFA never looks at raw characters, only at the class each one falls
//! into. Classes are recomputed for every character and never stored.

use std::fmt;

/// Semantic class of a single input character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Letter,         // a-z A-Z
    Digit,          // 0-9
    OperatorSymbol, // + - * /
    Dot,            // .
    Other,
}

impl CharClass {
    /// Number of classes, i.e. the column count of a transition table
    pub const COUNT: usize = 5;

    /// Every class, in column order
    pub const ALL: [CharClass; Self::COUNT] = [
        Self::Letter,
        Self::Digit,
        Self::OperatorSymbol,
        Self::Dot,
        Self::Other,
    ];

    /// Classify a character. Total over `char`; only ASCII letters and
    /// digits count, everything outside ASCII is `Other`.
    pub fn of(c: char) -> Self {
        match c {
            c if c.is_ascii_alphabetic() => Self::Letter,
            c if c.is_ascii_digit() => Self::Digit,
            '+' | '-' | '*' | '/' => Self::OperatorSymbol,
            '.' => Self::Dot,
            _ => Self::Other,
        }
    }

    /// Column index in a transition table
    pub fn index(self) -> usize {
        self as usize
    }

    /// Get string representation of the class
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Letter => "letter",
            Self::Digit => "digit",
            Self::OperatorSymbol => "operator",
            Self::Dot => "dot",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
