//! DFA states

use std::fmt;

/// A state of the lexer automaton. Only the tag matters; no data is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Start,
    IdentifierPrefix, // one leading letter seen
    Identifier,
    UnsignedInteger,
    DotSeen, // digits then '.', waiting for a digit
    Float,
    Operator,
    Error, // absorbing
}

impl State {
    /// Number of states, i.e. the row count of a transition table
    pub const COUNT: usize = 8;

    /// Every state, in row order
    pub const ALL: [State; Self::COUNT] = [
        Self::Start,
        Self::IdentifierPrefix,
        Self::Identifier,
        Self::UnsignedInteger,
        Self::DotSeen,
        Self::Float,
        Self::Operator,
        Self::Error,
    ];

    /// Row index in a transition table
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_error(self) -> bool {
        self == Self::Error
    }

    /// Get string representation of the state
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::IdentifierPrefix => "identifier-prefix",
            Self::Identifier => "identifier",
            Self::UnsignedInteger => "unsigned-integer",
            Self::DotSeen => "dot-seen",
            Self::Float => "float",
            Self::Operator => "operator",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_order() {
        for (i, state) in State::ALL.iter().enumerate() {
            assert_eq!(state.index(), i);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(State::DotSeen.to_string(), "dot-seen");
        assert!(State::Error.is_error());
        assert!(!State::Start.is_error());
    }
}
