//! Transition tables
//!
//! A table is a total function `State × CharClass → State` stored as a dense
//! array. Tables are checked when built and never change afterwards, so one
//! instance can be shared by any number of scans, across threads.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;

use super::char_class::CharClass;
use super::state::State;
use crate::error::{LexError, LexResult};

type Row = [State; CharClass::COUNT];

/// Immutable transition table of the lexer automaton
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    rows: [Row; State::COUNT],
}

impl TransitionTable {
    /// Start building a table
    pub fn builder() -> TableBuilder {
        TableBuilder::default()
    }

    /// Look up the state reached from `state` on a character of `class`
    #[inline]
    pub fn next(&self, state: State, class: CharClass) -> State {
        self.rows[state.index()][class.index()]
    }

    /// The row of transitions leaving `state`, in `CharClass::ALL` order
    pub fn row(&self, state: State) -> &[State; CharClass::COUNT] {
        &self.rows[state.index()]
    }
}

/// Collects rows for a `TransitionTable` and checks them on `build`
#[derive(Debug, Default)]
pub struct TableBuilder {
    rows: [Option<Row>; State::COUNT],
    duplicate: Option<State>,
}

impl TableBuilder {
    /// Define the transitions leaving `state`, in `CharClass::ALL` order
    pub fn row(mut self, state: State, targets: Row) -> Self {
        let slot = &mut self.rows[state.index()];
        if slot.is_some() && self.duplicate.is_none() {
            self.duplicate = Some(state);
        }
        *slot = Some(targets);
        self
    }

    /// Define `state` as a dead state: every class leads to Error
    pub fn dead(self, state: State) -> Self {
        self.row(state, [State::Error; CharClass::COUNT])
    }

    /// Validate and finish the table.
    ///
    /// Every state needs exactly one row and the Error row must lead back to
    /// Error on every class.
    pub fn build(self) -> LexResult<TransitionTable> {
        if let Some(state) = self.duplicate {
            return Err(LexError::DuplicateRow { state });
        }

        let mut rows = [[State::Error; CharClass::COUNT]; State::COUNT];
        for state in State::ALL {
            rows[state.index()] =
                self.rows[state.index()].ok_or(LexError::IncompleteTable { state })?;
        }

        let error_row = rows[State::Error.index()];
        for class in CharClass::ALL {
            let target = error_row[class.index()];
            if !target.is_error() {
                return Err(LexError::ErrorNotAbsorbing { class, target });
            }
        }

        Ok(TransitionTable { rows })
    }
}

/// Which generation of the lexer a table implements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Keywords, operators and identifiers
    Baseline,
    /// Baseline plus unsigned integers
    Integer,
    /// Integer plus floating point numbers
    #[default]
    Float,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Self::Baseline, Self::Integer, Self::Float];

    /// The shared table for this variant, built on first use
    pub fn table(self) -> &'static TransitionTable {
        match self {
            Self::Baseline => &BASELINE,
            Self::Integer => &INTEGER,
            Self::Float => &FLOAT,
        }
    }

    /// Build a fresh table for this variant
    pub fn build_table(self) -> LexResult<TransitionTable> {
        use State::*;

        // Columns: Letter, Digit, OperatorSymbol, Dot, Other
        let builder = TransitionTable::builder()
            .row(IdentifierPrefix, [Identifier, Error, Error, Error, Error])
            .row(Identifier, [Identifier, Identifier, Error, Error, Error])
            .dead(Operator)
            .dead(Error);

        let builder = match self {
            Self::Baseline => builder
                .row(Start, [IdentifierPrefix, Error, Operator, Error, Error])
                .dead(UnsignedInteger)
                .dead(DotSeen)
                .dead(Float),
            Self::Integer => builder
                .row(Start, [IdentifierPrefix, UnsignedInteger, Operator, Error, Error])
                .row(UnsignedInteger, [Error, UnsignedInteger, Error, Error, Error])
                .dead(DotSeen)
                .dead(Float),
            Self::Float => builder
                .row(Start, [IdentifierPrefix, UnsignedInteger, Operator, Error, Error])
                .row(UnsignedInteger, [Error, UnsignedInteger, Error, DotSeen, Error])
                .row(DotSeen, [Error, Float, Error, Error, Error])
                .row(Float, [Error, Float, Error, Error, Error]),
        };

        builder.build()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Integer => "integer",
            Self::Float => "float",
        }
    }
}

fn builtin(variant: Variant) -> TransitionTable {
    match variant.build_table() {
        Ok(table) => table,
        Err(e) => unreachable!("built-in {} table is malformed: {}", variant, e),
    }
}

lazy_static! {
    static ref BASELINE: TransitionTable = builtin(Variant::Baseline);
    static ref INTEGER: TransitionTable = builtin(Variant::Integer);
    static ref FLOAT: TransitionTable = builtin(Variant::Float);
}

impl FromStr for Variant {
    type Err = LexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "baseline" | "base" => Ok(Self::Baseline),
            "integer" | "int" => Ok(Self::Integer),
            "float" => Ok(Self::Float),
            _ => Err(LexError::UnknownVariant { name: s.to_string() }),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
