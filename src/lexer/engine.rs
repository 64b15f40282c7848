//! DFA engine
//!
//! A single left-to-right scan: classify each character, follow the table,
//! return the state reached at the end. No lookahead, no backtracking, and no
//! state kept between calls.

use std::fmt;

use super::char_class::CharClass;
use super::state::State;
use super::table::TransitionTable;

/// Run the automaton over `token` and return the final state
pub fn run(table: &TransitionTable, token: &str) -> State {
    token.chars().fold(State::Start, |state, c| {
        table.next(state, CharClass::of(c))
    })
}

/// Run the automaton over `token`, recording every transition taken
pub fn run_traced(table: &TransitionTable, token: &str) -> Trace {
    let mut state = State::Start;
    let mut steps = Vec::with_capacity(token.len());

    for c in token.chars() {
        let class = CharClass::of(c);
        let to = table.next(state, class);
        steps.push(Step {
            character: c,
            class,
            from: state,
            to,
        });
        state = to;
    }

    Trace { steps }
}

/// One transition of a traced run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub character: char,
    pub class: CharClass,
    pub from: State,
    pub to: State,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} ({}): {} -> {}",
            self.character, self.class, self.from, self.to
        )
    }
}

/// Every transition of a traced run, in input order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Trace {
    pub steps: Vec<Step>,
}

impl Trace {
    /// State the run ended in; `Start` for empty input
    pub fn final_state(&self) -> State {
        self.steps.last().map_or(State::Start, |step| step.to)
    }

    /// Index of the character that first sent the run into Error, if any
    pub fn first_error(&self) -> Option<usize> {
        self.steps
            .iter()
            .position(|step| step.to.is_error() && !step.from.is_error())
    }
}
