//! This module defines the core data structures and types used throughout the
//! machine interpreter: descriptions, transitions, run outcomes, and error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Rule;

/// An immutable Turing machine description.
///
/// A machine is built once by the parser and consumed read-only by the
/// simulation engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Machine {
    /// The state the simulation begins in.
    pub initial_state: String,
    /// The symbol used to fill newly created tape cells.
    pub default_value: char,
    /// The transition table, in declaration order.
    ///
    /// Order is semantically significant: lookup is first-match, so of two
    /// transitions sharing a `(state, value)` pair only the first declared is
    /// ever reachable. The table must not be reordered or indexed in a way
    /// that changes which duplicate wins.
    pub transitions: Vec<Transition>,
}

impl Machine {
    /// Returns the number of transitions declared for `state`.
    pub fn transition_count(&self, state: &str) -> usize {
        self.transitions.iter().filter(|t| t.state == state).count()
    }

    /// Returns the distinct state identifiers appearing on the left-hand side
    /// of the table, in first-appearance order.
    pub fn states(&self) -> Vec<&str> {
        let mut states: Vec<&str> = Vec::new();
        for t in &self.transitions {
            if !states.contains(&t.state.as_str()) {
                states.push(&t.state);
            }
        }
        states
    }
}

/// A single transition rule.
///
/// A transition applies when the machine is in `state` and the symbol under
/// the head equals `value`; it writes `new_value`, moves the head in
/// `direction`, and enters `new_state`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// The state this rule applies in.
    pub state: String,
    /// The tape symbol this rule matches.
    pub value: char,
    /// The symbol written to the tape.
    pub new_value: char,
    /// Head movement after the write.
    pub direction: Direction,
    /// The state to transition into.
    pub new_state: String,
}

/// The possible directions the head can move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Move the head one position to the left.
    Left,
    /// Move the head one position to the right.
    Right,
}

/// The outcome of a single execution step.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// The machine applied a transition and continues execution.
    Continue,
    /// The machine has halted.
    Halt(HaltReason),
}

/// Why a run terminated. Both variants are normal terminations, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HaltReason {
    /// No transition matches the current state and the symbol under the head.
    /// Carries the state the machine halted in.
    NoTransition(String),
    /// A transition asked for a left move while the head was at index 0.
    BoundaryViolation,
}

/// Errors produced while parsing a machine description.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A transition line carries a direction token other than `<-` or `->`.
    #[error("Invalid direction token: {0}")]
    InvalidDirection(String),
    /// The description does not conform to the grammar.
    #[error("Malformed machine description: {0}")]
    Malformed(Box<pest::error::Error<Rule>>),
}

/// The head would move left of index 0. The left bound of the tape is fixed;
/// this is a terminal condition for the run, not a fatal program error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoundaryError {
    #[error("Head moved out of bounds")]
    LeftOfTape,
}

/// Errors surfaced by the file loaders.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    /// The description text does not parse.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    /// A file could not be read.
    #[error("File error: {0}")]
    File(String),
}
