//! This module defines the `Simulator`, which drives a machine description
//! over a tape: transition lookup, tape mutation, and halting detection.

use crate::tape::Tape;
use crate::types::{HaltReason, Machine, Step, Transition};

/// Drives one run of a machine over a tape.
///
/// The simulator borrows the machine read-only and owns the mutable run
/// state: the current state identifier and a step counter. The state is
/// copied by value out of the transition table on every applied rule, so the
/// table and the current state have independent lifetimes within a run.
pub struct Simulator<'m> {
    machine: &'m Machine,
    state: String,
    step_count: usize,
}

impl<'m> Simulator<'m> {
    /// Creates a new `Simulator` positioned at the machine's initial state.
    pub fn new(machine: &'m Machine) -> Self {
        Self {
            machine,
            state: machine.initial_state.clone(),
            step_count: 0,
        }
    }

    /// Executes a single step of the computation.
    ///
    /// Reads the symbol under the head, looks up the first matching
    /// transition, applies it (state change, write, move), and reports
    /// whether the machine continues.
    ///
    /// # Returns
    ///
    /// * `Step::Continue` if a transition was applied and the move succeeded.
    /// * `Step::Halt(HaltReason::NoTransition)` if no transition matches.
    /// * `Step::Halt(HaltReason::BoundaryViolation)` if the applied
    ///   transition moved the head left of index 0. The write still stands;
    ///   the tape remains valid output.
    pub fn step(&mut self, tape: &mut Tape) -> Step {
        let symbol = tape.read();

        let transition = match self.transition(symbol).cloned() {
            Some(t) => t,
            None => return Step::Halt(HaltReason::NoTransition(self.state.clone())),
        };

        self.state = transition.new_state;
        tape.write(transition.new_value);

        if tape.move_head(transition.direction).is_err() {
            return Step::Halt(HaltReason::BoundaryViolation);
        }

        self.step_count += 1;

        Step::Continue
    }

    /// Runs the machine until it halts. There is no bound on the step count:
    /// a non-halting description runs forever.
    pub fn run(&mut self, tape: &mut Tape) -> HaltReason {
        loop {
            if let Step::Halt(reason) = self.step(tape) {
                return reason;
            }
        }
    }

    /// Finds the transition matching the current state and `symbol`.
    ///
    /// The table is scanned in declaration order and the first match wins.
    /// This is a deliberate priority rule: of two transitions sharing a
    /// `(state, value)` pair, only the first declared is ever applied.
    pub fn transition(&self, symbol: char) -> Option<&Transition> {
        self.machine
            .transitions
            .iter()
            .find(|t| t.state == self.state && t.value == symbol)
    }

    /// Returns the current state of the machine.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Returns the number of steps completed so far.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Resets the simulator to the machine's initial state. The tape is
    /// owned by the caller and is not touched.
    pub fn reset(&mut self) {
        self.state = self.machine.initial_state.clone();
        self.step_count = 0;
    }
}

/// Runs `machine` over `tape` until it halts and returns why it stopped.
///
/// This is the one-shot entry point; use `Simulator` directly for stepwise
/// execution.
pub fn run(machine: &Machine, tape: &mut Tape) -> HaltReason {
    Simulator::new(machine).run(tape)
}
