//! This crate provides the core logic for a Turing machine interpreter.
//! It includes modules for parsing machine descriptions, a growable tape,
//! a simulation engine, file loading, and a collection of embedded demo
//! programs.

pub mod loader;
pub mod machine;
pub mod parser;
pub mod programs;
pub mod tape;
pub mod types;

/// Re-exports the `Rule` enum from the parser module, used by the `pest` grammar.
pub use crate::parser::Rule;
/// Re-exports the `MachineLoader` struct from the loader module.
pub use loader::MachineLoader;
/// Re-exports the simulation entry points from the machine module.
pub use machine::{run, Simulator};
/// Re-exports the `parse` function from the parser module.
pub use parser::parse;
/// Re-exports `ProgramInfo`, `ProgramManager`, and `PROGRAMS` from the programs module.
pub use programs::{ProgramInfo, ProgramManager, PROGRAMS};
/// Re-exports the `Tape` struct from the tape module.
pub use tape::Tape;
/// Re-exports machine definition, execution, and error types from the types module.
pub use types::{
    BoundaryError, Direction, HaltReason, LoadError, Machine, ParseError, Step, Transition,
};
