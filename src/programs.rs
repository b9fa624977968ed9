//! Embedded demo machine descriptions and a small registry around them.

use crate::parser::parse;
use crate::types::{Machine, ParseError};

/// A demo machine description embedded in the library.
#[derive(Debug, Clone, Copy)]
pub struct ProgramInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub source: &'static str,
}

impl ProgramInfo {
    /// Parses the embedded source into a `Machine`.
    pub fn machine(&self) -> Result<Machine, ParseError> {
        parse(self.source)
    }
}

lazy_static::lazy_static! {
    /// Default embedded programs.
    pub static ref PROGRAMS: Vec<ProgramInfo> = vec![
        ProgramInfo {
            name: "bit-flipper",
            description: "Flips every bit while scanning right, halts on the first grown cell",
            source: include_str!("../demos/bit-flipper.turc"),
        },
        ProgramInfo {
            name: "binary-increment",
            description: "Seeks the end of a binary number, then carries leftward to add one",
            source: include_str!("../demos/binary-increment.turc"),
        },
        ProgramInfo {
            name: "left-edge",
            description: "Walks left from the start and halts on the tape's fixed left bound",
            source: include_str!("../demos/left-edge.turc"),
        },
    ];
}

pub struct ProgramManager;

impl ProgramManager {
    /// Get the number of embedded programs
    pub fn count() -> usize {
        PROGRAMS.len()
    }

    /// Get a program by its index
    pub fn get_by_index(index: usize) -> Option<&'static ProgramInfo> {
        PROGRAMS.get(index)
    }

    /// Get a program by its name
    pub fn get_by_name(name: &str) -> Option<&'static ProgramInfo> {
        PROGRAMS.iter().find(|program| program.name == name)
    }

    /// List all program names
    pub fn names() -> Vec<&'static str> {
        PROGRAMS.iter().map(|program| program.name).collect()
    }

    /// Search for programs whose name contains the query
    pub fn search(query: &str) -> Vec<&'static ProgramInfo> {
        let query = query.to_lowercase();

        PROGRAMS
            .iter()
            .filter(|program| program.name.to_lowercase().contains(&query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::run;
    use crate::tape::Tape;
    use crate::types::HaltReason;

    #[test]
    fn test_all_programs_are_valid() {
        assert!(ProgramManager::count() >= 3);

        for program in PROGRAMS.iter() {
            assert!(
                program.machine().is_ok(),
                "Program '{}' is invalid",
                program.name
            );
        }
    }

    #[test]
    fn test_get_by_name() {
        let program = ProgramManager::get_by_name("bit-flipper").unwrap();
        assert_eq!(program.name, "bit-flipper");

        assert!(ProgramManager::get_by_name("nonexistent").is_none());
    }

    #[test]
    fn test_get_by_index() {
        assert!(ProgramManager::get_by_index(0).is_some());
        assert!(ProgramManager::get_by_index(999).is_none());
    }

    #[test]
    fn test_names() {
        let names = ProgramManager::names();

        assert!(names.contains(&"bit-flipper"));
        assert!(names.contains(&"binary-increment"));
        assert!(names.contains(&"left-edge"));
    }

    #[test]
    fn test_search() {
        let results = ProgramManager::search("binary");
        assert_eq!(results.len(), 1);

        let results = ProgramManager::search("E");
        assert!(results.len() >= 2);

        let results = ProgramManager::search("nonexistent");
        assert!(results.is_empty());
    }

    #[test]
    fn test_bit_flipper_runs() {
        let machine = ProgramManager::get_by_name("bit-flipper")
            .unwrap()
            .machine()
            .unwrap();
        let mut tape = Tape::new_with_content(vec!['0', '1'], machine.default_value);

        let reason = run(&machine, &mut tape);

        assert_eq!(reason, HaltReason::NoTransition("q0".to_string()));
        assert_eq!(tape.to_string(), "1 0 _ _");
    }

    #[test]
    fn test_binary_increment_runs() {
        let machine = ProgramManager::get_by_name("binary-increment")
            .unwrap()
            .machine()
            .unwrap();
        let mut tape = Tape::new_with_content("1011".chars().collect(), machine.default_value);

        let reason = run(&machine, &mut tape);

        assert_eq!(reason, HaltReason::NoTransition("done".to_string()));
        assert_eq!(&tape.cells()[..4], &['1', '1', '0', '0']);
    }

    #[test]
    fn test_left_edge_halts_on_boundary() {
        let machine = ProgramManager::get_by_name("left-edge")
            .unwrap()
            .machine()
            .unwrap();
        let mut tape = Tape::new_with_content(vec!['0'], machine.default_value);

        let reason = run(&machine, &mut tape);

        assert_eq!(reason, HaltReason::BoundaryViolation);
        assert_eq!(tape.cells(), &['0']);
    }
}
