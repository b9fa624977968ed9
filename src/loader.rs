//! This module provides the `MachineLoader` struct, responsible for loading
//! machine descriptions and tape input from the filesystem.

use crate::parser::parse;
use crate::tape::Tape;
use crate::types::{LoadError, Machine};
use std::fs;
use std::path::{Path, PathBuf};

/// `MachineLoader` is a utility struct for adapting files to the core.
/// Description files are text in the `.turc` format; input files are raw
/// bytes that seed the tape.
pub struct MachineLoader;

impl MachineLoader {
    /// Loads a machine description from the specified file path.
    ///
    /// # Arguments
    ///
    /// * `path` - A reference to the `Path` of the description file.
    ///
    /// # Returns
    ///
    /// * `Ok(Machine)` if the file is successfully read and parsed.
    /// * `Err(LoadError::File)` if the file cannot be read.
    /// * `Err(LoadError::Parse)` if the content is not a valid description.
    pub fn load_machine(path: &Path) -> Result<Machine, LoadError> {
        let source = fs::read_to_string(path).map_err(|e| {
            LoadError::File(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        Ok(parse(&source)?)
    }

    /// Loads a machine description from the provided string content.
    ///
    /// Useful for descriptions that are not stored in files, e.g. embedded
    /// demo programs or user input.
    pub fn load_machine_from_string(source: &str) -> Result<Machine, LoadError> {
        Ok(parse(source)?)
    }

    /// Loads an input file into a tape for `machine`.
    ///
    /// The file is read as raw bytes and each byte becomes one tape cell, in
    /// file order. An empty file yields a tape seeded with a single default
    /// cell (see `Tape::new_with_content`).
    ///
    /// # Arguments
    ///
    /// * `path` - A reference to the `Path` of the input file.
    /// * `machine` - The machine whose default symbol fills grown cells.
    ///
    /// # Returns
    ///
    /// * `Ok(Tape)` seeded with the file's bytes.
    /// * `Err(LoadError::File)` if the file cannot be read.
    pub fn load_tape(path: &Path, machine: &Machine) -> Result<Tape, LoadError> {
        let bytes = fs::read(path).map_err(|e| {
            LoadError::File(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        let cells = bytes.into_iter().map(char::from).collect();

        Ok(Tape::new_with_content(cells, machine.default_value))
    }

    /// Loads all machine description files (`.turc` extension) from a given
    /// directory. Directories and other files are skipped.
    ///
    /// # Returns
    ///
    /// * A vector with one `Result` per `.turc` file: either the path and its
    ///   parsed `Machine`, or the error that loading it produced.
    pub fn load_machines(directory: &Path) -> Vec<Result<(PathBuf, Machine), LoadError>> {
        if !directory.exists() {
            return vec![Err(LoadError::File(format!(
                "Directory {} does not exist",
                directory.display()
            )))];
        }

        let entries = match fs::read_dir(directory) {
            Ok(entries) => entries,
            Err(e) => {
                return vec![Err(LoadError::File(format!(
                    "Failed to read directory {}: {}",
                    directory.display(),
                    e
                )))]
            }
        };

        entries
            .filter_map(|entry| {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        return Some(Err(LoadError::File(format!(
                            "Failed to read directory entry: {}",
                            e
                        ))))
                    }
                };

                let path = entry.path();

                // Skip directories and non-.turc files
                if path.is_dir() || path.extension().is_none_or(|ext| ext != "turc") {
                    return None;
                }

                match Self::load_machine(&path) {
                    Ok(machine) => Some(Ok((path, machine))),
                    Err(e) => Some(Err(e)),
                }
            })
            .collect()
    }
}
