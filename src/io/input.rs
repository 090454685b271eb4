//! Answer-file loading.
//!
//! The answer file is the boundary shape handed over by whatever owns
//! storage: a JSON array of answered questions, typically produced by
//! joining the question catalog against a per-audit answer table.

use crate::core::errors::{Error, Result};
use crate::core::types::AnswerRecord;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read a JSON answer file into memory.
///
/// An empty array is valid input ("no data" is a defined state, not a
/// failure); malformed JSON or a missing file is an error.
pub fn read_answer_file(path: &Path) -> Result<Vec<AnswerRecord>> {
    let file = File::open(path)
        .map_err(|e| Error::input(path, format!("cannot open answer file: {e}")))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| Error::input(path, format!("invalid answer file: {e}")))
}
