/*
    Reads an already structured grammar from a JSON file
*/

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use itertools::Itertools;
use thiserror::Error as ThisError;
use tracing::debug;

use super::Grammar;
use crate::error_handling::*;

#[derive(Debug, ThisError)]
pub enum LoadErrorType {
    #[error("File error: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Malformed grammar: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl ErrorType for LoadErrorType {}

impl PartialEq for LoadErrorType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (LoadErrorType::FileError(a), LoadErrorType::FileError(b)) => a.kind() == b.kind(),
            (LoadErrorType::JsonError(a), LoadErrorType::JsonError(b)) => a.classify() == b.classify(),
            _ => false,
        }
    }
}

pub type LoadError = Error<LoadErrorType, Location>;

pub fn load_file(path: &Path) -> Result<Grammar, LoadError> {
    let location = |line| Location { file: path.to_path_buf(), line };

    let file = File::open(path).map_err(|e| LoadError {
        position: location(0),
        error: e.into(),
    })?;

    let grammar: Grammar = serde_json::from_reader(BufReader::new(file)).map_err(|e| LoadError {
        position: location(e.line()),
        error: e.into(),
    })?;

    debug!(
        file = %path.display(),
        start = grammar.start(),
        productions = grammar.production_count(),
        nonterminals = %grammar.nonterminals().join(" "),
        "loaded grammar"
    );
    Ok(grammar)
}
