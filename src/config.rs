use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error_handling::Location;
use crate::grammar::LoadError;

// How many symbols one derivation may process before giving up
pub const DEFAULT_MAX_STEPS: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeriveConfig {
    pub max_steps: usize,
}

impl DeriveConfig {
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let location = |line| Location { file: path.to_path_buf(), line };
        let file = File::open(path).map_err(|e| LoadError { position: location(0), error: e.into() })?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| LoadError { position: location(e.line()), error: e.into() })
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }
}

impl Default for DeriveConfig {
    fn default() -> Self {
        DeriveConfig {
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}
