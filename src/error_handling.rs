use std::fmt::Display;
use std::path::PathBuf;

pub trait ErrorType: Display + PartialEq {}

// Where in a derivation something went wrong
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct Position {
    pub step: usize,
    pub codon: usize
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "step {}, codon {}", self.step, self.codon)
    }
}

// Where in a grammar file something went wrong
#[derive(Debug, PartialEq, Clone)]
pub struct Location {
    pub file: PathBuf,
    pub line: usize
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.line == 0 {
            write!(f, "{}", self.file.display())
        } else {
            write!(f, "{}:{}", self.file.display(), self.line)
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Error<T: ErrorType, P: Display = Position> {
    pub position: P,
    pub error: T
}

impl<T: ErrorType, P: Display> Display for Error<T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\x1b[31;49;1m[{}]\x1b[39;49;1m  {}\x1b[0m", self.position, self.error)
    }
}

impl<T: ErrorType + std::fmt::Debug, P: Display + std::fmt::Debug> std::error::Error for Error<T, P> {}
