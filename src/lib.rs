/*
    Derives sentences from a context-free grammar, using a list of integer
    codons to choose among the alternatives of each nonterminal
*/

pub mod config;
pub mod error_handling;
pub mod generator;
pub mod grammar;

pub use config::DeriveConfig;
pub use generator::{derive, Derivation, DeriveError, DeriveErrorType, Deriver, ErrorKind};
pub use grammar::{Grammar, Symbol};
