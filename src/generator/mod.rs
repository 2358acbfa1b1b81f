/*
    This module derives sentences from a grammar, steered by a list of codons
*/

pub mod terminal;

use std::collections::VecDeque;

use thiserror::Error as ThisError;
use tracing::{debug, trace};

use crate::config::DeriveConfig;
use crate::error_handling::*;
use crate::grammar::*;
use terminal::{NumberSampler, TerminalResolver, ValueProvider};

// The broad categories of failure, for callers deciding what to do about one
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    Grammar,
    CodonExhausted,
    Diverged,
    InvalidCodon,
}

#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum DeriveErrorType {
    #[error(transparent)]
    Grammar(#[from] GrammarError),
    #[error("Not enough codons: needed at least {needed}, got {available}")]
    CodonExhausted { needed: usize, available: usize },
    #[error("Derivation did not finish within {limit} steps")]
    Diverged { limit: usize },
    #[error("Codon {index} is negative ({value})")]
    InvalidCodon { index: usize, value: i64 },
}

impl ErrorType for DeriveErrorType {}

impl DeriveErrorType {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DeriveErrorType::Grammar(_) => ErrorKind::Grammar,
            DeriveErrorType::CodonExhausted { .. } => ErrorKind::CodonExhausted,
            DeriveErrorType::Diverged { .. } => ErrorKind::Diverged,
            DeriveErrorType::InvalidCodon { .. } => ErrorKind::InvalidCodon,
        }
    }

    /// Whether the failure is down to the codons rather than the grammar.
    /// A search would penalize such a genotype instead of stopping.
    pub fn is_recoverable(&self) -> bool {
        self.kind() != ErrorKind::Grammar
    }
}

pub type DeriveError = Error<DeriveErrorType>;
pub type DeriveResult<T> = Result<T, DeriveError>;

fn fail(error: impl Into<DeriveErrorType>, step: usize, codon: usize) -> DeriveError {
    DeriveError {
        position: Position { step, codon },
        error: error.into(),
    }
}

// One production choice made during a derivation
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Choice {
    pub nonterminal: String,
    pub codon: i64,
    pub index: usize,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Derivation {
    pub text: String,
    pub codons_used: usize,
    pub steps: usize,
    pub choices: Vec<Choice>,
}

/// Picks the alternative a codon selects among `choices` alternatives.
/// Negative codons select nothing.
pub fn select(codon: i64, choices: usize) -> Option<usize> {
    let codon = u64::try_from(codon).ok()?;
    Some((codon % choices as u64) as usize)
}

pub struct Deriver<'g, P: ValueProvider = NumberSampler> {
    grammar: &'g Grammar,
    resolver: TerminalResolver<'g, P>,
    config: DeriveConfig,
}

impl<'g> Deriver<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Deriver::with_provider(grammar, NumberSampler::default())
    }
}

impl<'g, P: ValueProvider> Deriver<'g, P> {
    pub fn with_provider(grammar: &'g Grammar, provider: P) -> Self {
        Deriver {
            grammar,
            resolver: TerminalResolver::new(grammar, provider),
            config: DeriveConfig::default(),
        }
    }

    pub fn config(mut self, config: DeriveConfig) -> Self {
        self.config = config;
        self
    }

    /// Derives from the grammar's own start symbol.
    pub fn run_from_start(&mut self, codons: &[i64]) -> DeriveResult<Derivation> {
        if self.grammar.start().is_empty() {
            return Err(fail(GrammarError::NoStart, 0, 0));
        }
        let start = self.grammar.start_symbol();
        self.run(&start, codons)
    }

    /// Expands `start` leftmost-first, letting each codon in turn pick the
    /// production for the next nonterminal.
    pub fn run(&mut self, start: &Symbol, codons: &[i64]) -> DeriveResult<Derivation> {
        let mut frontier = VecDeque::from([start.clone()]);
        let mut cursor = 0;
        let mut steps = 0;
        let mut fragments = Vec::new();
        let mut choices = Vec::new();

        debug!(start = start.name(), codons = codons.len(), "starting derivation");

        while let Some(symbol) = frontier.pop_front() {
            if steps >= self.config.max_steps {
                debug!(steps, cursor, pending = frontier.len() + 1, "derivation diverged");
                let diverged = DeriveErrorType::Diverged { limit: self.config.max_steps };
                return Err(fail(diverged, steps, cursor));
            }
            steps += 1;

            match symbol {
                Symbol::Terminal(name) => {
                    let text = self
                        .resolver
                        .resolve(&name)
                        .map_err(|e| fail(e, steps, cursor))?;
                    fragments.push(text);
                }
                Symbol::NonTerminal(name) => {
                    let productions = self
                        .grammar
                        .choices_for(&name)
                        .map_err(|e| fail(e, steps, cursor))?;

                    let exhausted = || {
                        let error = DeriveErrorType::CodonExhausted {
                            needed: cursor + 1,
                            available: codons.len(),
                        };
                        fail(error, steps, cursor)
                    };
                    let codon = *codons.get(cursor).ok_or_else(exhausted)?;

                    let invalid = || {
                        let error = DeriveErrorType::InvalidCodon { index: cursor, value: codon };
                        fail(error, steps, cursor)
                    };
                    let index = select(codon, productions.len()).ok_or_else(invalid)?;

                    trace!(
                        nonterminal = %name,
                        codon,
                        index,
                        alternatives = productions.len(),
                        "expanding"
                    );

                    // Pushing in reverse keeps the expansion's own order at the front
                    for symbol in productions[index].expansion.iter().rev() {
                        frontier.push_front(symbol.clone());
                    }

                    choices.push(Choice { nonterminal: name, codon, index });
                    cursor += 1;
                }
            }
        }

        debug_assert!(frontier.is_empty());
        debug!(steps, codons_used = cursor, "derivation finished");

        Ok(Derivation {
            text: fragments.concat(),
            codons_used: cursor,
            steps,
            choices,
        })
    }
}

/// Derives a sentence from `start`, sampling `NUMBER` terminals at random.
pub fn derive(grammar: &Grammar, start: &Symbol, codons: &[i64]) -> DeriveResult<String> {
    Deriver::new(grammar).run(start, codons).map(|derivation| derivation.text)
}
