/*
    Turns terminals into text
*/

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grammar::{Grammar, GrammarError};

// The terminal whose text is generated instead of looked up
pub const NUMBER: &str = "NUMBER";

/// Supplies text for "open" terminals, ones whose value is made up on every
/// resolution. Returning `None` means the terminal is not open and its
/// definition should be used.
pub trait ValueProvider {
    fn provide(&mut self, terminal: &str) -> Option<String>;
}

impl<F: FnMut(&str) -> Option<String>> ValueProvider for F {
    fn provide(&mut self, terminal: &str) -> Option<String> {
        self(terminal)
    }
}

/// Samples `NUMBER` uniformly from [10, 100), rounded to one decimal place.
#[derive(Debug)]
pub struct NumberSampler<R: Rng = StdRng> {
    rng: R,
    range: Uniform<f64>,
}

impl NumberSampler<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> NumberSampler<R> {
    pub fn new(rng: R) -> Self {
        NumberSampler {
            rng,
            range: Uniform::new(10.0, 100.0),
        }
    }

    pub fn sample(&mut self) -> f64 {
        (self.range.sample(&mut self.rng) * 10.0).round() / 10.0
    }
}

impl Default for NumberSampler<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> ValueProvider for NumberSampler<R> {
    fn provide(&mut self, terminal: &str) -> Option<String> {
        (terminal == NUMBER).then(|| format!("{:.1}", self.sample()))
    }
}

/// Always gives the same text for `NUMBER`.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixed(pub String);

impl ValueProvider for Fixed {
    fn provide(&mut self, terminal: &str) -> Option<String> {
        (terminal == NUMBER).then(|| self.0.clone())
    }
}

pub struct TerminalResolver<'g, P: ValueProvider> {
    grammar: &'g Grammar,
    provider: P,
}

impl<'g, P: ValueProvider> TerminalResolver<'g, P> {
    pub fn new(grammar: &'g Grammar, provider: P) -> Self {
        TerminalResolver { grammar, provider }
    }

    pub fn resolve(&mut self, terminal: &str) -> Result<String, GrammarError> {
        if let Some(value) = self.provider.provide(terminal) {
            return Ok(value);
        }

        self.grammar
            .terminal(terminal)
            .map(|definition| definition.value.clone())
            .ok_or_else(|| GrammarError::UnknownTerminal(terminal.to_string()))
    }
}
