/*
    This module is for storing and looking up grammars
*/

mod load;
mod trades;

use std::collections::HashMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use load::{load_file, LoadError, LoadErrorType};
pub use trades::trades;

// The base unit in a grammar rule
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
pub enum Symbol {
    Terminal(String),
    NonTerminal(String),
}

impl Symbol {
    pub fn name(&self) -> &str {
        match self {
            Symbol::Terminal(name) | Symbol::NonTerminal(name) => name,
        }
    }
}

// The symbols a production rewrites its origin into
pub type Expansion = Vec<Symbol>;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Production {
    pub origin: String,
    pub expansion: Expansion,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct TerminalDefinition {
    pub name: String,
    pub value: String,
}

#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum GrammarError {
    #[error("No productions for nonterminal `{0}`")]
    NoProductions(String),
    #[error("Unknown terminal `{0}`")]
    UnknownTerminal(String),
    #[error("Grammar has no start symbol")]
    NoStart,
}

/// An immutable grammar.
///
/// Productions are grouped by origin and keep the order they were declared
/// in, since a codon picks an alternative by its index.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(from = "GrammarDocument", into = "GrammarDocument")]
pub struct Grammar {
    start: String,
    rules: HashMap<String, Vec<Production>>,
    terminals: HashMap<String, TerminalDefinition>,
    // Origins and terminal names in the order they were first declared
    origins: Vec<String>,
    terminal_names: Vec<String>,
}

impl Grammar {
    pub fn builder() -> GrammarBuilder {
        GrammarBuilder::default()
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn start_symbol(&self) -> Symbol {
        Symbol::NonTerminal(self.start.clone())
    }

    /// Every production whose origin is `nonterminal`, in declaration order.
    pub fn choices_for(&self, nonterminal: &str) -> Result<&[Production], GrammarError> {
        self.rules
            .get(nonterminal)
            .map(Vec::as_slice)
            .filter(|choices| !choices.is_empty())
            .ok_or_else(|| GrammarError::NoProductions(nonterminal.to_string()))
    }

    pub fn terminal(&self, name: &str) -> Option<&TerminalDefinition> {
        self.terminals.get(name)
    }

    /// Every nonterminal with productions, in the order first declared.
    pub fn nonterminals(&self) -> impl Iterator<Item = &str> {
        self.origins.iter().map(String::as_str)
    }

    pub fn production_count(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }
}

#[derive(Debug, Default)]
pub struct GrammarBuilder {
    start: Option<String>,
    productions: Vec<Production>,
    terminals: Vec<TerminalDefinition>,
}

impl GrammarBuilder {
    pub fn start(mut self, nonterminal: &str) -> Self {
        self.start = Some(nonterminal.to_string());
        self
    }

    pub fn rule(mut self, origin: &str, expansion: Expansion) -> Self {
        self.productions.push(Production {
            origin: origin.to_string(),
            expansion,
        });
        self
    }

    pub fn terminal(mut self, name: &str, value: &str) -> Self {
        self.terminals.push(TerminalDefinition {
            name: name.to_string(),
            value: value.to_string(),
        });
        self
    }

    pub fn build(self) -> Grammar {
        // Without an explicit start the first rule's origin is used. A grammar
        // with neither is left with an empty start, reported as `NoStart`
        // when a derivation asks for it
        let start = self
            .start
            .or_else(|| self.productions.first().map(|p| p.origin.clone()))
            .unwrap_or_default();

        let origins = self.productions.iter().map(|p| p.origin.clone()).unique().collect_vec();
        let mut rules = HashMap::<String, Vec<Production>>::new();
        for production in self.productions {
            rules.entry(production.origin.clone()).or_default().push(production);
        }

        // The first definition of a name wins
        let terminal_names = self.terminals.iter().map(|t| t.name.clone()).unique().collect_vec();
        let mut terminals = HashMap::with_capacity(self.terminals.len());
        for definition in self.terminals {
            terminals.entry(definition.name.clone()).or_insert(definition);
        }

        Grammar {
            start,
            rules,
            terminals,
            origins,
            terminal_names,
        }
    }
}

// The on-disk shape of a grammar
#[derive(Debug, Serialize, Deserialize)]
struct GrammarDocument {
    #[serde(default)]
    start: Option<String>,
    rules: Vec<Production>,
    #[serde(default)]
    terminals: Vec<TerminalDefinition>,
}

impl From<GrammarDocument> for Grammar {
    fn from(document: GrammarDocument) -> Self {
        GrammarBuilder {
            start: document.start,
            productions: document.rules,
            terminals: document.terminals,
        }
        .build()
    }
}

impl From<Grammar> for GrammarDocument {
    fn from(mut grammar: Grammar) -> Self {
        // Productions of one origin stay together, origins in declaration order
        let rules = grammar
            .origins
            .iter()
            .filter_map(|origin| grammar.rules.remove(origin))
            .flatten()
            .collect_vec();
        let terminals = grammar
            .terminal_names
            .iter()
            .filter_map(|name| grammar.terminals.remove(name))
            .collect_vec();

        GrammarDocument {
            start: Some(grammar.start),
            rules,
            terminals,
        }
    }
}
