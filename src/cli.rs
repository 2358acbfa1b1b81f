use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Codons choosing the production for each nonterminal, in order
    #[arg(allow_negative_numbers = true, value_name = "CODON")]
    pub codons: Vec<i64>,

    /// JSON file containing the grammar (default: the built-in trades grammar)
    #[arg(short, long, value_name = "FILE")]
    pub grammar: Option<PathBuf>,

    /// Start symbol (default: the grammar's own)
    #[arg(short, long, value_name = "SYMBOL")]
    pub start: Option<String>,

    /// Amount to generate (default: 1)
    #[arg(short = 'n', long, value_name = "AMOUNT")]
    pub amount: Option<u32>,

    /// Seed for the numbers filled into NUMBER terminals
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON file containing derivation settings
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Give up after this many steps (overrides the config file)
    #[arg(long, value_name = "STEPS")]
    pub max_steps: Option<usize>,

    /// Log each derivation step to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
