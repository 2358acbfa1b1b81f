mod cli;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use codongen::generator::terminal::NumberSampler;
use codongen::grammar::{self, Grammar, LoadError};
use codongen::{DeriveConfig, Deriver, Symbol};
use cli::Cli;

const DERIVE_FAILURE: u8 = 1;
// clap already exits with 2 on bad arguments
const LOAD_FAILURE: u8 = 3;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn load(cli: &Cli) -> Result<(Grammar, DeriveConfig), LoadError> {
    let grammar = match &cli.grammar {
        Some(path) => grammar::load_file(path)?,
        None => grammar::trades(),
    };

    let mut config = match &cli.config {
        Some(path) => DeriveConfig::load(path)?,
        None => DeriveConfig::default(),
    };
    if let Some(max_steps) = cli.max_steps {
        config = config.with_max_steps(max_steps);
    }

    Ok((grammar, config))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (grammar, config) = match load(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(LOAD_FAILURE);
        }
    };

    let start = match &cli.start {
        Some(name) => Symbol::NonTerminal(name.clone()),
        None => grammar.start_symbol(),
    };
    let numbers = match cli.seed {
        Some(seed) => NumberSampler::seeded(seed),
        None => NumberSampler::from_entropy(),
    };
    let mut deriver = Deriver::with_provider(&grammar, numbers).config(config);

    for _ in 0..cli.amount.unwrap_or(1) {
        match deriver.run(&start, &cli.codons) {
            Ok(derivation) => println!("{}", derivation.text),
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::from(DERIVE_FAILURE);
            }
        }
    }

    ExitCode::SUCCESS
}
