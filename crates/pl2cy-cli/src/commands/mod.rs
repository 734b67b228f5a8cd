//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pl2cy_core::{ConvertError, Fact};
use std::path::Path;

pub mod convert;
pub mod facts;
pub mod run;

/// pl2cy - Convert ground facts into Neo4j Cypher
#[derive(Parser)]
#[command(name = "pl2cy")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a fact file into Cypher statements
    Convert(convert::ConvertArgs),

    /// Parse a fact file and print the facts as JSON
    Facts(facts::FactsArgs),

    /// Execute a Cypher script against Neo4j
    Run(run::RunArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Convert(args) => convert::execute(args),
            Commands::Facts(args) => facts::execute(args),
            Commands::Run(args) => run::execute(args).await,
        }
    }
}

/// Read a UTF-8 input file.
pub(crate) fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))
}

/// Convert fact source read from `path`.
pub(crate) fn convert_source(source: &str, path: &Path) -> Result<String> {
    pl2cy_core::convert(source).map_err(|err| conversion_failure(err, "convert", path))
}

/// Parse fact source read from `path` without emitting Cypher.
pub(crate) fn parse_source(source: &str, path: &Path) -> Result<Vec<Fact>> {
    pl2cy_core::parse_facts(source).map_err(|err| conversion_failure(err, "parse", path))
}

/// Show the malformed fact on its own line, then wrap the error with the input path.
fn conversion_failure(err: ConvertError, action: &str, path: &Path) -> anyhow::Error {
    if let Some(fragment) = offending_fact(&err) {
        eprintln!("{} {}", "Offending fact:".red().bold(), fragment);
    }
    anyhow::Error::new(err).context(format!("Failed to {} {}", action, path.display()))
}

/// The raw fact text to point the user at, if the error has one.
fn offending_fact(err: &ConvertError) -> Option<&str> {
    err.fragment().map(str::trim).filter(|fragment| !fragment.is_empty())
}
