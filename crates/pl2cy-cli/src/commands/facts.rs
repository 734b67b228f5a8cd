//! Dump parsed facts as JSON.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::{parse_source, read_input};

#[derive(Args)]
pub struct FactsArgs {
    /// Path to the .pl/.problog input file
    pub input: PathBuf,

    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,
}

pub fn execute(args: FactsArgs) -> Result<()> {
    let source = read_input(&args.input)?;
    let facts = parse_source(&source, &args.input)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&facts)?
    } else {
        serde_json::to_string(&facts)?
    };
    println!("{}", json);

    Ok(())
}
