//! Fact file to Cypher conversion.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use super::{convert_source, read_input};

#[derive(Args)]
pub struct ConvertArgs {
    /// Path to the .pl/.problog input file
    pub input: PathBuf,

    /// Output .cypher file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn execute(args: ConvertArgs) -> Result<()> {
    let source = read_input(&args.input)?;
    let cypher = convert_source(&source, &args.input)?;
    let statements = cypher.lines().count();
    info!(input = %args.input.display(), statements, "Converted fact file");

    match args.output {
        Some(path) => {
            std::fs::write(&path, &cypher)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "{} {} statement(s) to {}",
                "Wrote".green().bold(),
                statements,
                path.display().to_string().cyan()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(cypher.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
