//! pl2cy CLI - ground facts to Cypher
//!
//! Converts unary/binary fact files into Cypher statements and optionally
//! applies them to a Neo4j database.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::Cli;

/// Initialize tracing on stderr.
///
/// Stdout carries generated Cypher or JSON, so log lines must never go there.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "pl2cy=debug,pl2cy_graph=debug,pl2cy_core=debug"
    } else {
        "pl2cy=info,pl2cy_graph=info,pl2cy_core=warn"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.execute().await
}
