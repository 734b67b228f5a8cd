//! Execute Cypher against Neo4j.

use anyhow::{Result, anyhow};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use std::time::Duration;

use pl2cy_graph::{GraphClient, GraphConfig};

use super::{convert_source, read_input};

#[derive(Args)]
pub struct RunArgs {
    /// Path to a .cypher script (or a fact file with --from-facts)
    pub script: PathBuf,

    /// Treat the input as fact source and convert it first
    #[arg(long)]
    pub from_facts: bool,

    /// Print the statements that would be executed without connecting
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

/// Neo4j connection flags.
///
/// Settings come from `--config` when given, otherwise from
/// `GraphConfig::default()`; any flag or environment variable overrides them.
#[derive(Args)]
pub struct ConnectionArgs {
    /// TOML file with uri, user, password and database keys
    #[arg(long, env = "PL2CY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Neo4j bolt URI
    #[arg(long, env = "NEO4J_URI")]
    pub uri: Option<String>,

    /// Neo4j username
    #[arg(long, env = "NEO4J_USER")]
    pub user: Option<String>,

    /// Neo4j password
    #[arg(long, env = "NEO4J_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Neo4j database name
    #[arg(long, env = "NEO4J_DATABASE")]
    pub database: Option<String>,

    /// Connection timeout in seconds
    #[arg(long, default_value = "10")]
    pub timeout: u64,
}

impl ConnectionArgs {
    fn to_config(&self) -> Result<GraphConfig> {
        let base = match &self.config {
            Some(path) => GraphConfig::load(path)?,
            None => GraphConfig::default(),
        };
        Ok(self.apply_overrides(base))
    }

    fn apply_overrides(&self, base: GraphConfig) -> GraphConfig {
        GraphConfig {
            uri: self.uri.clone().unwrap_or(base.uri),
            user: self.user.clone().unwrap_or(base.user),
            password: self.password.clone().unwrap_or(base.password),
            database: self.database.clone().unwrap_or(base.database),
        }
    }
}

pub async fn execute(args: RunArgs) -> Result<()> {
    let input = read_input(&args.script)?;
    let script = if args.from_facts {
        convert_source(&input, &args.script)?
    } else {
        input
    };

    if args.dry_run {
        return print_dry_run(&script);
    }

    let config = args.connection.to_config()?;
    let client = connect(&config, args.connection.timeout).await?;

    println!("{} {}", "Applying".bold(), args.script.display().to_string().cyan());
    let result = pl2cy_graph::run_script(&client, &script).await?;
    let counts = client.counts().await?;

    println!("\n{}", "Run complete:".green().bold());
    println!("  Statements executed: {}", result.statements.to_string().cyan());
    println!("  Lines applied:       {}", result.lines.to_string().cyan());
    println!("{}", "─".repeat(40));
    println!("  Nodes:         {}", counts.nodes.to_string().cyan());
    println!("  Relationships: {}", counts.relationships.to_string().cyan());

    Ok(())
}

async fn connect(config: &GraphConfig, timeout_secs: u64) -> Result<GraphClient> {
    tokio::time::timeout(Duration::from_secs(timeout_secs), GraphClient::connect(config))
        .await
        .map_err(|_| anyhow!("Timed out after {}s connecting to {}", timeout_secs, config.uri))?
}

fn print_dry_run(script: &str) -> Result<()> {
    let batches = pl2cy_graph::batch_statements(script);
    if batches.is_empty() {
        println!("{}", "No statements.".dimmed());
        return Ok(());
    }

    for (i, statement) in batches.iter().enumerate() {
        println!("{}", format!("// statement {}", i + 1).dimmed());
        println!("{}", statement);
    }
    println!("\n{} statement(s) would be executed.", batches.len().to_string().bold());

    Ok(())
}
