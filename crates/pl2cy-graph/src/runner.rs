//! Sequential execution of Cypher scripts.
//!
//! A converted script holds one clause per line, and consecutive lines share
//! variables (`MERGE (n:Entity ...)` followed by `SET n:...`). Lines are
//! therefore grouped into batches that are sent as single statements:
//! - blank lines and `//` comments are skipped
//! - a trailing `;` closes the current batch
//! - a node pattern that re-declares a variable already bound in the current
//!   batch starts a new one
//!
//! Batches run one after another without an enclosing transaction, so a
//! failure leaves earlier batches applied.

use std::collections::HashSet;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::GraphClient;

/// Result of running a script.
#[derive(Debug, Clone, Default)]
pub struct RunResult {
    /// Batches sent to the server.
    pub statements: usize,
    /// Script lines contained in those batches.
    pub lines: usize,
}

/// Group script lines into executable statements, preserving order.
pub fn batch_statements(script: &str) -> Vec<String> {
    let mut batches = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut bound: HashSet<&str> = HashSet::new();

    for line in script.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        let (body, terminated) = match line.strip_suffix(';') {
            Some(body) => (body.trim_end(), true),
            None => (line, false),
        };

        if let Some(var) = declared_variable(body) {
            if bound.contains(var) {
                flush(&mut batches, &mut current, &mut bound);
            }
            bound.insert(var);
        }
        if !body.is_empty() {
            current.push(body);
        }
        if terminated {
            flush(&mut batches, &mut current, &mut bound);
        }
    }
    flush(&mut batches, &mut current, &mut bound);

    batches
}

/// Execute every statement of `script` in order.
pub async fn run_script(client: &GraphClient, script: &str) -> Result<RunResult> {
    let batches = batch_statements(script);
    info!(statements = batches.len(), "Running Cypher script");

    let mut result = RunResult::default();
    for (i, statement) in batches.iter().enumerate() {
        debug!(index = i + 1, statement = %statement, "Executing statement");
        client
            .run(statement)
            .await
            .with_context(|| format!("Statement {} failed:\n{}", i + 1, statement))?;
        result.statements += 1;
        result.lines += statement.lines().count();
    }

    info!(statements = result.statements, lines = result.lines, "Cypher script applied");
    Ok(result)
}

fn flush<'a>(batches: &mut Vec<String>, current: &mut Vec<&'a str>, bound: &mut HashSet<&'a str>) {
    if !current.is_empty() {
        batches.push(current.join("\n"));
        current.clear();
    }
    bound.clear();
}

/// Variable introduced by a `MERGE (v:...)` or `CREATE (v {...})` node pattern.
fn declared_variable(line: &str) -> Option<&str> {
    let rest = ["MERGE", "CREATE"]
        .iter()
        .find_map(|kw| strip_keyword(line, kw))?
        .trim_start()
        .strip_prefix('(')?;

    let end = rest
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    let (var, after) = rest.split_at(end);
    if var.is_empty() {
        return None;
    }

    match after.trim_start().chars().next() {
        Some(':') | Some('{') => Some(var),
        _ => None,
    }
}

fn strip_keyword<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let head = line.get(..keyword.len())?;
    if head.eq_ignore_ascii_case(keyword) {
        Some(&line[keyword.len()..])
    } else {
        None
    }
}
