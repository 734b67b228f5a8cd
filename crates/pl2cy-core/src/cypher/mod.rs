//! Cypher statement emission.
//!
//! Unary facts become labels on `Entity` nodes, binary facts become
//! relationships between them:
//! - `p(a).`   -> `MERGE (n:Entity {id: 'a'})` / `SET n:`p``
//! - `r(a,b).` -> `MERGE (s:Entity {id: 'a'})` / `MERGE (o:Entity {id: 'b'})` / `MERGE (s)-[:`r`]->(o)`
//!
//! All label statements come before all relationship statements.

pub mod escape;

use std::collections::HashSet;

use crate::fact::model::{Fact, FactShape};
use escape::{escape_identifier, escape_literal};

/// De-duplication key for label attachments within one emission call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityKey {
    /// Raw argument text as parsed.
    pub instance: String,
    /// Escaped label identifier.
    pub label: String,
}

/// Convert facts into Cypher statement lines.
pub fn emit_statements(facts: &[Fact]) -> Vec<String> {
    let mut lines = emit_labels(facts);
    lines.extend(emit_relationships(facts));
    lines
}

/// Join statement lines into output text: empty, or newline-terminated.
pub fn render(lines: &[String]) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn emit_labels(facts: &[Fact]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut seen: HashSet<EntityKey> = HashSet::new();

    for fact in facts {
        let FactShape::Unary(instance) = fact.shape() else {
            continue;
        };
        let label = escape_identifier(fact.predicate());
        let key = EntityKey {
            instance: instance.to_string(),
            label: label.clone(),
        };
        if !seen.insert(key) {
            continue;
        }
        lines.push(format!("MERGE (n:Entity {{id: {}}})", escape_literal(instance)));
        lines.push(format!("SET n:{}", label));
    }

    lines
}

fn emit_relationships(facts: &[Fact]) -> Vec<String> {
    let mut lines = Vec::new();

    for fact in facts {
        let FactShape::Binary(subject, object) = fact.shape() else {
            continue;
        };
        let rel = escape_identifier(fact.predicate());
        lines.push(format!("MERGE (s:Entity {{id: {}}})", escape_literal(subject)));
        lines.push(format!("MERGE (o:Entity {{id: {}}})", escape_literal(object)));
        lines.push(format!("MERGE (s)-[:{}]->(o)", rel));
    }

    lines
}
