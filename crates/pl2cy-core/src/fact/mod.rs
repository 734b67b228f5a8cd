//! Fact source scanning and parsing.

pub mod model;
pub mod parser;

use tracing::debug;

use crate::comments::strip_comments;
use crate::error::ConvertResult;
use crate::scan::ScanState;
use model::Fact;

/// Partition comment-free source text into raw fact fragments.
///
/// A `.` ends a fact only when it is outside any quoted literal, not escaped
/// and not nested inside parentheses. Each fragment is trimmed and gets a
/// single trailing `.`. Leftover text after the last terminator is returned
/// as-is so the parser can report it.
pub fn split_facts(text: &str) -> Vec<String> {
    let mut facts = Vec::new();
    let mut current = String::new();
    let mut state = ScanState::default();
    let mut depth: usize = 0;

    for ch in text.chars() {
        let (next, significant) = state.step(ch);
        state = next;
        if significant {
            match ch {
                '(' => depth += 1,
                ')' => depth = depth.saturating_sub(1),
                '.' if depth == 0 => {
                    let fact = current.trim();
                    if !fact.is_empty() {
                        facts.push(format!("{}.", fact));
                    }
                    current.clear();
                    continue;
                }
                _ => {}
            }
        }
        current.push(ch);
    }

    let trailing = current.trim();
    if !trailing.is_empty() {
        facts.push(trailing.to_string());
    }

    facts
}

/// Strip comments, split and parse every fact in `text`.
///
/// Fails on the first malformed fragment.
pub fn parse_facts(text: &str) -> ConvertResult<Vec<Fact>> {
    let cleaned = strip_comments(text);
    let fragments = split_facts(&cleaned);
    debug!(fragments = fragments.len(), "Split fact source");

    let mut facts = Vec::with_capacity(fragments.len());
    for fragment in &fragments {
        if let Some(fact) = parser::parse_fact(fragment)? {
            facts.push(fact);
        }
    }
    Ok(facts)
}
