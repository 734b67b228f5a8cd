//! # pl2cy Core
//!
//! Converts ground unary and binary facts written in a Prolog-like syntax
//! into idempotent Cypher `MERGE`/`SET` statements.
//!
//! The pipeline is: comment stripping, fact splitting, per-fact parsing and
//! statement emission. Every call is pure and keeps no state between calls.

pub mod comments;
pub mod cypher;
pub mod error;
pub mod fact;
pub mod scan;

pub use cypher::{emit_statements, render};
pub use error::{ConvertError, ConvertResult, FormatProblem};
pub use fact::model::{Fact, FactShape};
pub use fact::parse_facts;

use tracing::debug;

/// Convert fact source text into Cypher output text.
///
/// Output is empty when there are no facts, otherwise one statement per line
/// with a trailing newline. Any malformed fact aborts the whole conversion.
pub fn convert(text: &str) -> ConvertResult<String> {
    let facts = parse_facts(text)?;
    let lines = emit_statements(&facts);
    debug!(facts = facts.len(), statements = lines.len(), "Converted facts");
    Ok(render(&lines))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_unary() {
        assert_eq!(
            convert("p(a).").unwrap(),
            "MERGE (n:Entity {id: 'a'})\nSET n:`p`\n"
        );
    }

    #[test]
    fn test_single_binary() {
        assert_eq!(
            convert("r(a,b).").unwrap(),
            "MERGE (s:Entity {id: 'a'})\nMERGE (o:Entity {id: 'b'})\nMERGE (s)-[:`r`]->(o)\n"
        );
    }

    #[test]
    fn test_repeated_unary_emitted_once() {
        assert_eq!(convert("p(a). p(a).").unwrap(), convert("p(a).").unwrap());
    }

    #[test]
    fn test_repeated_binary_emitted_twice() {
        let out = convert("r(a,b). r(a,b).").unwrap();
        assert_eq!(out.lines().count(), 6);
    }

    #[test]
    fn test_quoted_argument_with_comma() {
        assert_eq!(
            convert("p('a,b').").unwrap(),
            "MERGE (n:Entity {id: 'a,b'})\nSET n:`p`\n"
        );
    }

    #[test]
    fn test_backtick_in_predicate() {
        assert_eq!(
            convert("p`x(a).").unwrap(),
            "MERGE (n:Entity {id: 'a'})\nSET n:`p``x`\n"
        );
    }

    #[test]
    fn test_arity_error() {
        assert_eq!(convert("p(a,b,c)."), Err(ConvertError::arity("p", 3)));
    }

    #[test]
    fn test_missing_terminator() {
        assert!(matches!(
            convert("p(a)"),
            Err(ConvertError::Format {
                problem: FormatProblem::MissingTerminator,
                ..
            })
        ));
    }

    #[test]
    fn test_error_discards_earlier_facts() {
        assert!(convert("p(a). r(a,b). q(x,y,z).").is_err());
    }

    #[test]
    fn test_comment_line() {
        assert_eq!(convert("% note\np(a).").unwrap(), convert("p(a).").unwrap());
    }

    #[test]
    fn test_mixed_order_places_labels_first() {
        let out = convert("r(a,b). p(a).").unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "MERGE (n:Entity {id: 'a'})");
        assert_eq!(lines[1], "SET n:`p`");
        assert_eq!(lines[4], "MERGE (s)-[:`r`]->(o)");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(convert("").unwrap(), "");
        assert_eq!(convert("% only a comment\n\n").unwrap(), "");
    }

    #[test]
    fn test_comment_ended_by_carriage_return() {
        assert_eq!(convert("% c\rp(a).").unwrap(), convert("p(a).").unwrap());
    }

    #[test]
    fn test_unclosed_quote_argument_is_escaped() {
        assert_eq!(
            convert("p(a,').").unwrap(),
            "MERGE (s:Entity {id: 'a'})\nMERGE (o:Entity {id: '\\''})\nMERGE (s)-[:`p`]->(o)\n"
        );
    }

    #[test]
    fn test_comment_marker_in_quotes_truncates() {
        // the rest of the line is gone, leaving an unterminated fragment
        assert!(convert("p('50%').").is_err());
    }

    #[test]
    fn test_escaped_quote_in_argument() {
        assert_eq!(
            convert(r"name(x, 'O\'Brien').").unwrap(),
            "MERGE (s:Entity {id: 'x'})\nMERGE (o:Entity {id: 'O\\\\\\'Brien'})\nMERGE (s)-[:`name`]->(o)\n"
        );
    }
}
