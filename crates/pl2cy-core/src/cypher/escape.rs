//! Cypher literal and identifier quoting.

use crate::scan::is_quote;

/// Quote a fact argument as a single-quoted Cypher string literal.
///
/// One matching pair of outer quotes is removed first, so `'a'`, `"a"` and
/// `a` all become `'a'`. Backslashes and single quotes are then escaped.
pub fn escape_literal(value: &str) -> String {
    let value = strip_outer_quotes(value.trim());
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for ch in value.chars() {
        if ch == '\\' || ch == '\'' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('\'');
    out
}

/// Quote a predicate name as a backtick-delimited label or relationship type.
pub fn escape_identifier(value: &str) -> String {
    format!("`{}`", value.trim().replace('`', "``"))
}

fn strip_outer_quotes(value: &str) -> &str {
    let mut chars = value.chars();
    match (chars.next(), chars.next_back()) {
        (Some(open), Some(close)) if open == close && is_quote(open) => chars.as_str(),
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_literal() {
        assert_eq!(escape_literal("alice"), "'alice'");
        assert_eq!(escape_literal("  alice "), "'alice'");
    }

    #[test]
    fn test_outer_quotes_stripped_once() {
        assert_eq!(escape_literal("'a,b'"), "'a,b'");
        assert_eq!(escape_literal("\"bob\""), "'bob'");
        assert_eq!(escape_literal("''x''"), "'\\'x\\''");
    }

    #[test]
    fn test_mismatched_quotes_kept_and_escaped() {
        assert_eq!(escape_literal("'a\""), "'\\'a\"'");
    }

    #[test]
    fn test_lone_quote_is_escaped() {
        assert_eq!(escape_literal("'"), "'\\''");
    }

    #[test]
    fn test_empty_quoted_literal() {
        assert_eq!(escape_literal("''"), "''");
    }

    #[test]
    fn test_backslash_and_quote_escaped() {
        assert_eq!(escape_literal("O'Brien"), "'O\\'Brien'");
        assert_eq!(escape_literal("a\\b"), "'a\\\\b'");
        assert_eq!(escape_literal("\"it's\""), "'it\\'s'");
    }

    #[test]
    fn test_identifier() {
        assert_eq!(escape_identifier("person"), "`person`");
        assert_eq!(escape_identifier(" p`x "), "`p``x`");
    }
}
