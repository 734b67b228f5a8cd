//! Parsing of a single raw fact fragment.

use crate::error::{ConvertError, ConvertResult, FormatProblem};
use crate::scan::ScanState;

use super::model::Fact;

/// Split the interior of a fact's parentheses into trimmed arguments.
///
/// Commas inside quoted literals or after a backslash do not split. Empty
/// segments, including the one between two adjacent commas, are dropped.
pub fn split_args(interior: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut state = ScanState::default();

    for ch in interior.chars() {
        let (next, significant) = state.step(ch);
        state = next;
        if significant && ch == ',' {
            args.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(ch);
        }
    }
    args.push(current.trim().to_string());

    args.retain(|arg| !arg.is_empty());
    args
}

/// Parse one raw fragment as produced by [`super::split_facts`].
///
/// Returns `Ok(None)` for a fragment that is empty once its terminator is
/// removed.
pub fn parse_fact(raw: &str) -> ConvertResult<Option<Fact>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    let body = raw
        .strip_suffix('.')
        .ok_or_else(|| ConvertError::format(raw, FormatProblem::MissingTerminator))?
        .trim();
    if body.is_empty() {
        return Ok(None);
    }

    let (predicate, rest) = body
        .split_once('(')
        .filter(|_| body.ends_with(')'))
        .ok_or_else(|| ConvertError::format(body, FormatProblem::MissingParentheses))?;

    let predicate = predicate.trim();
    if predicate.is_empty() {
        return Err(ConvertError::format(body, FormatProblem::EmptyPredicate));
    }

    // `rest` ends with the closing parenthesis checked above
    let interior = &rest[..rest.len() - 1];
    Fact::new(predicate, split_args(interior)).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fact::model::FactShape;

    #[test]
    fn test_split_simple_args() {
        assert_eq!(split_args("a, b"), vec!["a", "b"]);
        assert_eq!(split_args(" a "), vec!["a"]);
    }

    #[test]
    fn test_split_keeps_quoted_comma() {
        assert_eq!(split_args("'a,b'"), vec!["'a,b'"]);
        assert_eq!(split_args("\"x, y\", z"), vec!["\"x, y\"", "z"]);
    }

    #[test]
    fn test_split_escaped_comma() {
        assert_eq!(split_args("a\\,b, c"), vec!["a\\,b", "c"]);
    }

    #[test]
    fn test_split_drops_empty_fields() {
        assert_eq!(split_args("a,,b"), vec!["a", "b"]);
        assert_eq!(split_args(" , "), Vec::<String>::new());
        assert_eq!(split_args(""), Vec::<String>::new());
    }

    #[test]
    fn test_parse_unary() {
        let fact = parse_fact("person(alice).").unwrap().unwrap();
        assert_eq!(fact.predicate(), "person");
        assert_eq!(fact.shape(), FactShape::Unary("alice"));
    }

    #[test]
    fn test_parse_binary_with_whitespace() {
        let fact = parse_fact("  knows ( alice , bob ) .").unwrap().unwrap();
        assert_eq!(fact.predicate(), "knows");
        assert_eq!(fact.shape(), FactShape::Binary("alice", "bob"));
    }

    #[test]
    fn test_parse_nested_parens_in_argument() {
        let fact = parse_fact("p(f(x)).").unwrap().unwrap();
        assert_eq!(fact.args(), ["f(x)"]);
    }

    #[test]
    fn test_parse_skips_empty() {
        assert_eq!(parse_fact("").unwrap(), None);
        assert_eq!(parse_fact(" . ").unwrap(), None);
    }

    #[test]
    fn test_missing_terminator() {
        let err = parse_fact("p(a)").unwrap_err();
        assert_eq!(err, ConvertError::format("p(a)", FormatProblem::MissingTerminator));
    }

    #[test]
    fn test_missing_parentheses() {
        let err = parse_fact("p.").unwrap_err();
        assert_eq!(err, ConvertError::format("p", FormatProblem::MissingParentheses));

        let err = parse_fact("p(a) x.").unwrap_err();
        assert_eq!(err, ConvertError::format("p(a) x", FormatProblem::MissingParentheses));
    }

    #[test]
    fn test_empty_predicate() {
        let err = parse_fact("(a).").unwrap_err();
        assert_eq!(err, ConvertError::format("(a)", FormatProblem::EmptyPredicate));
    }

    #[test]
    fn test_arity_violation() {
        assert_eq!(parse_fact("p(a,b,c)."), Err(ConvertError::arity("p", 3)));
        assert_eq!(parse_fact("p()."), Err(ConvertError::arity("p", 0)));
    }
}
