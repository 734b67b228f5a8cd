//! Fact value type.

use serde::Serialize;

use crate::error::{ConvertError, ConvertResult};

/// One ground fact: `predicate(arg)` or `predicate(arg1, arg2)`.
///
/// The argument count is always 1 or 2; [`Fact::new`] is the only way to
/// build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fact {
    predicate: String,
    args: Vec<String>,
}

/// Borrowed view of a fact's arguments by arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactShape<'a> {
    /// A label attached to an instance.
    Unary(&'a str),
    /// A relationship from subject to object.
    Binary(&'a str, &'a str),
}

impl Fact {
    /// Create a fact, rejecting any argument count other than 1 or 2.
    pub fn new(predicate: impl Into<String>, args: Vec<String>) -> ConvertResult<Self> {
        let predicate = predicate.into();
        if !(1..=2).contains(&args.len()) {
            return Err(ConvertError::arity(predicate, args.len()));
        }
        Ok(Self { predicate, args })
    }

    pub fn predicate(&self) -> &str {
        &self.predicate
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn shape(&self) -> FactShape<'_> {
        match self.args.as_slice() {
            [instance] => FactShape::Unary(instance),
            [subject, object] => FactShape::Binary(subject, object),
            _ => unreachable!("Fact::new guarantees one or two arguments"),
        }
    }
}
