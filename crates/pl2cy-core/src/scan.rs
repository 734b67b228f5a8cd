//! Character-level scanner state shared by the fact and argument splitters.
//!
//! The scanner tracks whether the current position is inside a quoted literal
//! and whether the previous character was a backslash. Both splitters feed it
//! one character at a time and only act on characters it reports as
//! significant.

/// Scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    /// Outside any quoted literal.
    #[default]
    Normal,
    /// Inside a literal opened by the given quote character.
    InQuote(char),
    /// The previous character was a backslash. `quote` is the literal we
    /// return to once the escaped character has been consumed.
    Escaped { quote: Option<char> },
}

/// Returns true for the two quote characters the fact language knows.
pub fn is_quote(ch: char) -> bool {
    ch == '\'' || ch == '"'
}

impl ScanState {
    /// Consume one character.
    ///
    /// Returns the next state and whether `ch` is significant: read in
    /// `Normal` state and neither a quote nor a backslash. Only significant
    /// characters may act as delimiters.
    pub fn step(self, ch: char) -> (ScanState, bool) {
        match self {
            Self::Escaped { quote } => (Self::from_quote(quote), false),
            _ if ch == '\\' => (Self::Escaped { quote: self.quote() }, false),
            Self::Normal if is_quote(ch) => (Self::InQuote(ch), false),
            Self::Normal => (Self::Normal, true),
            Self::InQuote(q) if ch == q => (Self::Normal, false),
            Self::InQuote(q) => (Self::InQuote(q), false),
        }
    }

    /// The quote character of the literal currently open, if any.
    pub fn quote(self) -> Option<char> {
        match self {
            Self::Normal => None,
            Self::InQuote(q) => Some(q),
            Self::Escaped { quote } => quote,
        }
    }

    fn from_quote(quote: Option<char>) -> Self {
        quote.map_or(Self::Normal, Self::InQuote)
    }
}
