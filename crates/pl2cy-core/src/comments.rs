//! Line comment removal.

/// Marker that starts a comment running to the end of the line.
pub const COMMENT_MARKER: char = '%';

/// Truncate every line at its first comment marker and rejoin with `\n`.
///
/// Lines end at `\n`, `\r\n` or a bare `\r`. Not quote-aware: a marker
/// inside a quoted literal still ends the line.
pub fn strip_comments(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n");
    normalized
        .split(['\n', '\r'])
        .map(|line| match line.find(COMMENT_MARKER) {
            Some(idx) => &line[..idx],
            None => line,
        })
        .collect::<Vec<_>>()
        .join("\n")
}
