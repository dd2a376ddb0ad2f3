//! Keep chat text on a single log line.

/// Longest user-supplied string echoed into the log.
const MAX_LOG_CHARS: usize = 200;

/// Escape control characters and quotes (`\n` becomes `\\n`) and clip long
/// input with an ellipsis.
pub fn escape_log(s: &str) -> String {
    let mut out: String = s
        .chars()
        .take(MAX_LOG_CHARS)
        .flat_map(char::escape_debug)
        .collect();
    if s.chars().nth(MAX_LOG_CHARS).is_some() {
        out.push('…');
    }
    out
}
