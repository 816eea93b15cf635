/// Hard cap on normalized content length, in characters. Chunking applies
/// its own smaller bound on top of this.
pub const MAX_CONTENT_LENGTH: usize = 30_000;

/// Deterministic cleanup applied to stored text before any gateway call.
///
/// Keeps printable ASCII plus newline and carriage return, collapses every
/// whitespace run (including the gaps left by removed characters) to a
/// single space, trims, and silently truncates to [`MAX_CONTENT_LENGTH`].
/// Truncation is detected by callers as `normalize(raw).len() < raw.len()`.
pub fn normalize(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len().min(MAX_CONTENT_LENGTH));
    let mut pending_space = false;

    for ch in raw.chars() {
        let printable = matches!(ch, ' '..='~') || ch == '\n' || ch == '\r';
        if !printable || ch.is_whitespace() {
            // Removed characters leave a gap that merges into the
            // surrounding whitespace run.
            pending_space = true;
            continue;
        }

        let separator = pending_space && !result.is_empty();
        let needed = if separator { 2 } else { 1 };
        if result.len() + needed > MAX_CONTENT_LENGTH {
            break;
        }
        if separator {
            result.push(' ');
        }
        pending_space = false;
        result.push(ch);
    }

    result
}
