const MAX_STDERR_LENGTH: usize = 2_000;

/// Bound the stderr excerpt carried inside error messages. The scanner can
/// dump arbitrarily large tracebacks; callers only need the head.
pub fn truncate_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.len() <= MAX_STDERR_LENGTH {
        trimmed.to_string()
    } else {
        let mut cut = MAX_STDERR_LENGTH;
        while !trimmed.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}...", &trimmed[..cut])
    }
}
