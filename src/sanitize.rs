//! Message sanitization.
//!
//! Keeps every record on one physical line and free of single-quotes so
//! downstream log-line parsers never see embedded quoting.

/// Sanitize message text for emission: every single-quote becomes a
/// double-quote and every newline becomes a single space, one-for-one.
pub fn sanitize(message: &str) -> String {
    message.replace('\'', "\"").replace('\n', " ")
}
