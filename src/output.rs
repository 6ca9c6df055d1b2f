//! Output assembly

/// Join accepted relay entries into the final text document.
///
/// One entry per line; an empty selection yields an empty string.
pub fn join_lines(entries: &[String]) -> String {
    entries.join("\n")
}
