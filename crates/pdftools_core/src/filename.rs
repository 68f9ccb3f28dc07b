use crate::operation::PageRange;

/// Used when no staged file name is known.
pub const FALLBACK_INPUT_NAME: &str = "output.pdf";

/// Deterministic download name for a finished run.
///
/// `operation` is the wire name (`compress`, `merge`, `split`); anything else
/// gets the generic `-processed` suffix. `timestamp_ms` only matters for merge.
pub fn output_filename(
    original: &str,
    operation: &str,
    split_range: Option<PageRange>,
    timestamp_ms: i64,
) -> String {
    let base = basename(original);
    match (operation, split_range) {
        ("compress", _) => format!("{base}-compressed.pdf"),
        ("merge", _) => format!("merged-{timestamp_ms}.pdf"),
        ("split", Some(range)) => {
            format!("{base}-split-{}-{}.pdf", range.start_page, range.end_page)
        }
        _ => format!("{base}-processed.pdf"),
    }
}

/// Strips one trailing `.pdf`.
pub fn basename(original: &str) -> &str {
    original.strip_suffix(".pdf").unwrap_or(original)
}
