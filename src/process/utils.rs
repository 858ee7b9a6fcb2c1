use once_cell::sync::Lazy;
use regex::Regex;

/// Greedy: spans from the first `[` to the last `]` after it, across newlines.
static ANNOTATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\[.*\]").expect("annotation pattern is valid"));

/// Strip bracketed footnote markers (`[a]`, `[b][c]`, ...) and trim whitespace.
pub fn strip_annotations(raw: &str) -> String {
    ANNOTATION_RE.replace_all(raw, "").trim().to_string()
}
