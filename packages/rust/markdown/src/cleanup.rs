//! Cleanup passes for rendered Markdown.
//!
//! Each pass is a function `&str -> String` applied in sequence.

use std::sync::LazyLock;

use regex::Regex;

/// Run the full cleanup pipeline on rendered Markdown text.
pub(crate) fn run_pipeline(md: &str) -> String {
    let mut result = md.to_string();

    result = strip_trailing_whitespace(&result);
    result = clean_blank_lines(&result);
    result = ensure_trailing_newline(&result);

    result
}

/// Collapse every whitespace run (newlines included) in a piece of inline
/// text to one space, so user-supplied fields cannot break the line layout.
pub(crate) fn inline(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ---------------------------------------------------------------------------
// Pass 1: Trailing whitespace
// ---------------------------------------------------------------------------

fn strip_trailing_whitespace(md: &str) -> String {
    md.lines().map(str::trim_end).collect::<Vec<_>>().join("\n")
}

// ---------------------------------------------------------------------------
// Pass 2: Blank lines
// ---------------------------------------------------------------------------

/// Collapse runs of blank lines into exactly one.
fn clean_blank_lines(md: &str) -> String {
    static MULTI_BLANK_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

    MULTI_BLANK_RE
        .replace_all(md.trim_start_matches('\n'), "\n\n")
        .to_string()
}

// ---------------------------------------------------------------------------
// Pass 3: Trailing newline
// ---------------------------------------------------------------------------

fn ensure_trailing_newline(md: &str) -> String {
    format!("{}\n", md.trim_end_matches('\n'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_collapses_whitespace() {
        assert_eq!(inline("  Show how\n\nagents   work "), "Show how agents work");
        assert_eq!(inline(""), "");
    }

    #[test]
    fn blank_line_runs_collapse() {
        assert_eq!(clean_blank_lines("\n\n# A\n\n\n\nB"), "# A\n\nB");
    }

    #[test]
    fn pipeline_normalizes_document() {
        let md = "# Title   \n\n\n\nBody  \n\n";
        assert_eq!(run_pipeline(md), "# Title\n\nBody\n");
    }
}
