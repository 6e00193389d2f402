//! Ebook-to-Markdown rendering and export file naming.
//!
//! [`render_markdown`] lays an [`Ebook`] out as a Markdown document: title
//! block, metadata, hero hook, table of contents, chapters, the optional
//! highlights and action plan, and closing thoughts. [`slugify`] derives the
//! export file stem from the title.

mod cleanup;

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, instrument};

use ebookstudio_shared::Ebook;

/// File stem used when a title has no usable characters.
pub const DEFAULT_SLUG: &str = "ebook";

/// Longest slug produced by [`slugify`].
pub const MAX_SLUG_LEN: usize = 60;

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Render an ebook as Markdown.
///
/// Blocks are separated by one blank line. The highlights and action-plan
/// sections are left out entirely when empty.
#[instrument(skip_all, fields(title = %ebook.title, chapters = ebook.chapters.len()))]
pub fn render_markdown(ebook: &Ebook) -> String {
    let mut blocks: Vec<String> = Vec::new();

    blocks.push(format!(
        "# {}\n_{}_",
        cleanup::inline(&ebook.title),
        cleanup::inline(&ebook.subtitle)
    ));
    blocks.push(format!(
        "**Author:** {}\n**Audience:** {}\n**Positioning:** {}",
        cleanup::inline(&ebook.author),
        cleanup::inline(&ebook.audience),
        cleanup::inline(&ebook.positioning)
    ));

    blocks.push("## Hero Hook".into());
    blocks.push(cleanup::inline(&ebook.hero_hook));

    blocks.push("## Table of Contents".into());
    blocks.push(numbered_list(ebook.chapters.iter().map(|c| c.title.as_str())));

    for chapter in &ebook.chapters {
        blocks.push(format!("## {}", cleanup::inline(&chapter.title)));
        blocks.push(format!("_{}_", cleanup::inline(&chapter.summary)));
        blocks.extend(chapter.paragraphs.iter().map(|p| cleanup::inline(p)));
        if !chapter.spotlight.trim().is_empty() {
            blocks.push(format!("> {}", cleanup::inline(&chapter.spotlight)));
        }
    }

    if !ebook.highlights.is_empty() {
        blocks.push("## Highlights".into());
        blocks.push(
            ebook
                .highlights
                .iter()
                .map(|h| format!("- {}", cleanup::inline(h)))
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }

    if !ebook.action_plan.is_empty() {
        blocks.push("## Action Plan".into());
        blocks.push(numbered_list(ebook.action_plan.iter().map(String::as_str)));
    }

    blocks.push("## Closing Thoughts".into());
    blocks.push(cleanup::inline(&ebook.closing));

    let joined = blocks
        .into_iter()
        .filter(|block| !block.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");

    let markdown = cleanup::run_pipeline(&joined);
    debug!(len = markdown.len(), "markdown rendered");
    markdown
}

fn numbered_list<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items
        .enumerate()
        .map(|(index, item)| format!("{}. {}", index + 1, cleanup::inline(item)))
        .collect::<Vec<_>>()
        .join("\n")
}

// ---------------------------------------------------------------------------
// File naming
// ---------------------------------------------------------------------------

/// Derive an export file stem from a title.
///
/// Lowercases, collapses every run of characters outside `[a-z0-9]` into a
/// single `-`, trims leading/trailing `-`, truncates to 60 characters, and
/// falls back to `"ebook"` when nothing is left.
pub fn slugify(title: &str) -> String {
    static NON_ALNUM_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"));

    let lowered = title.to_lowercase();
    let dashed = NON_ALNUM_RE.replace_all(&lowered, "-");
    let slug: String = dashed.trim_matches('-').chars().take(MAX_SLUG_LEN).collect();

    if slug.is_empty() {
        DEFAULT_SLUG.to_string()
    } else {
        slug
    }
}
