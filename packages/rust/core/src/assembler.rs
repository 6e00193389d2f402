//! Ebook assembler.
//!
//! Takes the drafted chapters and editorial parts produced by the pipeline
//! stages and combines them with the brief's metadata into one [`Ebook`].

use tracing::debug;

use ebookstudio_shared::{Brief, Chapter, Ebook};

/// Title used when the brief's title is blank.
pub const DEFAULT_TITLE: &str = "Untitled Ebook";

/// Author used when the brief's author is blank.
pub const DEFAULT_AUTHOR: &str = "Unknown Author";

/// Everything the stages compose, ready for assembly.
#[derive(Debug, Clone, Default)]
pub struct EbookParts {
    pub chapters: Vec<Chapter>,
    pub highlights: Vec<String>,
    pub action_plan: Vec<String>,
    pub closing: String,
    pub hero_hook: String,
}

/// Assemble the final ebook from the brief and the composed parts.
pub fn assemble_ebook(brief: &Brief, parts: EbookParts) -> Ebook {
    let title = non_blank_or(&brief.title, DEFAULT_TITLE);
    let author = non_blank_or(&brief.author, DEFAULT_AUTHOR);
    let tone_label = brief.tone_profile().label.to_lowercase();

    debug!(
        %title,
        chapters = parts.chapters.len(),
        highlights = parts.highlights.len(),
        action_steps = parts.action_plan.len(),
        "assembling ebook"
    );

    Ebook {
        title,
        subtitle: format!("An agentic playbook for {}", brief.topic),
        author,
        theme: brief.topic.clone(),
        audience: brief.audience.clone(),
        positioning: format!(
            "Crafted for {} with a {tone_label} cadence.",
            brief.audience.to_lowercase()
        ),
        chapters: parts.chapters,
        highlights: parts.highlights,
        action_plan: parts.action_plan,
        closing: parts.closing,
        hero_hook: parts.hero_hook,
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn non_blank_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
