//! Editorial pass: highlights, action plan, closing, and hero hook.

use ebookstudio_shared::{Brief, Chapter};

use super::{ACTION_PLAN_STEPS, MAX_HIGHLIGHTS};
use crate::pool::pick;

const HIGHLIGHT_STARTERS: [&str; 6] = [
    "Agent handoffs become vibrant when",
    "Creativity scales the moment",
    "Momentum multiplies once",
    "Teams stay calibrated because",
    "Vision translates into delivery when",
    "Unexpected delight appears as soon as",
];

const ACTION_STEPS: [&str; 7] = [
    "Map the agent cohort and name their personalities.",
    "Storyboard one flagship journey with narrative beats and proof points.",
    "Draft the instrumentation ritual that keeps humans in the driver seat.",
    "Prototype a feedback salon and invite cross-functional voices.",
    "Publish a manifesto declaring how the ecosystem creates value together.",
    "Measure resonance using story-aligned metrics instead of vanity dashboards.",
    "Run a live scenario test where agents mediate a customer challenge.",
];

const RESONANCES: [&str; 4] = [
    "The promise is not speed for its own sake, but fidelity to the story you want people to live inside.",
    "When we teach agents to collaborate like ensemble casts, every launch feels like a premiere.",
    "The craft is learning to choreograph possibility without losing the human fingerprints on the work.",
    "The future belongs to studios that can turn intelligence into experiences with warmth and verve.",
];

/// Turn the first six chapter summaries into highlight lines.
///
/// Each summary has its first "This chapter" replaced by "the work" and its
/// first "we" by "teams" (plain substring replacement), then gets a starter
/// picked at `index * 5 + chapters.len()`.
pub fn craft_highlights(chapters: &[Chapter], brief: &Brief) -> Vec<String> {
    let audience = brief.audience.to_lowercase();
    let total = chapters.len() as i64;

    chapters
        .iter()
        .take(MAX_HIGHLIGHTS)
        .enumerate()
        .map(|(index, chapter)| {
            let starter = pick(&HIGHLIGHT_STARTERS, index as i64 * 5 + total);
            let summary = chapter
                .summary
                .replacen("This chapter", "the work", 1)
                .replacen("we", "teams", 1);
            format!(
                "{starter} {summary} so {audience} can move faster with {}.",
                brief.topic
            )
        })
        .collect()
}

/// Five action-plan steps picked at `seed + index * 7`. Repeats are allowed.
pub fn craft_action_plan(seed: i64) -> Vec<String> {
    (0..ACTION_PLAN_STEPS as i64)
        .map(|index| pick(&ACTION_STEPS, seed + index * 7).to_string())
        .collect()
}

pub fn craft_closing(seed: i64) -> String {
    pick(&RESONANCES, seed).to_string()
}

/// The one-line hook that opens the ebook, picked at `seed + 5`.
pub fn build_hero_hook(brief: &Brief, seed: i64) -> String {
    let tone = brief.tone_profile();
    let topic = brief.topic.as_str();
    let audience = brief.audience.to_lowercase();

    let hooks = [
        format!(
            "What if {topic} felt like a stage where {} invite audiences to lean forward?",
            tone.lexicon
        ),
        format!(
            "Imagine {topic} tuned to {}, delivering momentum to {audience}.",
            tone.cadence
        ),
        format!(
            "This ebook is a field guide for {audience} who want to orchestrate {topic} with elegance."
        ),
        format!(
            "A manifesto for anyone ready to script {topic} as a living ecosystem, not a static asset."
        ),
    ];

    pick(&hooks, seed + 5).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ebookstudio_shared::Tone;

    fn chapter(n: usize, summary: &str) -> Chapter {
        Chapter {
            title: format!("Chapter {n}: Arc"),
            summary: summary.into(),
            paragraphs: vec![],
            spotlight: String::new(),
        }
    }

    #[test]
    fn highlights_cap_at_six() {
        let chapters: Vec<_> = (1..=9).map(|n| chapter(n, "Mapping x.")).collect();
        assert_eq!(craft_highlights(&chapters, &Brief::default()).len(), 6);

        let chapters: Vec<_> = (1..=3).map(|n| chapter(n, "Mapping x.")).collect();
        assert_eq!(craft_highlights(&chapters, &Brief::default()).len(), 3);
    }

    #[test]
    fn highlight_rewrites_first_occurrences_only() {
        let brief = Brief {
            topic: "testing systems".into(),
            audience: "Engineers".into(),
            ..Brief::default()
        };
        let chapters = vec![chapter(1, "This chapter shows how we plan and we ship.")];
        let highlights = craft_highlights(&chapters, &brief);
        // starter offset 0 * 5 + 1
        assert_eq!(
            highlights[0],
            "Creativity scales the moment the work shows how teams plan and we ship. \
             so engineers can move faster with testing systems."
        );
    }

    #[test]
    fn action_plan_has_five_steps() {
        let plan = craft_action_plan(0);
        assert_eq!(plan.len(), 5);
        // offsets 0, 7, 14, ... all land on index 0 of a seven-entry pool
        assert!(plan.iter().all(|step| step == ACTION_STEPS[0]));

        let plan = craft_action_plan(3);
        assert!(plan.iter().all(|step| step == ACTION_STEPS[3]));
    }

    #[test]
    fn closing_wraps_negative_seeds() {
        assert_eq!(craft_closing(-1), RESONANCES[3]);
        assert_eq!(craft_closing(4), RESONANCES[0]);
    }

    #[test]
    fn hero_hook_interpolates_tone() {
        let brief = Brief {
            topic: "testing systems".into(),
            audience: "Engineers".into(),
            tone: Tone::Practical,
            ..Brief::default()
        };
        // seed -4 + 5 == 1
        assert_eq!(
            build_hero_hook(&brief, -4),
            "Imagine testing systems tuned to clean structure and actionable breakdowns, \
             delivering momentum to engineers."
        );
        // seed -5 + 5 == 0
        assert!(build_hero_hook(&brief, -5).contains("frameworks, constraints, execution rhythms"));
    }
}
