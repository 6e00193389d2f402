//! Chapter drafting: body paragraphs and the agent spotlight line.
//!
//! The sixth paragraph ("Reflection prompt:") and its pool are new content
//! with no earlier counterpart. It exists so the largest budget (six) is
//! always filled.

use ebookstudio_shared::{Brief, Chapter};

use crate::pool::{paragraph, pick};

const TENSION_ANGLES: [&str; 4] = [
    "The friction usually shows up when ambition outpaces instrumentation.",
    "Teams that race ahead without storyboarded rituals struggle to stay coherent.",
    "Confusion spikes whenever tools speak in metrics but teams crave meaning.",
    "Momentum leaks out when creators can't see their fingerprints across the system.",
];

const RESOLUTION_ANGLES: [&str; 4] = [
    "Anchoring the work in vivid constraints creates room for daring leaps.",
    "We stretch into experimentation with guardrails that talk back in real time.",
    "Momentum builds when the toolkit invites riffing instead of rigid compliance.",
    "Every iteration loops through reflection, remixing, and renewed commitments.",
];

const PRAXIS_ANGLES: [&str; 4] = [
    "Sketch prompt libraries that double as storyboards for every agent.",
    "Co-create north star dashboards that narrate the customer journey.",
    "Ship tiny theatre pieces: micro-deliverables that prove the arc is working.",
    "Host weekly critique salons where agents and humans replay key decisions.",
];

const INTEGRATION_ANGLES: [&str; 4] = [
    "Fuse qualitative insights with telemetry so the system keeps learning.",
    "Interleave moments of human review so intuition guides automation.",
    "Use narrative checkpoints to explain each recommendation before it ships.",
    "Let every experiment end with a storytelling retrospective to surface texture.",
];

const MEASUREMENT_ANGLES: [&str; 4] = [
    "Tie progress to audience resonance metrics instead of vanity dashboards.",
    "Track the tempo between ideas, prototypes, and market feedback in weeks.",
    "Instrument each agent handoff so teams can see where energy compounds.",
    "Translate data into story beats the executive team can retell with confidence.",
];

const NEXT_MOVES: [&str; 4] = [
    "Document what surprised you and feed it back into the agent prompts.",
    "Invite a partner team to stress test the workflow in a live session.",
    "Capture a short behind-the-scenes narrative to share with your community.",
    "Translate the lesson into a reusable template for the wider organization.",
];

const REFLECTION_PROMPTS: [&str; 4] = [
    "Which handoff in your current workflow would you redesign first, and why?",
    "Where does your team lose the story between the idea and the launch?",
    "What would change if every agent had to explain its choices out loud?",
    "Which ritual from this chapter could you pilot before the week is out?",
];

const SPOTLIGHT_LEADS: [&str; 4] = [
    "Signal Scout",
    "Pattern Archivist",
    "Story Synthesizer",
    "Launch Conductor",
];

const SPOTLIGHT_PARTNERS: [&str; 4] = [
    "Feedback Choreographer",
    "Momentum Coach",
    "Experience Editor",
    "Ethics Custodian",
];

/// Spacing between per-chapter pick seeds.
const CHAPTER_STRIDE: i64 = 31;

/// Words of budget that buy one paragraph.
const WORDS_PER_PARAGRAPH: u64 = 180;

/// Paragraphs kept for a words-per-chapter budget:
/// `clamp(round(words / 180), 3, 6)`.
pub fn paragraph_budget(words_per_chapter: u32) -> usize {
    let rounded = (u64::from(words_per_chapter) + WORDS_PER_PARAGRAPH / 2) / WORDS_PER_PARAGRAPH;
    rounded.clamp(3, 6) as usize
}

/// Draft one outlined chapter.
///
/// Six paragraphs are composed in a fixed order and then cut down to
/// [`paragraph_budget`], so smaller budgets lose the later paragraphs.
pub fn draft_chapter(brief: &Brief, chapter: &Chapter, index: usize, seed: i64) -> Chapter {
    let pick_seed = seed + index as i64 * CHAPTER_STRIDE;
    let topic = brief.topic.as_str();
    let audience = brief.audience.to_lowercase();

    let entry_angles = [
        format!("The {audience} in this chapter confront the myths around {topic}."),
        format!("We slow down to map the moving pieces that make {topic} feel slippery."),
        format!("Each page treats {topic} as a living studio instead of a static process."),
        format!(
            "Practical agency emerges when we script {topic} like a multi-scene montage."
        ),
    ];

    let closing_angles = [
        format!("The chapter lands on a promise: {topic} can feel like guided improvisation."),
        "We exit with the reminder that orchestration is a craft, not just automation.".to_string(),
        "The invitation is simple: design cues that help technology feel collaborative."
            .to_string(),
        "Creativity scales when we choreograph conversations between people and agents."
            .to_string(),
    ];

    // Any non-empty brief is quoted verbatim, whitespace included.
    let brief_note = if brief.brief.is_empty() {
        String::new()
    } else {
        format!("Throughout, we honour the brief: {}", brief.brief)
    };

    let mut paragraphs = vec![
        paragraph(&[
            pick(&entry_angles, pick_seed).as_str(),
            *pick(&TENSION_ANGLES, pick_seed + 7),
        ]),
        paragraph(&[
            *pick(&RESOLUTION_ANGLES, pick_seed + 13),
            *pick(&PRAXIS_ANGLES, pick_seed + 19),
        ]),
        paragraph(&[pick(&closing_angles, pick_seed + 29).as_str(), brief_note.as_str()]),
        paragraph(&[
            *pick(&INTEGRATION_ANGLES, pick_seed + 23),
            *pick(&MEASUREMENT_ANGLES, pick_seed + 41),
        ]),
        paragraph(&["Next move:", *pick(&NEXT_MOVES, pick_seed + 53)]),
        paragraph(&["Reflection prompt:", *pick(&REFLECTION_PROMPTS, pick_seed + 61)]),
    ];
    paragraphs.truncate(paragraph_budget(brief.words_per_chapter));

    let spotlight = format!(
        "Agent Spotlight: Pair a {} with a {} to orchestrate this move.",
        pick(&SPOTLIGHT_LEADS, pick_seed + 17),
        pick(&SPOTLIGHT_PARTNERS, pick_seed + 21),
    );

    Chapter {
        title: chapter.title.clone(),
        summary: chapter.summary.clone(),
        paragraphs,
        spotlight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skeleton() -> Chapter {
        Chapter {
            title: "Chapter 1: Foundations".into(),
            summary: "Mapping testing systems by weaving agent teaming with x.".into(),
            paragraphs: Vec::new(),
            spotlight: String::new(),
        }
    }

    #[test]
    fn paragraph_budget_rounds_and_clamps() {
        assert_eq!(paragraph_budget(0), 3);
        assert_eq!(paragraph_budget(200), 3);
        assert_eq!(paragraph_budget(629), 3);
        assert_eq!(paragraph_budget(630), 4);
        assert_eq!(paragraph_budget(800), 4);
        assert_eq!(paragraph_budget(900), 5);
        assert_eq!(paragraph_budget(1000), 6);
        assert_eq!(paragraph_budget(u32::MAX), 6);
    }

    #[test]
    fn drafted_chapter_matches_budget() {
        for words in [200, 420, 630, 900, 1000] {
            let brief = Brief {
                words_per_chapter: words,
                ..Brief::default()
            };
            let drafted = draft_chapter(&brief, &skeleton(), 2, 500);
            assert_eq!(drafted.paragraphs.len(), paragraph_budget(words), "words {words}");
        }
    }

    #[test]
    fn shorter_budgets_keep_the_same_leading_paragraphs() {
        let long = Brief {
            words_per_chapter: 1000,
            ..Brief::default()
        };
        let short = Brief {
            words_per_chapter: 200,
            ..Brief::default()
        };
        let long_draft = draft_chapter(&long, &skeleton(), 1, 77);
        let short_draft = draft_chapter(&short, &skeleton(), 1, 77);
        assert_eq!(short_draft.paragraphs[..], long_draft.paragraphs[..3]);
        assert!(long_draft.paragraphs[4].starts_with("Next move: "));
        assert!(long_draft.paragraphs[5].starts_with("Reflection prompt: "));
    }

    #[test]
    fn brief_text_is_honoured_when_present() {
        let with_brief = draft_chapter(&Brief::default(), &skeleton(), 0, 0);
        assert!(with_brief.paragraphs[2].contains("Throughout, we honour the brief: Show how"));

        let without = Brief {
            brief: String::new(),
            ..Brief::default()
        };
        let drafted = draft_chapter(&without, &skeleton(), 0, 0);
        assert!(!drafted.paragraphs[2].contains("honour the brief"));
    }

    #[test]
    fn whitespace_only_brief_is_still_quoted() {
        let blank = Brief {
            brief: "   ".into(),
            ..Brief::default()
        };
        let drafted = draft_chapter(&blank, &skeleton(), 0, 0);
        assert!(drafted.paragraphs[2].ends_with("Throughout, we honour the brief:    "));
    }

    #[test]
    fn keeps_outline_fields_and_fills_spotlight() {
        let drafted = draft_chapter(&Brief::default(), &skeleton(), 0, 0);
        assert_eq!(drafted.title, "Chapter 1: Foundations");
        assert_eq!(drafted.summary, skeleton().summary);
        // 17 % 4 == 1, 21 % 4 == 1
        assert_eq!(
            drafted.spotlight,
            "Agent Spotlight: Pair a Pattern Archivist with a Momentum Coach to orchestrate \
             this move."
        );
    }

    #[test]
    fn chapter_index_changes_the_picks() {
        let brief = Brief::default();
        let first = draft_chapter(&brief, &skeleton(), 0, 10);
        let second = draft_chapter(&brief, &skeleton(), 1, 10);
        assert_ne!(first.paragraphs, second.paragraphs);
    }
}
