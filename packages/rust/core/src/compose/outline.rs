//! Chapter outline: titled skeletons with a one-line summary each.

use ebookstudio_shared::{Brief, Chapter, MAX_CHAPTERS, MIN_CHAPTERS};

use crate::pool::pick;

const ARCS: [&str; 8] = [
    "Foundations",
    "Systems Choreography",
    "Creative Rituals",
    "Experiments In Motion",
    "Momentum Mechanics",
    "Scaling The Narrative",
    "Signals And Story",
    "Future Horizons",
];

const VERBS: [&str; 8] = [
    "Igniting",
    "Mapping",
    "Designing",
    "Activating",
    "Elevating",
    "Orchestrating",
    "Harmonizing",
    "Amplifying",
];

const THROUGHLINES: [&str; 8] = [
    "agent teaming",
    "feedback choreography",
    "narrative intelligence",
    "experience craft",
    "adaptive strategy",
    "creative autonomy",
    "insight harvesting",
    "domain mastery",
];

/// Spacing between chapter anchors.
const ANCHOR_STRIDE: i64 = 23;

/// Number of chapters an outline will contain for a requested count.
pub fn outline_len(requested: u32) -> usize {
    requested.clamp(MIN_CHAPTERS, MAX_CHAPTERS) as usize
}

/// Build the chapter skeletons. Paragraphs and spotlight stay empty until
/// the chapter is drafted.
pub fn build_outline(brief: &Brief, seed: i64) -> Vec<Chapter> {
    let cadence = brief.tone_profile().cadence;

    (0..outline_len(brief.chapters))
        .map(|index| {
            let anchor = seed + index as i64 * ANCHOR_STRIDE;
            let verb = pick(&VERBS, anchor);
            let arc = pick(&ARCS, anchor + 5);
            let throughline = pick(&THROUGHLINES, anchor + 11);

            Chapter {
                title: format!("Chapter {}: {arc}", index + 1),
                summary: format!(
                    "{verb} {} by weaving {throughline} with {cadence}.",
                    brief.topic
                ),
                paragraphs: Vec::new(),
                spotlight: String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ebookstudio_shared::Tone;

    #[test]
    fn outline_length_is_clamped() {
        for (requested, expected) in [(0, 3), (1, 3), (3, 3), (7, 7), (12, 12), (13, 12), (500, 12)] {
            let brief = Brief {
                chapters: requested,
                ..Brief::default()
            };
            assert_eq!(build_outline(&brief, 42).len(), expected, "requested {requested}");
        }
    }

    #[test]
    fn first_chapter_uses_anchor_offsets() {
        let brief = Brief {
            topic: "testing systems".into(),
            tone: Tone::Practical,
            chapters: 3,
            ..Brief::default()
        };
        let outline = build_outline(&brief, 0);

        // anchor 0: verb 0, arc 5, throughline 11 % 8 == 3
        assert_eq!(outline[0].title, "Chapter 1: Scaling The Narrative");
        assert_eq!(
            outline[0].summary,
            "Igniting testing systems by weaving experience craft with clean structure and \
             actionable breakdowns."
        );
        // anchor 23: verb 23 % 8 == 7, arc 28 % 8 == 4
        assert_eq!(outline[1].title, "Chapter 2: Momentum Mechanics");
        assert!(outline[1].summary.starts_with("Amplifying"));
    }

    #[test]
    fn titles_are_numbered_in_order() {
        let outline = build_outline(&Brief::default(), 1234);
        for (index, chapter) in outline.iter().enumerate() {
            assert!(chapter.title.starts_with(&format!("Chapter {}: ", index + 1)));
            assert!(chapter.paragraphs.is_empty());
        }
    }
}
