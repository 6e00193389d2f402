//! Core domain types for Ebook Studio: the brief going in, the ebook coming
//! out, and the agent log narrated in between.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StudioError;

/// Fewest chapters an outline may contain.
pub const MIN_CHAPTERS: u32 = 3;
/// Most chapters an outline may contain.
pub const MAX_CHAPTERS: u32 = 12;
/// Smallest accepted words-per-chapter budget.
pub const MIN_WORDS_PER_CHAPTER: u32 = 200;
/// Largest accepted words-per-chapter budget.
pub const MAX_WORDS_PER_CHAPTER: u32 = 1000;

// ---------------------------------------------------------------------------
// RunId
// ---------------------------------------------------------------------------

/// A UUID v7 wrapper identifying one generation run (time-sortable).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(pub Uuid);

impl RunId {
    /// Generate a new time-sortable run identifier.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tone
// ---------------------------------------------------------------------------

/// Display label, cadence, and lexicon for one tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneProfile {
    pub label: &'static str,
    pub cadence: &'static str,
    pub lexicon: &'static str,
}

const VISIONARY: ToneProfile = ToneProfile {
    label: "Visionary",
    cadence: "sweeping narratives and bold contrasts",
    lexicon: "possibility, transformation, long-view strategy",
};

const PRACTICAL: ToneProfile = ToneProfile {
    label: "Practical Strategist",
    cadence: "clean structure and actionable breakdowns",
    lexicon: "frameworks, constraints, execution rhythms",
};

const EMPATHETIC: ToneProfile = ToneProfile {
    label: "Empathetic Guide",
    cadence: "inviting language with reflective pauses",
    lexicon: "human stories, emotional intelligence, belonging",
};

const HIGH_ENERGY: ToneProfile = ToneProfile {
    label: "High-Energy Coach",
    cadence: "punchy sentences and kinetic pacing",
    lexicon: "momentum, acceleration, performance loops",
};

/// The voice an ebook is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Visionary,
    Practical,
    Empathetic,
    #[serde(rename = "highenergy")]
    HighEnergy,
}

impl Tone {
    /// Every tone, in menu order.
    pub const ALL: [Tone; 4] = [
        Tone::Visionary,
        Tone::Practical,
        Tone::Empathetic,
        Tone::HighEnergy,
    ];

    /// Stable key used in briefs, config files, and seed derivation.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Visionary => "visionary",
            Self::Practical => "practical",
            Self::Empathetic => "empathetic",
            Self::HighEnergy => "highenergy",
        }
    }

    pub fn profile(&self) -> &'static ToneProfile {
        match self {
            Self::Visionary => &VISIONARY,
            Self::Practical => &PRACTICAL,
            Self::Empathetic => &EMPATHETIC,
            Self::HighEnergy => &HIGH_ENERGY,
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Tone {
    type Err = StudioError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', '_', ' '], "");
        Tone::ALL
            .into_iter()
            .find(|tone| tone.key() == wanted)
            .ok_or_else(|| {
                StudioError::validation(format!(
                    "unknown tone '{s}': expected visionary, practical, empathetic, or highenergy"
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Brief
// ---------------------------------------------------------------------------

/// The user's content brief. Missing fields in a brief file fall back to
/// the studio's sample brief.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brief {
    pub title: String,
    pub author: String,
    pub topic: String,
    pub audience: String,
    pub tone: Tone,
    pub chapters: u32,
    pub words_per_chapter: u32,
    /// Free-text steer woven into every chapter when non-empty.
    pub brief: String,
    pub include_highlights: bool,
    pub include_action_plan: bool,
}

impl Default for Brief {
    fn default() -> Self {
        Self {
            title: "Agents of Imagination".into(),
            author: "Studio Lambda".into(),
            topic: "building AI-powered creative ecosystems".into(),
            audience: "Product builders, strategists, and indie creators".into(),
            tone: Tone::Visionary,
            chapters: 6,
            words_per_chapter: 420,
            brief: "Show how multi-agent orchestration can accelerate ideation, design, and \
                    storytelling workflows without losing the human voice."
                .into(),
            include_highlights: true,
            include_action_plan: true,
        }
    }
}

impl Brief {
    /// Clamp the numeric fields into their accepted ranges.
    pub fn normalized(&self) -> Brief {
        Brief {
            chapters: self.chapters.clamp(MIN_CHAPTERS, MAX_CHAPTERS),
            words_per_chapter: self
                .words_per_chapter
                .clamp(MIN_WORDS_PER_CHAPTER, MAX_WORDS_PER_CHAPTER),
            ..self.clone()
        }
    }

    pub fn tone_profile(&self) -> &'static ToneProfile {
        self.tone.profile()
    }
}

// ---------------------------------------------------------------------------
// Ebook
// ---------------------------------------------------------------------------

/// One drafted chapter. Order matches the table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub spotlight: String,
}

/// The fully assembled document. A new generation replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ebook {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub theme: String,
    pub audience: String,
    pub positioning: String,
    pub chapters: Vec<Chapter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub action_plan: Vec<String>,
    pub closing: String,
    pub hero_hook: String,
}

// ---------------------------------------------------------------------------
// Agent log
// ---------------------------------------------------------------------------

/// The four pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageId {
    Discovery,
    Architecture,
    Weaver,
    Editorial,
}

impl StageId {
    pub const ALL: [StageId; 4] = [
        StageId::Discovery,
        StageId::Architecture,
        StageId::Weaver,
        StageId::Editorial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Discovery => "discovery",
            Self::Architecture => "architecture",
            Self::Weaver => "weaver",
            Self::Editorial => "editorial",
        }
    }

    /// Display name of the agent narrating this stage.
    pub fn agent_name(&self) -> &'static str {
        match self {
            Self::Discovery => "Discovery Strategist",
            Self::Architecture => "Narrative Architect",
            Self::Weaver => "Prose Weaver",
            Self::Editorial => "Editorial Finisher",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Discovery => {
                "Scans the landscape, extracts trendlines, and assembles raw insight clusters."
            }
            Self::Architecture => {
                "Converts the insight map into a cinematic chapter-by-chapter flow."
            }
            Self::Weaver => "Drafts compelling chapters calibrated to the chosen voice and cadence.",
            Self::Editorial => {
                "Elevates clarity, sculpts highlights, and packages tactical action plans."
            }
        }
    }
}

impl std::fmt::Display for StageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an agent is in its run. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    #[default]
    Queued,
    Working,
    Done,
}

impl AgentStatus {
    /// Badge text shown next to an agent.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Queued => "Queued",
            Self::Working => "In Flight",
            Self::Done => "Complete",
        }
    }
}

/// One agent's row in the progress log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentLogEntry {
    pub id: StageId,
    pub name: String,
    pub description: String,
    pub status: AgentStatus,
    #[serde(default)]
    pub notes: Vec<String>,
}

impl AgentLogEntry {
    /// A fresh, queued entry with no notes.
    pub fn queued(id: StageId) -> Self {
        Self {
            id,
            name: id.agent_name().to_string(),
            description: id.description().to_string(),
            status: AgentStatus::Queued,
            notes: Vec::new(),
        }
    }
}
