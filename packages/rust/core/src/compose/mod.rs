//! Content assemblers.
//!
//! Each assembler is a pure function of the brief and a seed. The pipeline
//! hands every assembler its own offset from the brief seed (see
//! [`SeedOffsets`]) so the parts of one ebook draw from different slices of
//! their pools.

mod chapter;
mod editorial;
mod insights;
mod outline;

pub use chapter::{draft_chapter, paragraph_budget};
pub use editorial::{build_hero_hook, craft_action_plan, craft_closing, craft_highlights};
pub use insights::build_insights;
pub use outline::{build_outline, outline_len};

/// Offsets added to the brief seed before each assembler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedOffsets;

impl SeedOffsets {
    pub const INSIGHTS: i64 = 0;
    pub const OUTLINE: i64 = 17;
    pub const CHAPTERS: i64 = 37;
    pub const ACTION_PLAN: i64 = 73;
    pub const CLOSING: i64 = 89;
    pub const HERO_HOOK: i64 = 101;
}

/// Most highlights an ebook carries.
pub const MAX_HIGHLIGHTS: usize = 6;

/// Steps in every action plan.
pub const ACTION_PLAN_STEPS: usize = 5;
