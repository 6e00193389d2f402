//! End-to-end generation pipeline: brief → discovery → architecture →
//! weaver → editorial → ebook.
//!
//! The four stages run strictly one after another. Each narrates its work
//! into the [`AgentBoard`] and hands a fresh snapshot to the
//! [`ProgressReporter`] after every change.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};

use ebookstudio_shared::{
    AgentStatus, Brief, Ebook, Pacing, Result, RunId, StageId, StudioError,
};

use crate::assembler::{EbookParts, assemble_ebook};
use crate::board::AgentBoard;
use crate::compose::{self, SeedOffsets};
use crate::seed::derive_seed;

/// Result of one successful generation run.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Identifier of this run.
    pub run_id: RunId,
    /// Seed derived from the brief.
    pub seed: i64,
    /// The assembled ebook.
    pub ebook: Arc<Ebook>,
    /// Final state of the agent log.
    pub board: AgentBoard,
    /// When the run finished.
    pub completed_at: DateTime<Utc>,
    /// Total elapsed time, pauses included.
    pub elapsed: Duration,
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter: Send + Sync {
    /// Called with a new snapshot after every status change or note.
    fn log_updated(&self, board: &AgentBoard);
    /// Called when the ebook has been published.
    fn done(&self, result: &GenerateResult);
    /// Called when a run aborts.
    fn failed(&self, message: &str);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn log_updated(&self, _board: &AgentBoard) {}
    fn done(&self, _result: &GenerateResult) {}
    fn failed(&self, _message: &str) {}
}

/// Owns the agent log and the last published ebook across runs.
///
/// `generate` borrows the studio mutably, so runs cannot overlap.
#[derive(Debug, Default)]
pub struct Studio {
    pacing: Pacing,
    board: AgentBoard,
    ebook: Option<Arc<Ebook>>,
    last_error: Option<String>,
}

impl Studio {
    pub fn new(pacing: Pacing) -> Self {
        Self {
            pacing,
            ..Self::default()
        }
    }

    /// Current agent log.
    pub fn board(&self) -> &AgentBoard {
        &self.board
    }

    /// The ebook from the most recent successful run.
    pub fn ebook(&self) -> Option<&Arc<Ebook>> {
        self.ebook.as_ref()
    }

    /// Message from the most recent run, if it failed.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Run the full pipeline for `brief`.
    ///
    /// On failure the remaining stages are skipped, the agent log keeps
    /// whatever state it reached, the previously published ebook stays in
    /// place, and the error comes back as a single [`StudioError::Assembly`].
    #[instrument(skip_all, fields(title = %brief.title, tone = %brief.tone))]
    pub async fn generate(
        &mut self,
        brief: &Brief,
        progress: &dyn ProgressReporter,
    ) -> Result<GenerateResult> {
        let start = Instant::now();
        let run_id = RunId::new();
        let brief = brief.normalized();
        let seed = derive_seed(&brief);

        info!(%run_id, seed, chapters = brief.chapters, "starting generation run");

        self.last_error = None;
        self.publish(AgentBoard::new(), progress);

        let ebook = match self.run_stages(&brief, seed, progress).await {
            Ok(ebook) => Arc::new(ebook),
            Err(err) => {
                let err = if matches!(err, StudioError::Assembly { .. }) {
                    err
                } else {
                    StudioError::assembly(err.to_string())
                };
                let message = err.to_string();
                warn!(%run_id, error = %message, "generation run failed");
                self.last_error = Some(message.clone());
                progress.failed(&message);
                return Err(err);
            }
        };

        self.ebook = Some(Arc::clone(&ebook));

        let result = GenerateResult {
            run_id,
            seed,
            ebook,
            board: self.board.clone(),
            completed_at: Utc::now(),
            elapsed: start.elapsed(),
        };

        progress.done(&result);

        info!(
            run_id = %result.run_id,
            chapters = result.ebook.chapters.len(),
            elapsed_ms = result.elapsed.as_millis(),
            "generation run complete"
        );

        Ok(result)
    }

    async fn run_stages(
        &mut self,
        brief: &Brief,
        seed: i64,
        progress: &dyn ProgressReporter,
    ) -> Result<Ebook> {
        // --- Stage 1: Discovery ---
        let stage = StageId::Discovery;
        self.begin(stage, "Scanning signals, rituals, and use cases across the domain.", progress)
            .await;
        require_topic(brief)?;
        let insights = compose::build_insights(brief, seed + SeedOffsets::INSIGHTS);
        for insight in &insights {
            self.note(stage, format!("• {insight}"), progress);
        }
        self.finish(stage, progress).await;

        // --- Stage 2: Architecture ---
        let stage = StageId::Architecture;
        self.begin(stage, "Metabolizing research into an emotionally-resonant structure.", progress)
            .await;
        let outline = compose::build_outline(brief, seed + SeedOffsets::OUTLINE);
        for (index, chapter) in outline.iter().enumerate() {
            self.note(
                stage,
                format!("{}. {} → {}", index + 1, chapter.title, chapter.summary),
                progress,
            );
        }
        self.finish(stage, progress).await;

        // --- Stage 3: Weaver ---
        let stage = StageId::Weaver;
        self.begin(stage, "Drafting chapters with calibrated pacing and calls to action.", progress)
            .await;
        let chapters: Vec<_> = outline
            .iter()
            .enumerate()
            .map(|(index, chapter)| {
                compose::draft_chapter(brief, chapter, index, seed + SeedOffsets::CHAPTERS)
            })
            .collect();
        for chapter in &chapters {
            self.note(
                stage,
                format!("{} drafted with {} scenes.", chapter.title, chapter.paragraphs.len()),
                progress,
            );
        }
        self.finish(stage, progress).await;

        // --- Stage 4: Editorial ---
        let stage = StageId::Editorial;
        self.begin(stage, "Sculpting highlights, action plans, and a resonant closing.", progress)
            .await;
        let highlights = if brief.include_highlights {
            compose::craft_highlights(&chapters, brief)
        } else {
            Vec::new()
        };
        let action_plan = if brief.include_action_plan {
            compose::craft_action_plan(seed + SeedOffsets::ACTION_PLAN)
        } else {
            Vec::new()
        };
        let closing = compose::craft_closing(seed + SeedOffsets::CLOSING);
        let hero_hook = compose::build_hero_hook(brief, seed + SeedOffsets::HERO_HOOK);
        self.note(
            stage,
            format!(
                "{} highlights and {} action steps composed.",
                highlights.len(),
                action_plan.len()
            ),
            progress,
        );
        self.finish(stage, progress).await;

        Ok(assemble_ebook(
            brief,
            EbookParts {
                chapters,
                highlights,
                action_plan,
                closing,
                hero_hook,
            },
        ))
    }

    /// Mark `stage` working, post its lead-in note, and wait out the lead pause.
    async fn begin(&mut self, stage: StageId, lead_in: &str, progress: &dyn ProgressReporter) {
        debug!(%stage, "stage started");
        let board = self.board.with_status(stage, AgentStatus::Working);
        self.publish(board, progress);
        self.note(stage, lead_in, progress);
        pause(self.pacing.for_stage(stage).lead).await;
    }

    /// Wait out the wrap pause and mark `stage` done.
    async fn finish(&mut self, stage: StageId, progress: &dyn ProgressReporter) {
        pause(self.pacing.for_stage(stage).wrap).await;
        let board = self.board.with_status(stage, AgentStatus::Done);
        self.publish(board, progress);
        debug!(%stage, "stage done");
    }

    fn note(&mut self, stage: StageId, note: impl Into<String>, progress: &dyn ProgressReporter) {
        let board = self.board.with_note(stage, note);
        self.publish(board, progress);
    }

    fn publish(&mut self, board: AgentBoard, progress: &dyn ProgressReporter) {
        self.board = board;
        progress.log_updated(&self.board);
    }
}

/// Artificial pacing between stages. Zero durations skip the timer.
async fn pause(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}

fn require_topic(brief: &Brief) -> Result<()> {
    if brief.topic.trim().is_empty() {
        return Err(StudioError::assembly(
            "a topic is required before discovery can scan for signals",
        ));
    }
    Ok(())
}
