//! CLI command definitions, routing, and tracing setup.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::Result;
use ebookstudio_core::board::AgentBoard;
use ebookstudio_core::export::{ExportOptions, export_ebook};
use ebookstudio_core::pipeline::{GenerateResult, ProgressReporter, Studio};
use ebookstudio_shared::{
    AgentStatus, AppConfig, Brief, Pacing, Tone, init_config, load_brief_from, load_config,
};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// Ebook Studio — brief in, ebook out.
#[derive(Parser)]
#[command(
    name = "ebookstudio",
    version,
    about = "Turn a content brief into a multi-chapter ebook through a four-agent pipeline.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Generate an ebook from a brief.
    Generate(GenerateArgs),

    /// List the available tones.
    Tones,

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Brief overrides and output options for `generate`.
#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// TOML file with brief fields; flags below override it.
    #[arg(long)]
    pub brief_file: Option<PathBuf>,

    /// Ebook title.
    #[arg(long)]
    pub title: Option<String>,

    /// Author or studio name.
    #[arg(long)]
    pub author: Option<String>,

    /// Core topic.
    #[arg(long)]
    pub topic: Option<String>,

    /// Who the ebook is for.
    #[arg(long)]
    pub audience: Option<String>,

    /// Voice: visionary, practical, empathetic, or highenergy.
    #[arg(long)]
    pub tone: Option<Tone>,

    /// Number of chapters (clamped to 3..=12).
    #[arg(long)]
    pub chapters: Option<u32>,

    /// Words per chapter (clamped to 200..=1000).
    #[arg(long)]
    pub words: Option<u32>,

    /// Free-text brief woven into every chapter.
    #[arg(long)]
    pub brief: Option<String>,

    /// Leave out the highlights section.
    #[arg(long)]
    pub no_highlights: bool,

    /// Leave out the action plan.
    #[arg(long)]
    pub no_action_plan: bool,

    /// Output directory (defaults to the configured output_dir).
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Print the Markdown to stdout instead of writing files.
    #[arg(long)]
    pub stdout: bool,

    /// Also export the structured ebook as JSON.
    #[arg(long)]
    pub json: bool,

    /// Skip the pacing pauses between stages.
    #[arg(long)]
    pub instant: bool,
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr so `--stdout`
/// output stays clean.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "ebookstudio=warn",
        1 => "ebookstudio=info",
        2 => "ebookstudio=debug",
        _ => "ebookstudio=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate(args) => cmd_generate(args).await,
        Command::Tones => cmd_tones(),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

// ---------------------------------------------------------------------------
// generate
// ---------------------------------------------------------------------------

async fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let config = load_config()?;
    let brief = resolve_brief(&config, &args)?;

    let pacing = if args.instant {
        Pacing::instant()
    } else {
        Pacing::from(&config)
    };

    info!(
        title = %brief.title,
        tone = %brief.tone,
        chapters = brief.chapters,
        "generating ebook"
    );

    let mut studio = Studio::new(pacing);
    let reporter = CliProgress::new();
    let result = match studio.generate(&brief, &reporter).await {
        Ok(result) => result,
        Err(err) => {
            // The board stays where the run stopped.
            eprint!("{}", render_log(studio.board()));
            return Err(err.into());
        }
    };

    let mut summary = render_log(&result.board);

    if args.stdout {
        eprint!("{summary}");
        print!("{}", ebookstudio_markdown::render_markdown(&result.ebook));
        return Ok(());
    }

    let out_dir = args.out.unwrap_or_else(|| config.defaults.output_path());
    let files = export_ebook(
        &result.ebook,
        &ExportOptions {
            out_dir,
            include_json: args.json,
        },
    )?;

    let ebook = &result.ebook;
    writeln!(summary)?;
    writeln!(summary, "  Ebook generated!")?;
    writeln!(summary, "  Run:      {}", result.run_id)?;
    writeln!(summary, "  Title:    {}", ebook.title)?;
    writeln!(summary, "  Author:   {}", ebook.author)?;
    writeln!(summary, "  Chapters: {}", ebook.chapters.len())?;
    writeln!(summary, "  Seed:     {}", result.seed)?;
    for file in &files {
        writeln!(
            summary,
            "  File:     {} ({} bytes, sha256 {})",
            file.path.display(),
            file.size_bytes,
            &file.sha256[..12]
        )?;
    }
    writeln!(
        summary,
        "  Time:     {:.1}s ({})",
        result.elapsed.as_secs_f64(),
        result.completed_at.format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    println!("{summary}");

    Ok(())
}

/// Layer the brief: config defaults, then the brief file, then flags.
fn resolve_brief(config: &AppConfig, args: &GenerateArgs) -> Result<Brief> {
    let base = Brief::from(config);
    let mut brief = match &args.brief_file {
        Some(path) => load_brief_from(path, &base)?,
        None => base,
    };

    if let Some(title) = &args.title {
        brief.title = title.clone();
    }
    if let Some(author) = &args.author {
        brief.author = author.clone();
    }
    if let Some(topic) = &args.topic {
        brief.topic = topic.clone();
    }
    if let Some(audience) = &args.audience {
        brief.audience = audience.clone();
    }
    if let Some(tone) = args.tone {
        brief.tone = tone;
    }
    if let Some(chapters) = args.chapters {
        brief.chapters = chapters;
    }
    if let Some(words) = args.words {
        brief.words_per_chapter = words;
    }
    if let Some(text) = &args.brief {
        brief.brief = text.clone();
    }
    if args.no_highlights {
        brief.include_highlights = false;
    }
    if args.no_action_plan {
        brief.include_action_plan = false;
    }

    Ok(brief.normalized())
}

/// Plain-text rendering of the final agent log.
fn render_log(board: &AgentBoard) -> String {
    let mut out = String::from("\n  Agent log\n");
    for entry in board.entries() {
        let marker = match entry.status {
            AgentStatus::Done => "✓",
            AgentStatus::Working => "…",
            AgentStatus::Queued => "·",
        };
        out.push_str(&format!(
            "\n  {marker} {} [{}]\n    {}\n",
            entry.name,
            entry.status.label(),
            entry.description
        ));
        if entry.notes.is_empty() {
            out.push_str("      Awaiting output…\n");
        }
        for note in &entry.notes {
            out.push_str(&format!("      {note}\n"));
        }
    }
    out
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);
        spinner.set_style(style);
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn log_updated(&self, board: &AgentBoard) {
        if let Some(agent) = board.active() {
            let latest = agent.notes.last().map(String::as_str).unwrap_or("");
            self.spinner.set_message(format!("{}: {latest}", agent.name));
        }
    }

    fn done(&self, _result: &GenerateResult) {
        self.spinner.finish_and_clear();
    }

    fn failed(&self, message: &str) {
        self.spinner.abandon_with_message(format!("✗ {message}"));
    }
}

// ---------------------------------------------------------------------------
// tones / config
// ---------------------------------------------------------------------------

fn cmd_tones() -> Result<()> {
    for tone in Tone::ALL {
        let profile = tone.profile();
        println!("{:<11} {}", tone.key(), profile.label);
        println!("            cadence: {}", profile.cadence);
        println!("            lexicon: {}", profile.lexicon);
    }
    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ebookstudio_core::pipeline::SilentProgress;
    use ebookstudio_shared::StageId;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ebookstudio").chain(args.iter().copied()))
            .expect("parse args")
    }

    fn generate_args(cli: Cli) -> GenerateArgs {
        match cli.command {
            Command::Generate(args) => args,
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn flags_override_config_defaults() {
        let args = generate_args(parse(&[
            "generate",
            "--title",
            "Test",
            "--topic",
            "testing systems",
            "--tone",
            "practical",
            "--chapters",
            "40",
            "--words",
            "200",
            "--no-action-plan",
        ]));
        let brief = resolve_brief(&AppConfig::default(), &args).expect("brief");

        assert_eq!(brief.title, "Test");
        assert_eq!(brief.topic, "testing systems");
        assert_eq!(brief.tone, Tone::Practical);
        assert_eq!(brief.chapters, 12);
        assert_eq!(brief.words_per_chapter, 200);
        assert!(brief.include_highlights);
        assert!(!brief.include_action_plan);
        assert_eq!(brief.author, "Studio Lambda");
    }

    #[test]
    fn unknown_tone_is_rejected() {
        let result = Cli::try_parse_from(["ebookstudio", "generate", "--tone", "loud"]);
        assert!(result.is_err());
    }

    #[test]
    fn brief_file_sits_between_config_and_flags() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("brief.toml");
        std::fs::write(&path, "title = \"From File\"\ntopic = \"file topic\"\n").expect("write");

        let path_arg = path.to_string_lossy().into_owned();
        let args = generate_args(parse(&[
            "generate",
            "--brief-file",
            &path_arg,
            "--topic",
            "flag topic",
        ]));
        let brief = resolve_brief(&AppConfig::default(), &args).expect("brief");

        assert_eq!(brief.title, "From File");
        assert_eq!(brief.topic, "flag topic");
    }

    #[test]
    fn log_rendering_lists_every_agent() {
        let text = render_log(&AgentBoard::new());
        assert!(text.contains("Discovery Strategist [Queued]"));
        assert!(text.contains("Editorial Finisher [Queued]"));
        assert_eq!(text.matches("Awaiting output…").count(), 4);
    }

    #[test]
    fn log_rendering_shows_a_stage_stopped_mid_flight() {
        let lead_in = "Scanning signals, rituals, and use cases across the domain.";
        let board = AgentBoard::new()
            .with_status(StageId::Discovery, AgentStatus::Working)
            .with_note(StageId::Discovery, lead_in);

        let text = render_log(&board);
        assert!(text.contains("Discovery Strategist [In Flight]"));
        assert!(text.contains(lead_in));
        assert!(text.contains("Narrative Architect [Queued]"));
        assert_eq!(text.matches("Awaiting output…").count(), 3);
    }

    #[tokio::test]
    async fn failed_run_leaves_the_log_where_it_stopped() {
        let brief = Brief {
            topic: "   ".into(),
            ..Brief::default()
        };
        let mut studio = Studio::new(Pacing::instant());
        let result = studio.generate(&brief, &SilentProgress).await;
        assert!(result.is_err());

        let text = render_log(studio.board());
        assert!(text.contains("Discovery Strategist [In Flight]"));
        assert!(text.contains("Scanning signals"));
    }
}
