//! Application configuration for Ebook Studio.
//!
//! User config lives at `~/.ebookstudio/ebookstudio.toml`.
//! CLI flags override brief files, which override config file values,
//! which override defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StudioError};
use crate::types::{Brief, StageId, Tone};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "ebookstudio.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".ebookstudio";

// ---------------------------------------------------------------------------
// Config structs (matching ebookstudio.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Brief defaults and export location.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Artificial pauses between pipeline stages.
    #[serde(default)]
    pub pacing: PacingConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Directory exported ebooks are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    #[serde(default = "default_author")]
    pub author: String,

    #[serde(default = "default_audience")]
    pub audience: String,

    #[serde(default)]
    pub tone: Tone,

    #[serde(default = "default_chapters")]
    pub chapters: u32,

    #[serde(default = "default_words_per_chapter")]
    pub words_per_chapter: u32,

    #[serde(default = "default_true")]
    pub include_highlights: bool,

    #[serde(default = "default_true")]
    pub include_action_plan: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            author: default_author(),
            audience: default_audience(),
            tone: Tone::default(),
            chapters: default_chapters(),
            words_per_chapter: default_words_per_chapter(),
            include_highlights: true,
            include_action_plan: true,
        }
    }
}

impl DefaultsConfig {
    /// `output_dir` as a path, with a leading `~/` expanded to the home directory.
    pub fn output_path(&self) -> PathBuf {
        match (self.output_dir.strip_prefix("~/"), dirs::home_dir()) {
            (Some(rest), Some(home)) => home.join(rest),
            _ => PathBuf::from(&self.output_dir),
        }
    }
}

fn default_output_dir() -> String {
    ".".into()
}
fn default_author() -> String {
    Brief::default().author
}
fn default_audience() -> String {
    Brief::default().audience
}
fn default_chapters() -> u32 {
    Brief::default().chapters
}
fn default_words_per_chapter() -> u32 {
    Brief::default().words_per_chapter
}
fn default_true() -> bool {
    true
}

/// `[pacing]` section. Millisecond pauses before (`*_lead_ms`) and after
/// (`*_wrap_ms`) each stage's composition step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacingConfig {
    /// When false, stages run back to back.
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_discovery_lead")]
    pub discovery_lead_ms: u64,
    #[serde(default = "default_discovery_wrap")]
    pub discovery_wrap_ms: u64,

    #[serde(default = "default_architecture_lead")]
    pub architecture_lead_ms: u64,
    #[serde(default = "default_architecture_wrap")]
    pub architecture_wrap_ms: u64,

    #[serde(default = "default_weaver_lead")]
    pub weaver_lead_ms: u64,
    #[serde(default = "default_weaver_wrap")]
    pub weaver_wrap_ms: u64,

    #[serde(default)]
    pub editorial_lead_ms: u64,
    #[serde(default = "default_editorial_wrap")]
    pub editorial_wrap_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            discovery_lead_ms: default_discovery_lead(),
            discovery_wrap_ms: default_discovery_wrap(),
            architecture_lead_ms: default_architecture_lead(),
            architecture_wrap_ms: default_architecture_wrap(),
            weaver_lead_ms: default_weaver_lead(),
            weaver_wrap_ms: default_weaver_wrap(),
            editorial_lead_ms: 0,
            editorial_wrap_ms: default_editorial_wrap(),
        }
    }
}

fn default_discovery_lead() -> u64 {
    350
}
fn default_discovery_wrap() -> u64 {
    200
}
fn default_architecture_lead() -> u64 {
    320
}
fn default_architecture_wrap() -> u64 {
    260
}
fn default_weaver_lead() -> u64 {
    340
}
fn default_weaver_wrap() -> u64 {
    200
}
fn default_editorial_wrap() -> u64 {
    260
}

// ---------------------------------------------------------------------------
// Runtime pacing (merged from config + CLI flags)
// ---------------------------------------------------------------------------

/// Pause before and after one stage's composition step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StagePause {
    pub lead: Duration,
    pub wrap: Duration,
}

/// Runtime pacing for all four stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pacing {
    pub discovery: StagePause,
    pub architecture: StagePause,
    pub weaver: StagePause,
    pub editorial: StagePause,
}

impl Pacing {
    /// No pauses at all, for tests and batch runs.
    pub fn instant() -> Self {
        Self::default()
    }

    pub fn for_stage(&self, stage: StageId) -> StagePause {
        match stage {
            StageId::Discovery => self.discovery,
            StageId::Architecture => self.architecture,
            StageId::Weaver => self.weaver,
            StageId::Editorial => self.editorial,
        }
    }
}

impl From<&PacingConfig> for Pacing {
    fn from(config: &PacingConfig) -> Self {
        if !config.enabled {
            return Self::instant();
        }
        let pause = |lead: u64, wrap: u64| StagePause {
            lead: Duration::from_millis(lead),
            wrap: Duration::from_millis(wrap),
        };
        Self {
            discovery: pause(config.discovery_lead_ms, config.discovery_wrap_ms),
            architecture: pause(config.architecture_lead_ms, config.architecture_wrap_ms),
            weaver: pause(config.weaver_lead_ms, config.weaver_wrap_ms),
            editorial: pause(config.editorial_lead_ms, config.editorial_wrap_ms),
        }
    }
}

impl From<&AppConfig> for Pacing {
    fn from(config: &AppConfig) -> Self {
        Self::from(&config.pacing)
    }
}

impl From<&AppConfig> for Brief {
    /// The sample brief with the config's `[defaults]` layered on top.
    fn from(config: &AppConfig) -> Self {
        let defaults = &config.defaults;
        Brief {
            author: defaults.author.clone(),
            audience: defaults.audience.clone(),
            tone: defaults.tone,
            chapters: defaults.chapters,
            words_per_chapter: defaults.words_per_chapter,
            include_highlights: defaults.include_highlights,
            include_action_plan: defaults.include_action_plan,
            ..Brief::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.ebookstudio/`).
pub fn config_dir() -> Result<PathBuf> {
    let home =
        dirs::home_dir().ok_or_else(|| StudioError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.ebookstudio/ebookstudio.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| StudioError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| StudioError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Load a brief from a TOML file, filling gaps from `base`.
pub fn load_brief_from(path: &Path, base: &Brief) -> Result<Brief> {
    let content = std::fs::read_to_string(path).map_err(|e| StudioError::io(path, e))?;

    let overrides: toml::Table = toml::from_str(&content)
        .map_err(|e| StudioError::validation(format!("failed to parse {}: {e}", path.display())))?;

    let mut merged = match toml::Value::try_from(base) {
        Ok(toml::Value::Table(table)) => table,
        Ok(_) => return Err(StudioError::Serialize("brief is not a TOML table".into())),
        Err(e) => return Err(StudioError::Serialize(e.to_string())),
    };
    merged.extend(overrides);

    toml::Value::Table(merged)
        .try_into()
        .map_err(|e| StudioError::validation(format!("invalid brief in {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| StudioError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| StudioError::Serialize(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| StudioError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
