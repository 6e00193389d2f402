//! Ebook export.
//!
//! Writes the rendered Markdown (and optionally the ebook as JSON) into an
//! output directory, named after the title's slug.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::{debug, info, instrument};

use ebookstudio_markdown::{render_markdown, slugify};
use ebookstudio_shared::{Ebook, Result, StudioError};

/// Export settings.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Directory the files are written to (created if missing).
    pub out_dir: PathBuf,
    /// Also write `<slug>.json` with the structured ebook.
    pub include_json: bool,
}

/// Metadata for one written file.
#[derive(Debug, Clone)]
pub struct ExportedFile {
    pub path: PathBuf,
    pub sha256: String,
    pub size_bytes: usize,
}

/// Write the ebook to disk.
///
/// Each file is written atomically (write to temp, then rename), so a
/// crashed export never leaves a half-written document behind.
#[instrument(skip_all, fields(title = %ebook.title, out_dir = %opts.out_dir.display()))]
pub fn export_ebook(ebook: &Ebook, opts: &ExportOptions) -> Result<Vec<ExportedFile>> {
    std::fs::create_dir_all(&opts.out_dir).map_err(|e| StudioError::io(&opts.out_dir, e))?;

    let slug = slugify(&ebook.title);
    let mut files = vec![(format!("{slug}.md"), render_markdown(ebook))];

    if opts.include_json {
        let json = serde_json::to_string_pretty(ebook)
            .map_err(|e| StudioError::Serialize(format!("ebook JSON: {e}")))?;
        files.push((format!("{slug}.json"), json));
    }

    let mut exported = Vec::with_capacity(files.len());
    for (filename, content) in &files {
        exported.push(write_atomic(&opts.out_dir, filename, content)?);
    }

    info!(count = exported.len(), %slug, "ebook exported");

    Ok(exported)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn write_atomic(dir: &Path, filename: &str, content: &str) -> Result<ExportedFile> {
    let target = dir.join(filename);
    let temp = dir.join(format!(".{filename}.tmp"));

    std::fs::write(&temp, content).map_err(|e| StudioError::io(&temp, e))?;
    std::fs::rename(&temp, &target).map_err(|e| StudioError::io(&target, e))?;

    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let sha256 = format!("{:x}", hasher.finalize());

    debug!(file = %filename, size = content.len(), "wrote export file");

    Ok(ExportedFile {
        path: target,
        sha256,
        size_bytes: content.len(),
    })
}
