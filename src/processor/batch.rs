use anyhow::{Context, Result};
use glob::MatchOptions;
use std::path::{Path, PathBuf};

use super::file::{AlwaysOverwrite, Translated, process_file};
use super::naming::is_translated_output;
use crate::translation::TranslationClient;
use crate::ui::Style;

/// Where batch mode looks for posts, relative to the site root.
pub const POST_PATTERNS: [&str; 2] = ["content/en/posts/*.md", "content/zh-cn/posts/*.md"];

/// Lists candidate posts under `root`, English directory first.
///
/// Translated variants are included; [`run_batch`] skips them. Hidden files
/// are not.
pub fn discover_posts(root: &Path) -> Result<Vec<PathBuf>> {
    let root = glob::Pattern::escape(&root.to_string_lossy());
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };
    let mut posts = Vec::new();

    for pattern in POST_PATTERNS {
        let full_pattern = format!("{}/{pattern}", root.trim_end_matches('/'));
        let entries = glob::glob_with(&full_pattern, options)
            .with_context(|| format!("Invalid glob pattern: {full_pattern}"))?;
        for entry in entries {
            posts.push(entry.context("Failed to read content directory")?);
        }
    }

    Ok(posts)
}

/// What happened to one candidate file.
#[derive(Debug)]
pub enum FileOutcome {
    Translated(Translated),
    /// The file is itself a translated variant.
    Skipped(PathBuf),
    Failed {
        path: PathBuf,
        error: anyhow::Error,
    },
}

/// Counts accumulated over a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub translated: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Translated(_) => self.translated += 1,
            FileOutcome::Skipped(_) => self.skipped += 1,
            FileOutcome::Failed { .. } => self.failed += 1,
        }
    }

    pub const fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Process exit status for this run.
    pub const fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }
}

/// Handles one candidate file without letting its failure escape.
pub async fn process_entry(client: &TranslationClient, path: &Path) -> FileOutcome {
    if is_translated_output(path) {
        crate::status!(
            "{} Skipping already translated file: {}",
            Style::secondary("⊘"),
            path.display()
        );
        return FileOutcome::Skipped(path.to_path_buf());
    }

    match process_file(client, path, &AlwaysOverwrite).await {
        Ok(translated) => FileOutcome::Translated(translated),
        Err(error) => {
            crate::warn!(
                "{} Error processing {}: {error:#}",
                Style::error("✗"),
                path.display()
            );
            FileOutcome::Failed {
                path: path.to_path_buf(),
                error,
            }
        }
    }
}

/// Translates every path in order, one request at a time.
pub async fn run_batch(client: &TranslationClient, paths: &[PathBuf]) -> RunSummary {
    let mut summary = RunSummary::default();

    for path in paths {
        let outcome = process_entry(client, path).await;
        summary.record(&outcome);
        if !matches!(outcome, FileOutcome::Skipped(_)) {
            crate::status!();
        }
    }

    summary
}
