use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

use super::naming::output_path;
use crate::fs::atomic_write;
use crate::post::{Post, TRANSLATED_FIELDS};
use crate::translation::{LanguagePair, TranslationClient, TranslationRequest, detect_language};
use crate::ui::{self, Spinner, Style};

/// Decides what happens when the output file already exists.
pub trait OverwriteGuard {
    /// Returns `true` to replace `path`, `false` to leave it untouched.
    fn allow_overwrite(&self, path: &Path) -> Result<bool>;
}

/// Replaces existing output without asking.
pub struct AlwaysOverwrite;

impl OverwriteGuard for AlwaysOverwrite {
    fn allow_overwrite(&self, _path: &Path) -> Result<bool> {
        Ok(true)
    }
}

/// Asks on the terminal before replacing existing output.
pub struct AskBeforeOverwrite;

impl OverwriteGuard for AskBeforeOverwrite {
    fn allow_overwrite(&self, path: &Path) -> Result<bool> {
        crate::warn!(
            "{} File already exists: {}",
            Style::warning("⚠"),
            Style::path(path.display())
        );
        ui::confirm("Overwrite?")
    }
}

/// Result of translating one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translated {
    pub source: PathBuf,
    pub target: PathBuf,
    pub pair: LanguagePair,
    /// `false` when an existing target was kept.
    pub written: bool,
}

/// Translates the post at `path` and writes it next to the source.
///
/// Nothing is written unless the body and every translated field succeed.
pub async fn process_file(
    client: &TranslationClient,
    path: &Path,
    guard: &dyn OverwriteGuard,
) -> Result<Translated> {
    if !path.exists() {
        bail!("File not found: {}", path.display());
    }

    let mut post = Post::load(path)?;

    let detected = detect_language(&post.content);
    let pair = LanguagePair::from_detected(&detected);

    crate::status!("Detected language: {}", Style::code(&detected));
    crate::status!("Translating {} {}...", Style::path(path.display()), pair);

    translate_post(client, &mut post, pair).await?;

    let target = output_path(path, pair);

    if target.exists() && !guard.allow_overwrite(&target)? {
        crate::status!("{} Cancelled.", Style::error("✗"));
        return Ok(Translated {
            source: path.to_path_buf(),
            target,
            pair,
            written: false,
        });
    }

    atomic_write(&target, &post.to_markdown()?)?;

    crate::status!(
        "{} Created: {}",
        Style::success("✓"),
        Style::path(target.display())
    );

    Ok(Translated {
        source: path.to_path_buf(),
        target,
        pair,
        written: true,
    })
}

/// Replaces the body, then each translated frontmatter field, in place.
pub async fn translate_post(
    client: &TranslationClient,
    post: &mut Post,
    pair: LanguagePair,
) -> Result<()> {
    post.content = translate_text(client, &post.content, pair).await?;

    for key in TRANSLATED_FIELDS {
        let Some(original) = post.field(key)? else {
            continue;
        };
        crate::info!("Translating {key}: {original}");
        let translated = translate_text(client, &original, pair).await?;
        crate::info!("Translated to: {translated}");
        post.set_field(key, translated);
    }

    Ok(())
}

async fn translate_text(
    client: &TranslationClient,
    text: &str,
    pair: LanguagePair,
) -> Result<String> {
    let spinner = Spinner::new("Calling API...");
    let result = client
        .translate(&TranslationRequest::for_pair(text, pair))
        .await;
    spinner.stop();
    result
}
