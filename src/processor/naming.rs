//! Output file naming and the translated-variant check.

use std::path::{Path, PathBuf};

use crate::translation::{Language, LanguagePair};

/// Path of the translated variant of `source`.
///
/// `<parent>/<stem><suffix><.ext>`, always in the source's own directory.
pub fn output_path(source: &Path, pair: LanguagePair) -> PathBuf {
    let stem = source.file_stem().unwrap_or_default().to_string_lossy();
    let extension = source
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();
    let file_name = format!("{stem}{}{extension}", pair.output_suffix());

    source
        .parent()
        .map_or_else(|| PathBuf::from(&file_name), |parent| parent.join(&file_name))
}

/// Suffixes that mark a file as a translated variant rather than a source.
pub const TRANSLATED_SUFFIXES: [&str; 2] = [".en", Language::Chinese.file_suffix()];

/// Returns `true` when the file stem ends in a language suffix.
pub fn is_translated_output(path: &Path) -> bool {
    path.file_stem()
        .map(|stem| stem.to_string_lossy())
        .is_some_and(|stem| {
            TRANSLATED_SUFFIXES
                .iter()
                .any(|suffix| stem.ends_with(suffix))
        })
}
