//! Per-file translation pipeline and the batch driver built on it.

mod batch;
mod file;
mod naming;

pub use batch::{FileOutcome, POST_PATTERNS, RunSummary, discover_posts, process_entry, run_batch};
pub use file::{
    AlwaysOverwrite, AskBeforeOverwrite, OverwriteGuard, Translated, process_file, translate_post,
};
pub use naming::{TRANSLATED_SUFFIXES, is_translated_output, output_path};
