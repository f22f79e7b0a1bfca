//! # hugo-translate
//!
//! Translates Hugo markdown posts between English and Chinese through an
//! OpenAI-compatible chat completion endpoint, keeping frontmatter and
//! markdown/HTML syntax intact.
//!
//! Two binaries share this library:
//!
//! ```bash
//! # Every untranslated post under content/en/posts and content/zh-cn/posts
//! translate-content
//!
//! # One post, with an overwrite prompt and a review step
//! translate-local content/en/posts/my-article.md
//! ```
//!
//! ## Configuration
//!
//! Both read `GEMINI_API_KEY` and `GEMINI_ENDPOINT` from the environment:
//!
//! ```bash
//! export GEMINI_API_KEY="..."
//! export GEMINI_ENDPOINT="https://llm.example.com/v1/chat/completions"
//! ```
//!
//! English posts (`hello.md`) get a Chinese sibling (`hello.zh-cn.md`);
//! Chinese posts are translated to English under their own stem.

/// Command-line interface definitions and handlers.
pub mod cli;

/// Environment credentials and per-mode settings.
pub mod config;

/// File system utilities.
pub mod fs;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// Markdown posts with frontmatter.
pub mod post;

/// Per-file pipeline and batch driver.
pub mod processor;

/// Language detection and the translation client.
pub mod translation;

/// Terminal UI components (spinner, colors, prompts).
pub mod ui;
