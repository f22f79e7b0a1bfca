//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

/// Applies `apply` unless colors are disabled.
fn paint<T: Display>(text: &T, apply: impl FnOnce(&T) -> String) -> String {
    if output::is_no_color() {
        text.to_string()
    } else {
        apply(text)
    }
}

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Style for section headers (e.g., "Translation complete!")
    pub fn header<T: Display>(text: T) -> String {
        paint(&text, |t| format!("{}", t.bold()))
    }

    /// Style for labels (e.g., "Source:", "Target:")
    pub fn label<T: Display>(text: T) -> String {
        paint(&text, |t| format!("{}", t.dimmed()))
    }

    /// Style for file paths
    pub fn path<T: Display>(text: T) -> String {
        paint(&text, |t| format!("{}", t.cyan()))
    }

    /// Style for secondary/supplementary info (e.g., endpoints)
    pub fn secondary<T: Display>(text: T) -> String {
        paint(&text, |t| format!("{}", t.dimmed()))
    }

    /// Style for success messages
    pub fn success<T: Display>(text: T) -> String {
        paint(&text, |t| format!("{}", t.green()))
    }

    /// Style for error messages
    pub fn error<T: Display>(text: T) -> String {
        paint(&text, |t| format!("{}", t.red().bold()))
    }

    /// Style for warning messages
    pub fn warning<T: Display>(text: T) -> String {
        paint(&text, |t| format!("{}", t.yellow()))
    }

    /// Style for language codes
    pub fn code<T: Display>(text: T) -> String {
        paint(&text, |t| format!("{}", t.yellow()))
    }

    /// Style for shell commands the user may run next
    pub fn command<T: Display>(text: T) -> String {
        paint(&text, |t| format!("{}", t.green()))
    }

    /// Style for hints/help text
    pub fn hint<T: Display>(text: T) -> String {
        paint(&text, |t| format!("{}", t.dimmed().italic()))
    }

    /// Horizontal rule framing run headers and summaries
    pub fn rule() -> String {
        "=".repeat(60)
    }
}
