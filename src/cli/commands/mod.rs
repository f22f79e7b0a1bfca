//! Entry point implementations.

/// Batch translation of the whole content tree.
pub mod content;

/// Single-file translation with review.
pub mod local;
