mod client;
mod detect;
mod language;
mod prompt;

pub use client::{MAX_TOKENS, MODEL, TEMPERATURE, TranslationClient, TranslationRequest};
pub use detect::{FALLBACK_CODE, detect_language};
pub use language::{Language, LanguagePair};
pub use prompt::{PROMPT_TEMPLATE, build_prompt};
