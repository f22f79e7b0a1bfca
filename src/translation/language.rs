//! The two supported languages and the direction chosen for a post.

use std::fmt;

/// A post language. English is the site default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Chinese,
}

impl Language {
    /// Short code as used in the CLI output (`en`, `zh`).
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Chinese => "zh",
        }
    }

    /// Full name used in the prompt.
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Chinese => "Simplified Chinese",
        }
    }

    /// Filename suffix marking a translated variant in this language.
    ///
    /// English is the default variant and carries no suffix.
    pub const fn file_suffix(self) -> &'static str {
        match self {
            Self::English => "",
            Self::Chinese => ".zh-cn",
        }
    }

    /// Prompt name for a source language code. Unknown codes are English.
    pub fn source_name(code: &str) -> &'static str {
        Self::from_code(code).unwrap_or(Self::English).name()
    }

    /// Prompt name for a target language code. Unknown codes are Chinese.
    pub fn target_name(code: &str) -> &'static str {
        Self::from_code(code).unwrap_or(Self::Chinese).name()
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::English),
            "zh" | "zh-cn" => Some(Self::Chinese),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Translation direction for one post, derived from its detected language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguagePair {
    pub source: Language,
    pub target: Language,
}

impl LanguagePair {
    /// Chinese posts go to English, everything else goes to Chinese.
    pub fn from_detected(code: &str) -> Self {
        if code.starts_with("zh") {
            Self {
                source: Language::Chinese,
                target: Language::English,
            }
        } else {
            Self {
                source: Language::English,
                target: Language::Chinese,
            }
        }
    }

    /// Suffix inserted between the output file's stem and extension.
    pub const fn output_suffix(self) -> &'static str {
        self.target.file_suffix()
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} → {}",
            self.source.code().to_uppercase(),
            self.target.code().to_uppercase()
        )
    }
}
