//! Markdown posts with a leading frontmatter block.
//!
//! A post file looks like
//!
//! ```text
//! ---
//! title: Hello
//! ---
//!
//! Body text.
//! ```
//!
//! YAML (`---`) and TOML (`+++`) frontmatter are both understood. A file with
//! no frontmatter, or with an unterminated block, is all body.

mod metadata;

pub use metadata::{FrontmatterFormat, Metadata};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Frontmatter keys whose values are translated along with the body.
pub const TRANSLATED_FIELDS: [&str; 2] = ["title", "description"];

/// One markdown file split into metadata and body.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub metadata: Option<Metadata>,
    /// Body text, trimmed of surrounding whitespace.
    pub content: String,
}

impl Post {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Failed to parse post: {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

        match split_frontmatter(raw) {
            Some((format, front, body)) => Ok(Self {
                metadata: Some(Metadata::parse(format, front)?),
                content: body.trim().to_string(),
            }),
            None => Ok(Self {
                metadata: None,
                content: raw.trim().to_string(),
            }),
        }
    }

    /// Text of a frontmatter field, if the post has it.
    pub fn field(&self, key: &str) -> Result<Option<String>> {
        self.metadata
            .as_ref()
            .map_or(Ok(None), |metadata| metadata.text(key))
    }

    /// Overwrites a frontmatter field, creating a YAML block if there is none.
    pub fn set_field(&mut self, key: &str, value: String) {
        self.metadata
            .get_or_insert_with(|| Metadata::Yaml(serde_yaml::Mapping::new()))
            .set_text(key, value);
    }

    /// Renders the post back to file contents.
    pub fn to_markdown(&self) -> Result<String> {
        let mut out = String::new();

        if let Some(metadata) = &self.metadata {
            let delimiter = metadata.format().delimiter();
            out.push_str(delimiter);
            out.push('\n');
            out.push_str(&metadata.render()?);
            out.push_str(delimiter);
            out.push_str("\n\n");
        }

        out.push_str(&self.content);
        out.push('\n');
        Ok(out)
    }
}

/// Splits `raw` into (format, frontmatter source, remainder).
fn split_frontmatter(raw: &str) -> Option<(FrontmatterFormat, &str, &str)> {
    let (first, rest) = raw.split_once('\n')?;
    let format = FrontmatterFormat::from_delimiter(first.trim_end())?;
    let delimiter = format.delimiter();

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == delimiter {
            return Some((format, &rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const YAML_POST: &str = "---\ntitle: \"Hello\"\ndescription: A greeting\ndate: 2024-05-01\ntags:\n  - intro\n  - hugo\ndraft: false\n---\n\nWorld\n\n## Section\n\nMore text.\n";

    #[test]
    fn test_parse_yaml_post() {
        let post = Post::parse(YAML_POST).unwrap();

        assert_eq!(post.field("title").unwrap(), Some("Hello".to_string()));
        assert_eq!(
            post.field("description").unwrap(),
            Some("A greeting".to_string())
        );
        assert_eq!(post.content, "World\n\n## Section\n\nMore text.");
        assert_eq!(
            post.metadata.as_ref().unwrap().format(),
            FrontmatterFormat::Yaml
        );
    }

    #[test]
    fn test_parse_toml_post() {
        let raw = "+++\ntitle = \"Hello\"\nweight = 10\n+++\nWorld\n";
        let post = Post::parse(raw).unwrap();

        assert_eq!(post.field("title").unwrap(), Some("Hello".to_string()));
        assert_eq!(post.content, "World");
        assert_eq!(
            post.metadata.as_ref().unwrap().format(),
            FrontmatterFormat::Toml
        );
    }

    #[test]
    fn test_parse_without_frontmatter() {
        let post = Post::parse("# Just a heading\n\nText\n").unwrap();
        assert!(post.metadata.is_none());
        assert_eq!(post.field("title").unwrap(), None);
        assert_eq!(post.content, "# Just a heading\n\nText");
    }

    #[test]
    fn test_unterminated_frontmatter_is_body() {
        let post = Post::parse("---\ntitle: Hello\nno closing line\n").unwrap();
        assert!(post.metadata.is_none());
        assert!(post.content.starts_with("---"));
    }

    #[test]
    fn test_parse_crlf_and_bom() {
        let raw = "\u{feff}---\r\ntitle: Hello\r\n---\r\nBody\r\n";
        let post = Post::parse(raw).unwrap();
        assert_eq!(post.field("title").unwrap(), Some("Hello".to_string()));
        assert_eq!(post.content, "Body");
    }

    #[test]
    fn test_horizontal_rule_in_body_is_kept() {
        let raw = "---\ntitle: Hello\n---\nAbove\n\n---\n\nBelow\n";
        let post = Post::parse(raw).unwrap();
        assert_eq!(post.content, "Above\n\n---\n\nBelow");
    }

    #[test]
    fn test_round_trip_preserves_metadata_and_body() {
        let post = Post::parse(YAML_POST).unwrap();
        let reparsed = Post::parse(&post.to_markdown().unwrap()).unwrap();
        assert_eq!(reparsed, post);
    }

    #[test]
    fn test_round_trip_toml() {
        let raw = "+++\ntitle = \"Hello\"\ndate = 2024-05-01T10:00:00Z\n\n[params]\nauthor = \"me\"\n+++\n\nWorld\n";
        let post = Post::parse(raw).unwrap();
        let reparsed = Post::parse(&post.to_markdown().unwrap()).unwrap();
        assert_eq!(reparsed, post);
    }

    #[test]
    fn test_round_trip_after_translation_keeps_other_keys() {
        let mut post = Post::parse(YAML_POST).unwrap();
        post.set_field("title", "你好".to_string());
        post.content = "世界".to_string();

        let reparsed = Post::parse(&post.to_markdown().unwrap()).unwrap();
        let original = Post::parse(YAML_POST).unwrap();
        let (Some(Metadata::Yaml(before)), Some(Metadata::Yaml(after))) =
            (original.metadata, reparsed.metadata)
        else {
            panic!("expected YAML frontmatter");
        };

        for (key, value) in &before {
            if key.as_str() == Some("title") {
                continue;
            }
            assert_eq!(after.get(key), Some(value));
        }
        assert_eq!(after.get("title").and_then(|v| v.as_str()), Some("你好"));
        assert_eq!(reparsed.content, "世界");
    }

    #[test]
    fn test_to_markdown_layout() {
        let post = Post::parse("---\ntitle: Hello\n---\nWorld").unwrap();
        assert_eq!(post.to_markdown().unwrap(), "---\ntitle: Hello\n---\n\nWorld\n");
    }

    #[test]
    fn test_to_markdown_without_frontmatter() {
        let post = Post::parse("World").unwrap();
        assert_eq!(post.to_markdown().unwrap(), "World\n");
    }

    #[test]
    fn test_set_field_creates_frontmatter() {
        let mut post = Post::parse("World").unwrap();
        post.set_field("title", "Hello".to_string());
        assert_eq!(post.field("title").unwrap(), Some("Hello".to_string()));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = Post::load(&temp_dir.path().join("missing.md")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_load_from_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("hello.md");
        fs::write(&path, YAML_POST).unwrap();

        let post = Post::load(&path).unwrap();
        assert_eq!(post.field("title").unwrap(), Some("Hello".to_string()));
    }
}
