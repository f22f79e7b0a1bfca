use anyhow::{Context, Result, bail};
use serde_yaml::{Mapping, Value as YamlValue};
use toml::{Table, Value as TomlValue};

/// Frontmatter syntaxes Hugo accepts with a line delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterFormat {
    /// `---` delimited YAML.
    Yaml,
    /// `+++` delimited TOML.
    Toml,
}

impl FrontmatterFormat {
    pub const fn delimiter(self) -> &'static str {
        match self {
            Self::Yaml => "---",
            Self::Toml => "+++",
        }
    }

    pub(crate) fn from_delimiter(line: &str) -> Option<Self> {
        match line {
            "---" => Some(Self::Yaml),
            "+++" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Parsed frontmatter. Key order is kept as written.
#[derive(Debug, Clone, PartialEq)]
pub enum Metadata {
    Yaml(Mapping),
    Toml(Table),
}

impl Metadata {
    pub(crate) fn parse(format: FrontmatterFormat, source: &str) -> Result<Self> {
        match format {
            FrontmatterFormat::Yaml => {
                if source.trim().is_empty() {
                    return Ok(Self::Yaml(Mapping::new()));
                }
                let value: YamlValue =
                    serde_yaml::from_str(source).context("Failed to parse YAML frontmatter")?;
                match value {
                    YamlValue::Mapping(mapping) => Ok(Self::Yaml(mapping)),
                    YamlValue::Null => Ok(Self::Yaml(Mapping::new())),
                    _ => bail!("YAML frontmatter must be a mapping of keys to values"),
                }
            }
            FrontmatterFormat::Toml => toml::from_str::<Table>(source)
                .map(Self::Toml)
                .context("Failed to parse TOML frontmatter"),
        }
    }

    pub const fn format(&self) -> FrontmatterFormat {
        match self {
            Self::Yaml(_) => FrontmatterFormat::Yaml,
            Self::Toml(_) => FrontmatterFormat::Toml,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Yaml(mapping) => mapping.is_empty(),
            Self::Toml(table) => table.is_empty(),
        }
    }

    /// Returns `key` as text.
    ///
    /// Scalars are rendered in their string form and a YAML null reads as
    /// absent. Nested values cannot be translated and are rejected.
    pub fn text(&self, key: &str) -> Result<Option<String>> {
        match self {
            Self::Yaml(mapping) => match mapping.get(key) {
                None | Some(YamlValue::Null) => Ok(None),
                Some(YamlValue::String(s)) => Ok(Some(s.clone())),
                Some(YamlValue::Bool(b)) => Ok(Some(b.to_string())),
                Some(YamlValue::Number(n)) => Ok(Some(n.to_string())),
                Some(_) => bail!("Frontmatter field '{key}' is not a text value"),
            },
            Self::Toml(table) => match table.get(key) {
                None => Ok(None),
                Some(TomlValue::String(s)) => Ok(Some(s.clone())),
                Some(TomlValue::Integer(i)) => Ok(Some(i.to_string())),
                Some(TomlValue::Float(f)) => Ok(Some(f.to_string())),
                Some(TomlValue::Boolean(b)) => Ok(Some(b.to_string())),
                Some(TomlValue::Datetime(d)) => Ok(Some(d.to_string())),
                Some(_) => bail!("Frontmatter field '{key}' is not a text value"),
            },
        }
    }

    /// Sets `key` to a string, keeping its position when it already exists.
    pub fn set_text(&mut self, key: &str, value: String) {
        match self {
            Self::Yaml(mapping) => {
                mapping.insert(YamlValue::String(key.to_string()), YamlValue::String(value));
            }
            Self::Toml(table) => {
                table.insert(key.to_string(), TomlValue::String(value));
            }
        }
    }

    /// Serializes the fields without delimiters, ending in a newline.
    pub(crate) fn render(&self) -> Result<String> {
        if self.is_empty() {
            return Ok(String::new());
        }
        let mut rendered = match self {
            Self::Yaml(mapping) => {
                serde_yaml::to_string(mapping).context("Failed to serialize YAML frontmatter")?
            }
            Self::Toml(table) => {
                toml::to_string(table).context("Failed to serialize TOML frontmatter")?
            }
        };
        if !rendered.ends_with('\n') {
            rendered.push('\n');
        }
        Ok(rendered)
    }
}
