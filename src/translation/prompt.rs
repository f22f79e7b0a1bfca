pub const PROMPT_TEMPLATE: &str = "Translate the following content from {source_language} to {target_language}.
Preserve all markdown formatting, code blocks, and HTML tags exactly as they are.
Only translate the actual text content.

Content to translate:
{text}";

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_prompt(text: &str, source_language: &str, target_language: &str) -> String {
    // Placeholders are substituted textually; `text` goes last so braces in
    // the post body are never mistaken for placeholders.
    PROMPT_TEMPLATE
        .replace("{source_language}", source_language)
        .replace("{target_language}", target_language)
        .replace("{text}", text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt() {
        let prompt = build_prompt("Hello", "English", "Simplified Chinese");
        assert!(prompt.starts_with(
            "Translate the following content from English to Simplified Chinese."
        ));
        assert!(prompt.contains("Preserve all markdown formatting"));
        assert!(prompt.ends_with("Content to translate:\nHello"));
    }

    #[test]
    fn test_braces_in_text_are_left_alone() {
        let prompt = build_prompt(
            "{{< figure src=\"a.png\" >}} {target_language}",
            "English",
            "Simplified Chinese",
        );
        assert!(prompt.ends_with("{{< figure src=\"a.png\" >}} {target_language}"));
    }
}
