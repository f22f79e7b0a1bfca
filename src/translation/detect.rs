//! Best-effort language detection for post bodies.

use whatlang::Lang;

/// Code returned when the detector has no answer.
pub const FALLBACK_CODE: &str = "en";

/// Returns an ISO 639-1 style code for the dominant language of `text`.
///
/// Never fails: empty input or an inconclusive guess yields [`FALLBACK_CODE`].
/// Mandarin is reported as `zh-cn`; only the `zh` prefix matters downstream.
///
/// Fenced code blocks are ignored unless nothing else is left.
pub fn detect_language(text: &str) -> String {
    let prose = strip_code_fences(text);
    let sample = if prose.trim().is_empty() { text } else { &prose };

    whatlang::detect(sample).map_or_else(
        || FALLBACK_CODE.to_string(),
        |info| iso_code(info.lang()).to_string(),
    )
}

/// Drops lines inside ``` or ~~~ fences, fence lines included.
fn strip_code_fences(text: &str) -> String {
    let mut prose = String::with_capacity(text.len());
    let mut open_fence: Option<&str> = None;

    for line in text.lines() {
        let trimmed = line.trim_start();
        let marker = ["```", "~~~"]
            .into_iter()
            .find(|marker| trimmed.starts_with(*marker));

        match (open_fence, marker) {
            (None, Some(marker)) => open_fence = Some(marker),
            (Some(open), Some(marker)) if open == marker => open_fence = None,
            (None, None) => {
                prose.push_str(line);
                prose.push('\n');
            }
            _ => {}
        }
    }

    prose
}

fn iso_code(lang: Lang) -> &'static str {
    match lang {
        Lang::Cmn => "zh-cn",
        Lang::Eng => "en",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        Lang::Fra => "fr",
        Lang::Deu => "de",
        Lang::Spa => "es",
        Lang::Rus => "ru",
        // whatlang speaks ISO 639-3; the remaining languages keep that code
        other => other.code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_english_prose() {
        let text = "This post walks through setting up a static site with Hugo, \
                    writing your first article and publishing it to the web.";
        assert_eq!(detect_language(text), "en");
    }

    #[test]
    fn test_detects_chinese_prose() {
        let text = "这篇文章介绍了如何使用静态网站生成器搭建个人博客，\
                    并且说明了怎样撰写第一篇文章以及把它发布到网上。";
        assert!(detect_language(text).starts_with("zh"));
    }

    #[test]
    fn test_chinese_post_with_code_block_is_chinese() {
        let text = "这篇文章介绍了如何在命令行程序中读取配置文件，\
                    并且说明了怎样处理缺失的字段。\n\n\
                    ```rust\n\
                    fn main() {\n\
                        let config = std::fs::read_to_string(\"config.toml\").unwrap();\n\
                        let value: toml::Table = config.parse().unwrap();\n\
                        println!(\"{value:?}\");\n\
                    }\n\
                    ```\n\n\
                    下一篇文章会继续讨论错误处理。";
        assert!(detect_language(text).starts_with("zh"));
    }

    #[test]
    fn test_strip_code_fences_keeps_prose() {
        let text = "before\n```sh\necho hi\n```\nmiddle\n~~~\n```\nstill code\n~~~\nafter\n";
        assert_eq!(strip_code_fences(text), "before\nmiddle\nafter\n");
    }

    #[test]
    fn test_code_only_text_still_detected() {
        let text = "```\nThis example walks through setting up a static site with Hugo, \
                    writing your first article and publishing it to the web.\n```";
        assert_eq!(detect_language(text), "en");
    }

    #[test]
    fn test_empty_text_falls_back_to_english() {
        assert_eq!(detect_language(""), FALLBACK_CODE);
    }

    #[test]
    fn test_symbols_only_falls_back_to_english() {
        assert_eq!(detect_language("1234 --- ### ***"), FALLBACK_CODE);
    }
}
