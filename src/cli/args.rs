use clap::Parser;
use std::path::PathBuf;

/// `translate-content`: translate every untranslated post of a Hugo site.
#[derive(Parser, Debug)]
#[command(name = "translate-content")]
#[command(about = "Translate all Hugo posts between English and Chinese")]
#[command(version)]
pub struct ContentArgs {
    /// Site root containing content/en/posts and content/zh-cn/posts
    #[arg(short = 'r', long, default_value = ".")]
    pub root: PathBuf,

    /// Only print warnings and errors
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

/// `translate-local`: translate one post and review the result.
#[derive(Parser, Debug)]
#[command(name = "translate-local")]
#[command(about = "Translate a single Hugo post between English and Chinese")]
#[command(version)]
#[command(after_help = "Examples:\n  \
    translate-local content/en/posts/my-article.md\n  \
    translate-local content/zh-cn/posts/我的文章.md")]
pub struct LocalArgs {
    /// Path to the markdown file to translate
    pub file: PathBuf,

    /// Skip the review step
    #[arg(long)]
    pub no_review: bool,

    /// Only print warnings and errors
    #[arg(short = 'q', long)]
    pub quiet: bool,
}
