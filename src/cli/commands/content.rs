use anyhow::Result;

use crate::cli::ContentArgs;
use crate::config::{Credentials, RunMode};
use crate::processor::{RunSummary, discover_posts, run_batch};
use crate::translation::TranslationClient;
use crate::ui::Style;

/// Translates every post found under the site root.
///
/// Per-file failures are counted in the returned summary; only setup
/// problems (credentials, unreadable content directories) are errors.
pub async fn run_content(args: &ContentArgs) -> Result<RunSummary> {
    let credentials = Credentials::from_env()?;
    let client = TranslationClient::new(&credentials, RunMode::Batch.request_timeout())?;

    let posts = discover_posts(&args.root)?;
    if posts.is_empty() {
        crate::status!("No markdown files found in content directories");
        return Ok(RunSummary::default());
    }

    crate::status!("Found {} markdown files", posts.len());
    crate::status!("Starting translation process...");
    crate::status!(
        "{} {}",
        Style::label("API Endpoint:"),
        Style::secondary(client.endpoint())
    );
    crate::status!();

    let summary = run_batch(&client, &posts).await;
    print_summary(&summary);

    Ok(summary)
}

fn print_summary(summary: &RunSummary) {
    crate::status!("\n{}", Style::rule());
    crate::status!("{}", Style::header("Translation complete!"));
    crate::status!(
        "{} {}",
        Style::label("Successfully translated:"),
        Style::success(summary.translated)
    );
    crate::status!(
        "{} {}",
        Style::label("Skipped:"),
        Style::secondary(summary.skipped)
    );
    if summary.failed > 0 {
        crate::warn!("{} {}", Style::label("Failed:"), Style::error(summary.failed));
    } else {
        crate::status!("{} {}", Style::label("Failed:"), summary.failed);
    }
    crate::status!("{}", Style::rule());
}
