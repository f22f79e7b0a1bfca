use anyhow::Result;

use crate::cli::LocalArgs;
use crate::config::{Credentials, RunMode};
use crate::processor::{AskBeforeOverwrite, Translated, process_file};
use crate::translation::TranslationClient;
use crate::ui::{self, Style};

/// Translates one post, then optionally walks the user through reviewing it.
pub async fn run_local(args: &LocalArgs) -> Result<()> {
    let credentials = Credentials::from_env()?;
    let client = TranslationClient::new(&credentials, RunMode::Local.request_timeout())?;

    crate::status!("\n{}", Style::rule());
    crate::status!(
        "{} {}",
        Style::header("Processing:"),
        Style::path(args.file.display())
    );
    crate::status!("{}\n", Style::rule());

    let translated = process_file(&client, &args.file, &AskBeforeOverwrite).await?;

    crate::status!("\n{}", Style::rule());
    crate::status!("{}", Style::header("Translation complete!"));
    crate::status!(
        "{} {}",
        Style::label("Source:"),
        Style::path(translated.source.display())
    );
    crate::status!(
        "{} {}",
        Style::label("Target:"),
        Style::path(translated.target.display())
    );
    crate::status!("{}\n", Style::rule());

    if !args.no_review {
        review(&translated)?;
    }

    Ok(())
}

fn review(translated: &Translated) -> Result<()> {
    let source = translated.source.display();
    let target = translated.target.display();

    crate::status!("Review the translated file:");
    crate::status!("  {}\n", Style::command(format!("cat {target}")));

    if ui::confirm("Is the translation OK?")? {
        crate::status!("\n{} Ready to commit!", Style::success("✓"));
        crate::status!("  {}", Style::command(format!("git add {source} {target}")));
        crate::status!(
            "  {}",
            Style::command("git commit -m 'Add bilingual article: ...'")
        );
        crate::status!("  {}", Style::command("git push"));
    } else {
        crate::status!(
            "\n{} Please manually review and edit the file:",
            Style::warning("⚠")
        );
        crate::status!("  {}", Style::command(format!("nano {target}")));
        crate::status!(
            "\n{}",
            Style::hint("After editing, you can commit both files.")
        );
    }

    Ok(())
}
