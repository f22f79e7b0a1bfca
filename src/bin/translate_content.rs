use anyhow::Result;
use clap::Parser;

use hugo_translate::cli::ContentArgs;
use hugo_translate::cli::commands::content;
use hugo_translate::output::{self, OutputConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = ContentArgs::parse();
    output::init(OutputConfig::with_quiet(args.quiet));

    let summary = content::run_content(&args).await?;
    if !summary.is_success() {
        std::process::exit(summary.exit_code());
    }

    Ok(())
}
