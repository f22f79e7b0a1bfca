use anyhow::Result;
use clap::Parser;

use hugo_translate::cli::LocalArgs;
use hugo_translate::cli::commands::local;
use hugo_translate::output::{self, OutputConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = LocalArgs::parse();
    output::init(OutputConfig::with_quiet(args.quiet));

    local::run_local(&args).await
}
