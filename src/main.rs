use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tracing::info;

use brand_story_rewrite::content::{SUCCESS_MESSAGE, TARGET_PATH};
use brand_story_rewrite::rewrite_file;

/// Replace the brand story copy in src/components/sections/BrandStorySection.tsx.
///
/// Takes no arguments; the path is resolved against the current directory.
#[derive(Debug, Parser)]
#[command(name = "brand-story-rewrite", version)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    brand_story_rewrite::init_logging();

    let path = Path::new(TARGET_PATH);
    info!("Rewriting {}", path.display());

    let outcome = rewrite_file(path).context("Failed to update brand story")?;
    info!(
        "Done: {} replacement(s), changed: {}",
        outcome.replacements, outcome.changed
    );

    println!("{}", SUCCESS_MESSAGE);
    Ok(())
}
