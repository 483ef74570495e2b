use std::path::PathBuf;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::{Credentials, GlobalConfig};
use crate::render::render_diff;

pub async fn run(output: Option<PathBuf>, verbose: bool) -> Result<()> {
    let config = GlobalConfig::load()?;
    let credentials = Credentials::from_env()?;
    let output = output.unwrap_or_else(|| config.output_path());

    let Some((_, diff)) = super::fetch_diff(&config, credentials, &output).await? else {
        println!(
            "{}",
            "No releases returned from IGDB. Try adjusting the filters.".yellow()
        );
        return Ok(());
    };

    println!("{}", render_diff(&diff, verbose));

    if !diff.is_unchanged() {
        println!(
            "\n{} to add, {} to update (run `gamecal sync` to write them)",
            diff.added(),
            diff.updated()
        );
    }

    Ok(())
}
