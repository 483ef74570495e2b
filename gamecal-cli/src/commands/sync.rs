use std::path::PathBuf;

use anyhow::Result;
use owo_colors::OwoColorize;

use gamecal_core::{ics, store};

use crate::config::{Credentials, GlobalConfig};
use crate::render::render_diff;

pub async fn run(output: Option<PathBuf>, verbose: bool) -> Result<()> {
    let config = GlobalConfig::load()?;
    let credentials = Credentials::from_env()?;
    let output = output.unwrap_or_else(|| config.output_path());

    let Some((entries, diff)) = super::fetch_diff(&config, credentials, &output).await? else {
        println!(
            "{}",
            "No releases returned from IGDB. Try adjusting the filters.".yellow()
        );
        return Ok(());
    };

    let content = ics::generate_calendar(&entries, &config.calendar_name);
    store::write_calendar(&output, &content)?;

    println!("{}", render_diff(&diff, verbose));
    println!(
        "\nCalendar saved to {} ({} added, {} updated)",
        output.display(),
        diff.added(),
        diff.updated()
    );

    Ok(())
}
