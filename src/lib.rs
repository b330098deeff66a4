pub mod app;
pub mod cli;
pub mod data;
pub mod domain;

#[cfg(test)]
pub(crate) mod test_support;

use std::io::{self, Write};

use anyhow::{Context, Result};
use app::{
    settings::ViewSettings,
    snapshot::{render_details, render_report, render_report_list},
    state::DetailsState,
};
use cli::Cli;

/// Loads the feed named on the command line and prints one screen.
pub fn run(cli: &Cli) -> Result<()> {
    cli.validate()?;
    let settings = ViewSettings::from_cli(cli);
    let reports = data::feed::load_feed(&cli.feed)?;

    let output = if cli.list {
        render_report_list(&reports, settings.icon_mode)
    } else if let Some(sol) = cli.sol {
        let report = reports
            .iter()
            .find(|report| report.sol == sol)
            .with_context(|| format!("sol {sol} is not in the feed"))?;
        render_report(report, settings.icon_mode)
    } else {
        let state = DetailsState::with_settings(&reports, &settings);
        render_details(&state, settings.icon_mode, settings.max_points)
            .with_context(|| format!("rendering {} details", state.kind.title()))?
    };

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("writing to stdout failed")?;
    Ok(())
}
