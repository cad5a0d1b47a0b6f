//! `stratactl refresh-units`.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::refresh_units::{RefreshOptions, refresh_units};
use crate::infra::fs::{LocalFs, resolve_path};
use crate::infra::unit_source::HttpUnitSource;

/// Arguments for the refresh-units command.
#[derive(Args)]
pub struct RefreshArgs {
    /// Destination directory (default from settings, `~/.strata/units`)
    #[arg(short = 'p', long = "path")]
    pub path: Option<String>,

    /// Release tag to fetch
    #[arg(short, long)]
    pub tag: Option<String>,

    /// URL template with `{tag}` and `{unit}` placeholders
    #[arg(short, long)]
    pub url: Option<String>,
}

/// Run the refresh-units command.
///
/// # Errors
///
/// Returns the first download or write failure.
pub async fn run(app: &AppContext, args: RefreshArgs) -> Result<()> {
    let units = &app.settings.units;
    let opts = RefreshOptions {
        dir: match args.path {
            Some(path) => resolve_path(&path)?,
            None => app.units_dir()?,
        },
        tag: args.tag.unwrap_or_else(|| units.tag.clone()),
        url_template: args.url.unwrap_or_else(|| units.url.clone()),
    };

    let reporter = app.reporter();
    let written = refresh_units(&HttpUnitSource, &LocalFs, &reporter, &opts).await?;
    app.output
        .success(&format!("{} units written to {}", written.len(), opts.dir.display()));
    Ok(())
}
