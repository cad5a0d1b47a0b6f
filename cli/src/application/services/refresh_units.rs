//! Application service: download the unit catalog to a local directory.

use std::path::PathBuf;

use anyhow::{Context, Result};
use strata_common::UNIT_NAMES;

use crate::application::ports::{LocalFs, ProgressReporter, UnitSource};

/// Where units come from and where they go.
#[derive(Debug, Clone)]
pub struct RefreshOptions {
    /// Destination directory, already resolved (no leading `~`).
    pub dir: PathBuf,
    /// Release tag substituted for `{tag}`.
    pub tag: String,
    /// URL with `{tag}` and `{unit}` placeholders.
    pub url_template: String,
}

impl RefreshOptions {
    /// Download URL of `unit` at this tag.
    #[must_use]
    pub fn unit_url(&self, unit: &str) -> String {
        self.url_template
            .replace("{tag}", &self.tag)
            .replace("{unit}", unit)
    }
}

/// Fetch every catalog unit and write it to `<dir>/<unit>.service`.
///
/// Units are fetched one at a time in catalog order. The first failure aborts
/// the run; units already written stay on disk.
///
/// # Errors
///
/// Returns the directory creation, fetch, or write failure, naming the unit.
pub async fn refresh_units(
    source: &impl UnitSource,
    fs: &impl LocalFs,
    out: &dyn ProgressReporter,
    opts: &RefreshOptions,
) -> Result<Vec<PathBuf>> {
    fs.create_dir_all(&opts.dir)
        .with_context(|| format!("creating {}", opts.dir.display()))?;

    let mut written = Vec::with_capacity(UNIT_NAMES.len());
    for unit in UNIT_NAMES {
        let url = opts.unit_url(unit);
        tracing::debug!(%url, "fetching unit");
        let body = source
            .fetch(&url)
            .await
            .with_context(|| format!("fetching {unit} from {url}"))?;

        let dest = opts.dir.join(format!("{unit}.service"));
        fs.write(&dest, &body)
            .with_context(|| format!("writing {}", dest.display()))?;
        out.success(&format!("Refreshed {unit} from {}", opts.tag));
        written.push(dest);
    }
    Ok(written)
}
