//! `UnitSource` adapter that downloads unit definitions over HTTP.

use std::io::Read;

use anyhow::{Context, Result};

use crate::application::ports::UnitSource;

/// Production `UnitSource`: blocking `ureq` GET on the tokio blocking pool.
pub struct HttpUnitSource;

impl UnitSource for HttpUnitSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let url = url.to_string();
        tokio::task::spawn_blocking(move || fetch_blocking(&url))
            .await
            .context("spawn_blocking for unit fetch")?
    }
}

fn fetch_blocking(url: &str) -> Result<Vec<u8>> {
    let resp = match ureq::get(url).set("User-Agent", "stratactl").call() {
        Ok(resp) => resp,
        Err(ureq::Error::Status(code, resp)) => {
            anyhow::bail!("{code} {}", resp.status_text())
        }
        Err(e) => anyhow::bail!("requesting {url}: {e}"),
    };
    if resp.status() != 200 {
        anyhow::bail!("{} {}", resp.status(), resp.status_text());
    }
    let mut body = Vec::new();
    resp.into_reader()
        .read_to_end(&mut body)
        .context("reading response body")?;
    Ok(body)
}
