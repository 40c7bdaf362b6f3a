//! XVM expected tank values: parsing, download and the on-disk cache.
//!
//! See <https://modxvm.com/en/wn8-expected-values/>.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use clap::{crate_name, crate_version};
use serde::Deserialize;
use tokio::fs;

use crate::prelude::*;
use crate::wn8::{ExpectedValueTable, VehicleExpectedValue};

pub const DEFAULT_URL: &str = "https://static.modxvm.com/wn8-data-exp/json/wn8exp.json";

#[derive(Deserialize)]
struct Document {
    #[serde(default)]
    header: Header,

    data: Vec<VehicleExpectedValue>,
}

#[derive(Deserialize, Default)]
struct Header {
    #[serde(default)]
    version: Option<String>,
}

/// Parses the `wn8exp.json` document.
pub fn parse(bytes: &[u8]) -> Result<ExpectedValueTable> {
    let document: Document = serde_json::from_slice(bytes).context("could not parse the expected values")?;
    debug!(version = ?document.header.version, n_rows = document.data.len(), "parsed");
    Ok(ExpectedValueTable::new(document.data)?)
}

#[instrument(skip_all, fields(path = ?path))]
pub async fn load_file(path: &Path) -> Result<ExpectedValueTable> {
    let bytes = fs::read(path)
        .await
        .with_context(|| format!("could not read `{}`", path.display()))?;
    parse(&bytes)
}

/// Keeps a local copy of the remote expected values.
pub struct ExpectedValuesLoader {
    client: reqwest::Client,
    url: String,
    path: PathBuf,
}

impl ExpectedValuesLoader {
    pub fn new(url: impl Into<String>, path: impl Into<PathBuf>, timeout: StdDuration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(crate_name!(), "/", crate_version!()))
            .timeout(timeout)
            .gzip(true)
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
            path: path.into(),
        })
    }

    /// Loads the cached copy, refreshing it first when it is older than `max_age`.
    /// A stale copy is still used if the refresh fails.
    #[instrument(skip_all, fields(path = ?self.path))]
    pub async fn load(&self, max_age: StdDuration) -> Result<ExpectedValueTable> {
        let modified_at = match fs::metadata(&self.path).await {
            Ok(metadata) => Some(metadata.modified()?),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => None,
            Err(error) => return Err(error.into()),
        };
        match modified_at {
            Some(modified_at) if is_fresh(modified_at, max_age) => load_file(&self.path).await,
            Some(_) => match self.update().await {
                Ok(table) => Ok(table),
                Err(error) => {
                    warn!("failed to refresh, using the stale copy: {:#}", error);
                    load_file(&self.path).await
                }
            },
            None => self.update().await,
        }
    }

    /// Downloads the expected values and replaces the cached copy.
    #[instrument(skip_all, fields(url = %self.url))]
    pub async fn update(&self) -> Result<ExpectedValueTable> {
        let start_instant = std::time::Instant::now();
        let bytes = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("request has failed")?
            .error_for_status()?
            .bytes()
            .await?;

        // Never replace the cached copy with garbage.
        let table = parse(&bytes)?;

        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let temporary_path = self.path.with_extension("json.tmp");
        fs::write(&temporary_path, &bytes).await?;
        fs::rename(&temporary_path, &self.path).await?;

        info!(n_vehicles = table.len(), elapsed = ?start_instant.elapsed(), "updated");
        Ok(table)
    }
}

fn is_fresh(modified_at: SystemTime, max_age: StdDuration) -> bool {
    match modified_at.elapsed() {
        Ok(age) => age <= max_age,

        // Modified in the future, clocks are off.
        Err(_) => true,
    }
}
