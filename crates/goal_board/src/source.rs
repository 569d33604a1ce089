//! Where the goal CSV comes from: a local file or an HTTP(S) URL.

use anyhow::{Context, Result};
use std::fmt;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Public goal dataset the dashboard was built around.
pub const DEFAULT_SOURCE: &str =
    "https://raw.githubusercontent.com/wiggy88/goaldata/main/allleagues_goals.csv";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Path(PathBuf),
    Url(String),
}

impl Source {
    /// Open the source for reading. URLs are fetched in full, once.
    pub fn open(&self, timeout: Duration) -> Result<Box<dyn Read>> {
        match self {
            Source::Path(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;
                Ok(Box::new(file))
            }
            Source::Url(url) => {
                info!("Fetching {}", url);
                let body = fetch(url, timeout)?;
                info!("Fetched {} bytes", body.len());
                Ok(Box::new(Cursor::new(body)))
            }
        }
    }
}

fn fetch(url: &str, timeout: Duration) -> Result<Vec<u8>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let response = client
        .get(url)
        .send()
        .with_context(|| format!("Failed to fetch {}", url))?
        .error_for_status()
        .with_context(|| format!("Bad response from {}", url))?;

    let body = response.bytes().with_context(|| format!("Failed to read body from {}", url))?;
    Ok(body.to_vec())
}

impl FromStr for Source {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(Source::Url(s.to_string()))
        } else {
            Ok(Source::Path(PathBuf::from(s)))
        }
    }
}

impl Default for Source {
    fn default() -> Self {
        Source::Url(DEFAULT_SOURCE.to_string())
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Source::Path(path) => write!(f, "{}", path.display()),
            Source::Url(url) => f.write_str(url),
        }
    }
}
