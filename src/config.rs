use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// Raw key/value shape of the YAML config file. Every key is optional at the
/// parse stage so a missing one can be reported by name.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    threads: Option<usize>,
    timeout: Option<u64>,
    collection_file: Option<String>,
    headers: Option<HashMap<String, String>>,
}

/// Resolved run configuration. Constructed once at startup and passed by
/// reference into the scan engine; immutable for the duration of the scan.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Worker thread count, clamped to at least 1 here and to the collection
    /// size at partition time.
    pub threads: usize,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Path to the target collection file.
    pub collection_file: PathBuf,
    /// Headers sent with every probe.
    pub headers: HashMap<String, String>,
}

impl RunConfig {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let raw: RawConfig = serde_yaml::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;

        let threads = raw.threads.ok_or(Error::MissingParameter("threads"))?;
        let timeout = raw.timeout.ok_or(Error::MissingParameter("timeout"))?;
        let collection_file = raw
            .collection_file
            .ok_or(Error::MissingParameter("collection_file"))?;
        let headers = raw.headers.ok_or(Error::MissingParameter("headers"))?;

        Ok(Self {
            threads: threads.max(1),
            timeout: Duration::from_secs(timeout),
            collection_file: PathBuf::from(collection_file),
            headers,
        })
    }
}
