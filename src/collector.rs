use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// Load the target collection from a file, one target per line. Input order
/// is preserved and no line is skipped; blank or malformed entries simply
/// fail their probe later.
pub fn load_targets(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(Error::SourceNotFound(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|e| Error::SourceRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut targets = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| Error::SourceRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        targets.push(line);
    }

    log::debug!("[collector] loaded {} targets from {}", targets.len(), path.display());
    Ok(targets)
}
