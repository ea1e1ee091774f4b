//! Line-oriented record file
//!
//! Format: one `key:value` record per line, both unsigned integers.
//! Features:
//! - Tolerant parsing (malformed lines are skipped, later duplicates win)
//! - Missing file reads as "no records"
//! - Atomic rewrite (tmp → rename) so a crash never leaves a half-written file

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Records keyed by an integer id
pub type Records = BTreeMap<u32, u64>;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Parse `key:value` lines, skipping anything malformed
pub fn parse_records(text: &str) -> Records {
    let mut records = Records::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let parsed = line
            .split_once(':')
            .and_then(|(k, v)| Some((k.trim().parse().ok()?, v.trim().parse().ok()?)));
        match parsed {
            Some((key, value)) => {
                records.insert(key, value);
            }
            None => log::debug!("Skipping malformed record on line {}: {:?}", line_no + 1, line),
        }
    }
    records
}

/// Render records one per line, ordered by key
pub fn format_records(records: &Records) -> String {
    records
        .iter()
        .map(|(key, value)| format!("{key}:{value}\n"))
        .collect()
}

/// Load all records. A missing file is an empty store, not an error.
/// Invalid UTF-8 only spoils the lines it appears on.
pub fn read_records(path: &Path) -> Result<Records, PersistenceError> {
    match fs::read(path) {
        Ok(bytes) => Ok(parse_records(&String::from_utf8_lossy(&bytes))),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Records::new()),
        Err(source) => Err(PersistenceError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Rewrite the whole file with `records`
pub fn write_records(path: &Path, records: &Records) -> Result<(), PersistenceError> {
    let write_err = |source: io::Error| PersistenceError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, format_records(records)).map_err(write_err)?;
    fs::rename(&tmp, path).map_err(write_err)
}
