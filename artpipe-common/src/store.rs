//! Atomic JSON persistence for article collections
//!
//! Files hold a pretty-printed JSON array (4-space indent, literal UTF-8,
//! unescaped slashes). Writes go to `<path>.tmp` under an exclusive
//! advisory lock and are then renamed onto `<path>`, so a reader sees
//! either the previous complete file or the new complete file.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{Error, Result};

/// Fields every persisted record must carry as non-empty strings
pub const REQUIRED_FIELDS: [&str; 2] = ["title", "slug"];

/// Read and parse a JSON array of records
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let raw = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<T> = serde_json::from_str(&raw).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Loaded {} record(s) from {}", records.len(), path.display());
    Ok(records)
}

/// Validate and atomically persist records
///
/// Nothing touches the filesystem when validation fails, so an existing
/// file at `path` is left as it was.
pub fn save<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let values = records
        .iter()
        .map(serde_json::to_value)
        .collect::<std::result::Result<Vec<Value>, _>>()
        .map_err(|e| Error::Write {
            path: path.to_path_buf(),
            source: e.into(),
        })?;

    validate(&values)?;

    let mut bytes = to_pretty_json(&values).map_err(|e| Error::Write {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    bytes.push(b'\n');

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if !dir.is_dir() {
            debug!("Creating directory {}", dir.display());
            fs::create_dir_all(dir).map_err(|source| Error::Write {
                path: dir.to_path_buf(),
                source,
            })?;
        }
    }

    let tmp = temp_path(path);
    if let Err(source) = write_locked(&tmp, &bytes) {
        let _ = fs::remove_file(&tmp);
        return Err(Error::Write { path: tmp, source });
    }

    if let Err(source) = fs::rename(&tmp, path) {
        warn!("Rename failed, removing {}", tmp.display());
        let _ = fs::remove_file(&tmp);
        return Err(Error::Rename {
            from: tmp,
            to: path.to_path_buf(),
            source,
        });
    }

    info!("Wrote {} record(s) to {}", records.len(), path.display());
    Ok(())
}

/// Check every record has non-empty `title` and `slug` strings
///
/// Reports the first offending record and the first field it lacks.
pub fn validate(records: &[Value]) -> Result<()> {
    for (index, record) in records.iter().enumerate() {
        for field in REQUIRED_FIELDS {
            let present = record
                .get(field)
                .and_then(Value::as_str)
                .is_some_and(|s| !s.is_empty());
            if !present {
                return Err(Error::Validation { index, field });
            }
        }
    }
    Ok(())
}

/// Serialize with 4-space indentation and no trailing newline
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    Ok(out)
}

/// `<path>.tmp`, next to the destination so the rename stays on one filesystem
pub fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

fn write_locked(tmp: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(tmp)?;
    FileExt::lock_exclusive(&file)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    FileExt::unlock(&file)
}
