//! Durable table snapshot
//!
//! Format:
//! ```json
//! {
//!   "format_version": 1,
//!   "written_at": "2026-02-04T11:30:00Z",
//!   "checksum": "crc32:deadbeef",
//!   "tables": { ... }
//! }
//! ```
//!
//! The checksum covers the compact JSON encoding of `tables`. The file is
//! written to a sibling temporary path, fsynced and renamed over the old
//! snapshot, so readers see either the previous or the new table set.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

use super::errors::{StorageError, StorageResult};
use super::tables::Tables;

const FORMAT_VERSION: u8 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotFile {
    format_version: u8,
    written_at: String,
    checksum: String,
    tables: Tables,
}

/// Formats a CRC32 over `data` as `crc32:xxxxxxxx`.
fn checksum(data: &[u8]) -> String {
    let mut hasher = Hasher::new();
    hasher.update(data);
    format!("crc32:{:08x}", hasher.finalize())
}

fn tables_checksum(tables: &Tables) -> StorageResult<String> {
    let bytes = serde_json::to_vec(tables)
        .map_err(|e| StorageError::Corruption(format!("failed to encode tables: {}", e)))?;
    Ok(checksum(&bytes))
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Writes `tables` to `path`, replacing any previous snapshot.
pub fn write_snapshot(path: &Path, tables: &Tables) -> StorageResult<()> {
    let snapshot = SnapshotFile {
        format_version: FORMAT_VERSION,
        written_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        checksum: tables_checksum(tables)?,
        tables: tables.clone(),
    };
    let json = serde_json::to_vec_pretty(&snapshot)
        .map_err(|e| StorageError::Corruption(format!("failed to encode snapshot: {}", e)))?;

    let tmp = temp_path(path);
    let mut file = File::create(&tmp)
        .map_err(|e| StorageError::io(format!("failed to create {}", tmp.display()), e))?;
    file.write_all(&json)
        .map_err(|e| StorageError::io(format!("failed to write {}", tmp.display()), e))?;
    file.sync_all()
        .map_err(|e| StorageError::io(format!("failed to fsync {}", tmp.display()), e))?;
    drop(file);

    fs::rename(&tmp, path).map_err(|e| {
        StorageError::io(format!("failed to move snapshot into {}", path.display()), e)
    })
}

/// Reads and verifies the snapshot at `path`.
///
/// # Errors
///
/// - `NotInitialized` if no snapshot exists
/// - `Corruption` on a malformed file, checksum mismatch or constraint
///   violation among the stored rows
pub fn read_snapshot(path: &Path) -> StorageResult<Tables> {
    let content = match fs::read(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(StorageError::NotInitialized(path.display().to_string()));
        }
        Err(e) => {
            return Err(StorageError::io(format!("failed to read {}", path.display()), e));
        }
    };

    let snapshot: SnapshotFile = serde_json::from_slice(&content)
        .map_err(|e| StorageError::Corruption(format!("malformed snapshot {}: {}", path.display(), e)))?;

    if snapshot.format_version != FORMAT_VERSION {
        return Err(StorageError::Corruption(format!(
            "unsupported snapshot format_version {}",
            snapshot.format_version
        )));
    }

    let actual = tables_checksum(&snapshot.tables)?;
    if actual != snapshot.checksum {
        return Err(StorageError::Corruption(format!(
            "checksum mismatch in {}: expected {}, computed {}",
            path.display(),
            snapshot.checksum,
            actual
        )));
    }

    snapshot
        .tables
        .verify()
        .map_err(|e| StorageError::Corruption(format!("stored rows violate constraints: {}", e)))?;

    Ok(snapshot.tables)
}
