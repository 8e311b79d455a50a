use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::Task;

/// Snapshot filename inside the data directory
pub const SNAPSHOT_FILE: &str = "tasks.json";

/// Error type for store I/O operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no home directory; pass -C/--data-dir")]
    NoHome,
    #[error("could not read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("could not write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("could not serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not parse config.toml: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result of reading a snapshot
pub struct SnapshotLoad {
    pub tasks: Vec<Task>,
    /// Where an unparsable snapshot was moved, if one was found
    pub salvaged: Option<PathBuf>,
}

/// Read the task snapshot. A missing file yields an empty list. A file that
/// fails to parse is renamed with a `.corrupt` suffix so the bytes survive
/// for manual recovery, and an empty list is returned.
pub fn read(path: &Path) -> Result<SnapshotLoad, StoreError> {
    if !path.exists() {
        return Ok(SnapshotLoad {
            tasks: Vec::new(),
            salvaged: None,
        });
    }
    let content = fs::read_to_string(path).map_err(|e| StoreError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    match serde_json::from_str(&content) {
        Ok(tasks) => Ok(SnapshotLoad {
            tasks,
            salvaged: None,
        }),
        Err(_) => {
            let aside = salvage_path(path);
            fs::rename(path, &aside).map_err(|e| StoreError::Write {
                path: aside.clone(),
                source: e,
            })?;
            Ok(SnapshotLoad {
                tasks: Vec::new(),
                salvaged: Some(aside),
            })
        }
    }
}

fn salvage_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".corrupt");
    path.with_file_name(name)
}

/// Serialize the full list and replace the snapshot file.
pub fn write(path: &Path, tasks: &[Task]) -> Result<(), StoreError> {
    let content = serde_json::to_string_pretty(tasks)?;
    atomic_write(path, content.as_bytes()).map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write to a temp file in the target's directory, then rename over the target.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
