pub mod config_io;
pub mod snapshot;
pub mod state;

use std::path::PathBuf;

use snapshot::StoreError;

/// Default data directory name under $HOME
const DATA_DIR_NAME: &str = ".tick";

/// Resolve the data directory: the `-C` override when given, otherwise
/// `~/.tick`. Created if it does not exist.
pub fn resolve_data_dir(override_dir: Option<&str>) -> Result<PathBuf, StoreError> {
    let dir = match override_dir {
        Some(d) => PathBuf::from(d),
        None => {
            let home = std::env::var_os("HOME").ok_or(StoreError::NoHome)?;
            PathBuf::from(home).join(DATA_DIR_NAME)
        }
    };
    if !dir.is_dir() {
        std::fs::create_dir_all(&dir).map_err(|e| StoreError::Write {
            path: dir.clone(),
            source: e,
        })?;
    }
    Ok(dir)
}
