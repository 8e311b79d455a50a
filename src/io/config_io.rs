use std::fs;
use std::path::Path;

use crate::io::snapshot::StoreError;
use crate::model::Config;

/// Config filename inside the data directory
const CONFIG_FILE: &str = "config.toml";

/// Load config.toml from the data directory. A missing file yields the
/// default config.
pub fn load_config(data_dir: &Path) -> Result<Config, StoreError> {
    let path = data_dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(Config::default());
    }
    let text = fs::read_to_string(&path).map_err(|e| StoreError::Read {
        path: path.clone(),
        source: e,
    })?;
    let config: Config = toml::from_str(&text)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(dir.path()).unwrap();
        assert!(config.ui.show_hints);
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn parses_ui_section() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            r##"
[ui]
show_hints = false

[ui.colors]
background = "#000000"
highlight = "#46B48C"
"##,
        )
        .unwrap();

        let config = load_config(dir.path()).unwrap();
        assert!(!config.ui.show_hints);
        assert_eq!(config.ui.colors.get("background").unwrap(), "#000000");
        assert_eq!(config.ui.colors.get("highlight").unwrap(), "#46B48C");
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[ui\nbroken").unwrap();
        assert!(load_config(dir.path()).is_err());
    }
}
