use crate::{BoardError, BoardResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Reject patches carrying an unknown board type before applying them.
    #[serde(default = "default_true")]
    pub validate_before_apply: bool,
    /// Re-check the patched board before handing it back.
    #[serde(default = "default_true")]
    pub validate_after_apply: bool,
    #[serde(default)]
    pub pretty_output: bool,
    #[serde(default)]
    pub default_modified_by: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            validate_before_apply: true,
            validate_after_apply: true,
            pretty_output: false,
            default_modified_by: None,
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/board/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("board/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("board\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Loads the config from the platform location, falling back to defaults
    /// when the file is missing or unreadable.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                match Self::load_from(&config_path) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Ignoring config at {}: {}", config_path.display(), e)
                    }
                }
            }
        }
        Self::default()
    }

    /// Loads the config from an explicit path, reporting any failure.
    pub fn load_from(path: &Path) -> BoardResult<Self> {
        if !path.exists() {
            return Err(BoardError::NotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| BoardError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.validate_before_apply);
        assert!(config.validate_after_apply);
        assert!(!config.pretty_output);
        assert_eq!(config.default_modified_by, None);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "pretty_output = true\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert!(config.pretty_output);
        assert!(config.validate_before_apply);
        assert!(config.validate_after_apply);
    }

    #[test]
    fn test_load_from_full_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "validate_before_apply = false\nvalidate_after_apply = false\ndefault_modified_by = \"system\"\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert!(!config.validate_before_apply);
        assert!(!config.validate_after_apply);
        assert_eq!(config.default_modified_by.as_deref(), Some("system"));
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempdir().unwrap();
        let result = AppConfig::load_from(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(BoardError::NotFound(_))));
    }

    #[test]
    fn test_load_from_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "pretty_output = [not toml").unwrap();

        let result = AppConfig::load_from(&path);
        assert!(matches!(result, Err(BoardError::Config(_))));
    }
}
