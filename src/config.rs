//! Local config store.
//!
//! Two small JSON documents: the global one (`~/.rnplay`) holds the
//! credentials issued by the service; the local one (`./.rnplay.json`)
//! links a working directory to the app it was created for. Both are
//! plain-text on purpose — single-user CLI, no locking, overwrite on save.
//!
//! All functions take the base directory explicitly so tests can point them
//! at a tempdir.

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const GLOBAL_CONFIG_FILE: &str = ".rnplay";
pub const LOCAL_CONFIG_FILE: &str = ".rnplay.json";

/// Credentials issued once by rnplay.org and reused by every other action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    pub token: String,
    pub email: String,
}

impl GlobalConfig {
    /// Pass-through validator: authenticated operations require both fields
    /// to be non-empty before any network or shell call is made.
    pub fn check(self) -> Result<Self> {
        if self.token.trim().is_empty() || self.email.trim().is_empty() {
            return Err(Error::InvalidConfig);
        }
        Ok(self)
    }
}

/// Links the current working copy to a remote app. Re-running `--create`
/// replaces the whole document, it never merges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalConfig {
    #[serde(rename = "urlToken", default, skip_serializing_if = "Option::is_none")]
    pub url_token: Option<String>,
}

pub fn global_config_path(home: &Path) -> PathBuf {
    home.join(GLOBAL_CONFIG_FILE)
}

pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(LOCAL_CONFIG_FILE)
}

pub fn read_global_config(home: &Path) -> Result<GlobalConfig> {
    read_json(&global_config_path(home))
}

pub fn save_global_config(home: &Path, cfg: &GlobalConfig) -> Result<()> {
    write_json(&global_config_path(home), cfg)
}

pub fn read_local_config(dir: &Path) -> Result<LocalConfig> {
    read_json(&local_config_path(dir))
}

pub fn save_local_config(dir: &Path, cfg: &LocalConfig) -> Result<()> {
    write_json(&local_config_path(dir), cfg)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::ConfigMissingOrCorrupt {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| Error::ConfigMissingOrCorrupt {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value).map_err(|e| Error::ConfigMissingOrCorrupt {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    std::fs::write(path, content).map_err(|e| Error::ConfigMissingOrCorrupt {
        path: path.to_path_buf(),
        reason: format!("failed to write: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ── GlobalConfig ─────────────────────────────────────────────────────

    #[test]
    fn test_global_config_save_and_read_roundtrip() {
        let home = TempDir::new().unwrap();
        let cfg = GlobalConfig { token: "t".to_string(), email: "e".to_string() };

        save_global_config(home.path(), &cfg).unwrap();
        let loaded = read_global_config(home.path()).unwrap();

        assert_eq!(loaded, cfg);
    }

    #[test]
    fn test_global_config_save_overwrites() {
        let home = TempDir::new().unwrap();
        let mut cfg = GlobalConfig { token: "old".to_string(), email: "e@x".to_string() };
        save_global_config(home.path(), &cfg).unwrap();

        cfg.token = "new".to_string();
        save_global_config(home.path(), &cfg).unwrap();

        assert_eq!(read_global_config(home.path()).unwrap().token, "new");
    }

    #[test]
    fn test_read_missing_global_config_is_error() {
        let home = TempDir::new().unwrap();
        let result = read_global_config(home.path());
        assert!(matches!(result, Err(Error::ConfigMissingOrCorrupt { .. })));
    }

    #[test]
    fn test_read_corrupt_global_config_is_error() {
        let home = TempDir::new().unwrap();
        std::fs::write(global_config_path(home.path()), "not json {{").unwrap();
        let result = read_global_config(home.path());
        assert!(matches!(result, Err(Error::ConfigMissingOrCorrupt { .. })));
    }

    #[test]
    fn test_saved_global_config_is_pretty_printed() {
        let home = TempDir::new().unwrap();
        let cfg = GlobalConfig { token: "t".to_string(), email: "e".to_string() };
        save_global_config(home.path(), &cfg).unwrap();

        let raw = std::fs::read_to_string(global_config_path(home.path())).unwrap();
        assert!(raw.contains('\n'), "saved JSON should be human-readable");
    }

    #[test]
    fn test_check_rejects_empty_token() {
        let cfg = GlobalConfig { token: "".to_string(), email: "e@x".to_string() };
        assert!(matches!(cfg.check(), Err(Error::InvalidConfig)));
    }

    #[test]
    fn test_check_rejects_empty_email() {
        let cfg = GlobalConfig { token: "t".to_string(), email: "  ".to_string() };
        assert!(matches!(cfg.check(), Err(Error::InvalidConfig)));
    }

    #[test]
    fn test_check_passes_valid_config_through() {
        let cfg = GlobalConfig { token: "t".to_string(), email: "e@x".to_string() };
        let checked = cfg.clone().check().unwrap();
        assert_eq!(checked, cfg);
    }

    // ── LocalConfig ──────────────────────────────────────────────────────

    #[test]
    fn test_local_config_roundtrip() {
        let dir = TempDir::new().unwrap();
        let cfg = LocalConfig { url_token: Some("abc123".to_string()) };

        save_local_config(dir.path(), &cfg).unwrap();
        let loaded = read_local_config(dir.path()).unwrap();

        assert_eq!(loaded.url_token.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_local_config_uses_camel_case_key() {
        let cfg = LocalConfig { url_token: Some("abc".to_string()) };
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains("urlToken"), "key must stay camelCase on disk: {}", json);
    }

    #[test]
    fn test_local_config_without_token_parses() {
        let dir = TempDir::new().unwrap();
        std::fs::write(local_config_path(dir.path()), "{}").unwrap();
        let loaded = read_local_config(dir.path()).unwrap();
        assert_eq!(loaded.url_token, None);
    }

    #[test]
    fn test_read_missing_local_config_is_error() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            read_local_config(dir.path()),
            Err(Error::ConfigMissingOrCorrupt { .. })
        ));
    }
}
