//! `package.json` reading.
//!
//! The manifest contributes two optional things: the app name for
//! `--create` (with an interactive prompt as fallback, so loading is
//! best-effort) and the split configuration under `"rnplay" → "split"`,
//! a map of sub-project name to source directory:
//!
//! ```json
//! {
//!   "name": "demo",
//!   "rnplay": { "split": { "ios-demo": "./ios", "android-demo": "./android" } }
//! }
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

pub const MANIFEST_FILE: &str = "package.json";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    rnplay: Option<RnplaySection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RnplaySection {
    #[serde(default)]
    split: BTreeMap<String, String>,
}

impl Manifest {
    /// Sub-project name → source directory, in deterministic (sorted) order.
    pub fn split_entries(&self) -> BTreeMap<String, String> {
        self.rnplay.as_ref().map(|s| s.split.clone()).unwrap_or_default()
    }
}

/// Best-effort load: `None` when the manifest is absent or not valid JSON.
pub fn load(dir: &Path) -> Option<Manifest> {
    let content = std::fs::read_to_string(dir.join(MANIFEST_FILE)).ok()?;
    serde_json::from_str(&content).ok()
}

/// The manifest-declared package name, if there is one.
pub fn package_name(dir: &Path) -> Option<String> {
    load(dir)?.name.filter(|n| !n.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_manifest(dir: &Path, json: &str) {
        std::fs::write(dir.join(MANIFEST_FILE), json).unwrap();
    }

    #[test]
    fn test_package_name_from_manifest() {
        let dir = TempDir::new().unwrap();
        write_manifest(dir.path(), r#"{"name": "demo"}"#);
        assert_eq!(package_name(dir.path()).as_deref(), Some("demo"));
    }

    #[test]
    fn test_missing_manifest_yields_none() {
        let dir = TempDir::new().unwrap();
        assert!(load(dir.path()).is_none());
        assert!(package_name(dir.path()).is_none());
    }

    #[test]
    fn test_unparseable_manifest_yields_none() {
        let dir = TempDir::new().unwrap();
        write_manifest(dir.path(), "{ nope");
        assert!(load(dir.path()).is_none());
    }

    #[test]
    fn test_empty_name_is_treated_as_absent() {
        let dir = TempDir::new().unwrap();
        write_manifest(dir.path(), r#"{"name": ""}"#);
        assert!(package_name(dir.path()).is_none());
    }

    #[test]
    fn test_split_entries_parsed_in_sorted_order() {
        let dir = TempDir::new().unwrap();
        write_manifest(
            dir.path(),
            r#"{"name":"demo","rnplay":{"split":{"zeta":"./z","alpha":"./a"}}}"#,
        );
        let manifest = load(dir.path()).unwrap();
        let entries: Vec<(String, String)> = manifest.split_entries().into_iter().collect();
        assert_eq!(
            entries,
            vec![
                ("alpha".to_string(), "./a".to_string()),
                ("zeta".to_string(), "./z".to_string()),
            ]
        );
    }

    #[test]
    fn test_manifest_without_rnplay_section_has_no_entries() {
        let dir = TempDir::new().unwrap();
        write_manifest(dir.path(), r#"{"name":"demo"}"#);
        assert!(load(dir.path()).unwrap().split_entries().is_empty());
    }
}
