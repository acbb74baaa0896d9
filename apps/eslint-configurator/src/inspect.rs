//! Project inspection: existing `.eslintrc.json` and `package.json`.
//!
//! Both files are optional. A file that exists but is not a JSON object
//! aborts the run before any prompt is shown.

use crate::error::{ConfiguratorError, Result};
use crate::models::{FrameworkFlag, LintConfiguration};
use serde_json::Value as Json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ESLINTRC_FILE: &str = ".eslintrc.json";
pub const MANIFEST_FILE: &str = "package.json";

pub fn eslintrc_path(root: &Path) -> PathBuf {
    root.join(ESLINTRC_FILE)
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    fs::read_to_string(path)
        .map(Some)
        .map_err(|source| ConfiguratorError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Load `.eslintrc.json` from `root` verbatim, or `None` when absent.
pub fn load_existing_configuration(root: &Path) -> Result<Option<LintConfiguration>> {
    let path = eslintrc_path(root);
    let Some(data) = read_optional(&path)? else {
        debug!(path = %path.display(), "no existing ESLint configuration");
        return Ok(None);
    };
    let malformed = |reason: String| ConfiguratorError::MalformedConfiguration {
        path: path.clone(),
        reason,
    };
    match serde_json::from_str::<Json>(&data).map_err(|e| malformed(e.to_string()))? {
        Json::Object(map) => {
            debug!(path = %path.display(), keys = map.len(), "loaded existing ESLint configuration");
            Ok(Some(LintConfiguration::from_map(map)))
        }
        _ => Err(malformed("top-level value is not an object".into())),
    }
}

/// Detect frameworks from `package.json` dependency names, in canonical order.
pub fn detect_frameworks(root: &Path) -> Result<Vec<FrameworkFlag>> {
    let path = root.join(MANIFEST_FILE);
    let Some(data) = read_optional(&path)? else {
        debug!(path = %path.display(), "no manifest; skipping framework detection");
        return Ok(Vec::new());
    };
    let malformed = |reason: String| ConfiguratorError::MalformedManifest {
        path: path.clone(),
        reason,
    };
    let manifest = serde_json::from_str::<Json>(&data).map_err(|e| malformed(e.to_string()))?;
    let Json::Object(manifest) = manifest else {
        return Err(malformed("top-level value is not an object".into()));
    };
    let deps = manifest.get("dependencies").and_then(Json::as_object);
    let has = |name: &str| deps.is_some_and(|d| d.contains_key(name));

    let frameworks: Vec<FrameworkFlag> = FrameworkFlag::ALL
        .into_iter()
        .filter(|flag| match flag {
            FrameworkFlag::Next => has("next"),
            FrameworkFlag::React => has("react") && has("react-dom"),
            FrameworkFlag::Vue => has("vue"),
            FrameworkFlag::Angular => has("@angular/core"),
        })
        .collect();
    debug!(?frameworks, "detected frameworks");
    Ok(frameworks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(root: &Path, name: &str, body: &str) {
        fs::write(root.join(name), body).unwrap();
    }

    #[test]
    fn test_missing_files_are_not_errors() {
        let tmp = tempdir().unwrap();
        assert!(load_existing_configuration(tmp.path()).unwrap().is_none());
        assert!(detect_frameworks(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_existing_configuration_loaded_verbatim() {
        let tmp = tempdir().unwrap();
        write(
            tmp.path(),
            ESLINTRC_FILE,
            r#"{"root": true, "extends": ["eslint:recommended"], "rules": {"eqeqeq": "error"}}"#,
        );
        let cfg = load_existing_configuration(tmp.path()).unwrap().unwrap();
        let keys: Vec<_> = cfg.as_map().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["root", "extends", "rules"]);
        assert_eq!(cfg.rule("eqeqeq"), Some(&serde_json::json!("error")));
    }

    #[test]
    fn test_malformed_configuration_is_fatal() {
        let tmp = tempdir().unwrap();
        write(tmp.path(), ESLINTRC_FILE, "{ not json");
        let err = load_existing_configuration(tmp.path()).unwrap_err();
        assert!(matches!(err, ConfiguratorError::MalformedConfiguration { .. }));

        write(tmp.path(), ESLINTRC_FILE, "[1, 2]");
        let err = load_existing_configuration(tmp.path()).unwrap_err();
        assert!(matches!(err, ConfiguratorError::MalformedConfiguration { .. }));
    }

    #[test]
    fn test_react_requires_react_dom() {
        let tmp = tempdir().unwrap();
        write(
            tmp.path(),
            MANIFEST_FILE,
            r#"{"dependencies": {"react": "^18.0.0", "react-dom": "^18.0.0"}}"#,
        );
        assert_eq!(
            detect_frameworks(tmp.path()).unwrap(),
            vec![FrameworkFlag::React]
        );

        write(tmp.path(), MANIFEST_FILE, r#"{"dependencies": {"react": "^18.0.0"}}"#);
        assert!(detect_frameworks(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_detection_uses_canonical_order_and_ignores_dev_dependencies() {
        let tmp = tempdir().unwrap();
        write(
            tmp.path(),
            MANIFEST_FILE,
            r#"{
  "dependencies": {"@angular/core": "17", "vue": "3", "next": "14", "react": "18", "react-dom": "18"},
  "devDependencies": {"svelte": "4"}
}"#,
        );
        assert_eq!(
            detect_frameworks(tmp.path()).unwrap(),
            vec![
                FrameworkFlag::Next,
                FrameworkFlag::React,
                FrameworkFlag::Vue,
                FrameworkFlag::Angular
            ]
        );
    }

    #[test]
    fn test_manifest_without_dependencies_and_malformed_manifest() {
        let tmp = tempdir().unwrap();
        write(tmp.path(), MANIFEST_FILE, r#"{"name": "app", "dependencies": null}"#);
        assert!(detect_frameworks(tmp.path()).unwrap().is_empty());

        write(tmp.path(), MANIFEST_FILE, "name: app");
        let err = detect_frameworks(tmp.path()).unwrap_err();
        assert!(matches!(err, ConfiguratorError::MalformedManifest { .. }));
    }
}
