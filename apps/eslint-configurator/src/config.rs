//! Tool settings discovery and effective settings resolution.
//!
//! The configurator reads `eslint-configurator.toml|yaml|yml` from the
//! invocation directory or the closest ancestor (stopping at a `.git`
//! directory). These settings only tune the tool itself; they never change
//! the generated `.eslintrc.json`.
//!
//! Defaults:
//! - `log_level`: `warn`
//! - `color`: auto (disabled when `NO_COLOR` is set or stderr is not a terminal)
//! - `prompt.page_size`: unset (terminal height)
//!
//! Precedence: settings file > defaults.

use crate::error::{ConfiguratorError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const SETTINGS_TOML: &str = "eslint-configurator.toml";
pub const SETTINGS_YAML: [&str; 2] = ["eslint-configurator.yaml", "eslint-configurator.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Prompt section under `[prompt]`.
pub struct PromptCfg {
    pub page_size: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root settings loaded from `eslint-configurator.toml|yaml`.
pub struct Settings {
    pub log_level: Option<String>,
    pub color: Option<bool>,
    #[serde(default)]
    pub prompt: Option<PromptCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved settings used by the binary.
pub struct Effective {
    pub work_dir: PathBuf,
    pub settings_file: Option<PathBuf>,
    pub log_level: String,
    pub color: bool,
    pub page_size: Option<usize>,
}

fn has_settings(dir: &Path) -> bool {
    dir.join(SETTINGS_TOML).exists() || SETTINGS_YAML.iter().any(|n| dir.join(n).exists())
}

/// Walk upward from `start` to the directory holding the settings file.
///
/// Stops at the first directory with a settings file or a `.git` entry;
/// falls back to `start`.
pub fn detect_settings_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if has_settings(cur) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load settings from `root`, if a settings file is present there.
pub fn load_settings(root: &Path) -> Result<Option<(PathBuf, Settings)>> {
    let read = |p: &Path| {
        fs::read_to_string(p).map_err(|source| ConfiguratorError::Io {
            path: p.to_path_buf(),
            source,
        })
    };
    let malformed = |p: &Path, reason: String| ConfiguratorError::MalformedSettings {
        path: p.to_path_buf(),
        reason,
    };

    let toml_path = root.join(SETTINGS_TOML);
    if toml_path.exists() {
        let s = read(&toml_path)?;
        let cfg: Settings =
            toml::from_str(&s).map_err(|e| malformed(&toml_path, e.to_string()))?;
        return Ok(Some((toml_path, cfg)));
    }
    for yml in SETTINGS_YAML {
        let p = root.join(yml);
        if p.exists() {
            let s = read(&p)?;
            // An empty YAML document deserializes as unit, not a map.
            if s.trim().is_empty() {
                return Ok(Some((p, Settings::default())));
            }
            let cfg: Settings = serde_yaml::from_str(&s).map_err(|e| malformed(&p, e.to_string()))?;
            return Ok(Some((p, cfg)));
        }
    }
    Ok(None)
}

/// Resolve `Effective` for `work_dir` from discovered settings and defaults.
pub fn resolve_effective(work_dir: &Path, color_disabled: bool) -> Result<Effective> {
    let root = detect_settings_root(work_dir);
    let (settings_file, cfg) = match load_settings(&root)? {
        Some((p, cfg)) => (Some(p), cfg),
        None => (None, Settings::default()),
    };

    let log_level = cfg
        .log_level
        .filter(|l| !l.trim().is_empty())
        .unwrap_or_else(|| "warn".to_string());
    let color = cfg.color.unwrap_or(!color_disabled);
    let page_size = cfg.prompt.and_then(|p| p.page_size).filter(|n| *n > 0);

    Ok(Effective {
        work_dir: work_dir.to_path_buf(),
        settings_file,
        log_level,
        color,
        page_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_settings_file() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        let eff = resolve_effective(dir.path(), false).unwrap();
        assert!(eff.settings_file.is_none());
        assert_eq!(eff.log_level, "warn");
        assert!(eff.color);
        assert_eq!(eff.page_size, None);

        let eff = resolve_effective(dir.path(), true).unwrap();
        assert!(!eff.color);
    }

    #[test]
    fn test_load_toml_from_ancestor() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join(SETTINGS_TOML)).unwrap();
        writeln!(
            f,
            "{}",
            r#"
log_level = "debug"
color = false
[prompt]
page_size = 8
            "#
        )
        .unwrap();
        let nested = root.join("packages/web");
        fs::create_dir_all(&nested).unwrap();

        let eff = resolve_effective(&nested, false).unwrap();
        assert_eq!(eff.settings_file, Some(root.join(SETTINGS_TOML)));
        assert_eq!(eff.work_dir, nested);
        assert_eq!(eff.log_level, "debug");
        assert!(!eff.color);
        assert_eq!(eff.page_size, Some(8));
    }

    #[test]
    fn test_load_yaml_and_explicit_color_beats_no_color() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("eslint-configurator.yml"),
            "log_level: info\ncolor: true\nprompt:\n  page_size: 0\n",
        )
        .unwrap();
        let eff = resolve_effective(root, true).unwrap();
        assert_eq!(eff.log_level, "info");
        assert!(eff.color);
        // zero page size means "unset"
        assert_eq!(eff.page_size, None);
    }

    #[test]
    fn test_git_dir_stops_discovery() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join(SETTINGS_TOML), "log_level = \"trace\"\n").unwrap();
        let repo = root.join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();
        let eff = resolve_effective(&repo, false).unwrap();
        assert!(eff.settings_file.is_none());
        assert_eq!(eff.log_level, "warn");
    }

    #[test]
    fn test_malformed_settings_are_fatal() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_TOML), "log_level = [").unwrap();
        let err = resolve_effective(dir.path(), false).unwrap_err();
        assert!(matches!(err, ConfiguratorError::MalformedSettings { .. }));
    }
}
