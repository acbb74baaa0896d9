//! Persist the merged configuration to `.eslintrc.json`.

use crate::error::{ConfiguratorError, Result};
use crate::inspect::eslintrc_path;
use crate::models::LintConfiguration;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Two-space indented JSON, matching the layout ESLint tooling emits.
pub fn render(config: &LintConfiguration) -> Result<String> {
    serde_json::to_string_pretty(config.as_map()).map_err(ConfiguratorError::Serialize)
}

/// Sibling path the new content is staged at before the rename.
fn staging_path(path: &Path) -> PathBuf {
    path.with_extension("json.tmp")
}

/// Write `config` to `<root>/.eslintrc.json`, replacing any existing file,
/// and return the absolute path written.
///
/// The content is written to a staging file and renamed over the target, so
/// a failed write leaves the previous file intact.
pub fn persist(root: &Path, config: &LintConfiguration) -> Result<PathBuf> {
    let path = absolute(&eslintrc_path(root))?;
    let rendered = render(config)?;
    let temp_path = staging_path(&path);

    fs::write(&temp_path, rendered).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        ConfiguratorError::Write {
            path: temp_path.clone(),
            source,
        }
    })?;
    fs::rename(&temp_path, &path).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        ConfiguratorError::Write {
            path: path.clone(),
            source,
        }
    })?;
    info!(path = %path.display(), "wrote ESLint configuration");
    Ok(path)
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|source| ConfiguratorError::Io {
            path: path.to_path_buf(),
            source,
        })
}
