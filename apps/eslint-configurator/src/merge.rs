//! Merge rule selections and framework presets into an ESLint configuration.
//!
//! Design notes:
//! - Rules overwrite in place; rules not selected this run are untouched.
//! - A framework preset applies only when its first `extends` entry is absent
//!   from `extends` as it stood before the framework pass. Entries queued by
//!   different presets are not de-duplicated against each other.
//! - Plugins of an applied preset are pushed without checking the existing
//!   `plugins` list, so a plugin declared by hand can end up listed twice.

use crate::models::{FrameworkFlag, LintConfiguration, RuleSettings};
use serde_json::Value as Json;
use tracing::debug;

#[derive(Debug, Clone, Copy)]
/// Entries a detected framework contributes to the configuration.
pub struct FrameworkPreset {
    pub flag: FrameworkFlag,
    pub extends: &'static [&'static str],
    pub plugins: &'static [&'static str],
}

/// Presets in canonical evaluation order.
pub const FRAMEWORK_PRESETS: &[FrameworkPreset] = &[
    FrameworkPreset {
        flag: FrameworkFlag::Next,
        extends: &["next", "next/core-web-vitals"],
        plugins: &[],
    },
    FrameworkPreset {
        flag: FrameworkFlag::React,
        extends: &["plugin:react/recommended"],
        plugins: &["react"],
    },
    FrameworkPreset {
        flag: FrameworkFlag::Vue,
        extends: &["plugin:vue/vue3-recommended"],
        plugins: &["vue"],
    },
    FrameworkPreset {
        flag: FrameworkFlag::Angular,
        extends: &["plugin:@angular-eslint/recommended"],
        plugins: &["@angular-eslint"],
    },
];

/// Produce the final configuration from the loaded one (or the default),
/// this run's rule settings and the detected frameworks.
pub fn merge(
    base: Option<LintConfiguration>,
    settings: &RuleSettings,
    frameworks: &[FrameworkFlag],
) -> LintConfiguration {
    let mut config = base.unwrap_or_default();

    for (rule, severity) in settings.iter() {
        config.set_rule(rule, Json::String(severity.as_str().to_string()));
    }

    let mut queued: Vec<String> = Vec::new();
    for preset in FRAMEWORK_PRESETS {
        if !frameworks.contains(&preset.flag) {
            continue;
        }
        let Some(guard) = preset.extends.first() else {
            continue;
        };
        if config.has_extends(guard) {
            debug!(framework = %preset.flag, "preset already present; skipping");
            continue;
        }
        debug!(framework = %preset.flag, "applying framework preset");
        queued.extend(preset.extends.iter().map(|e| e.to_string()));
        for plugin in preset.plugins {
            config.push_plugin(plugin);
        }
    }
    config.append_extends(&queued);
    config
}
