//! Shared data models for rule selection, framework detection and the
//! generated ESLint configuration.

pub mod eslintrc;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use eslintrc::LintConfiguration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A catalog entry offered in the rule selection prompt.
pub struct RuleDescriptor {
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// ESLint rule severity as written to `rules`.
pub enum Severity {
    Off,
    Warn,
    Error,
}

impl Severity {
    /// Choices in prompt order.
    pub const ALL: [Severity; 3] = [Severity::Off, Severity::Warn, Severity::Error];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Off => "off",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Front-end framework detected from `package.json` dependencies.
///
/// `ALL` lists the canonical evaluation order used by the merger.
pub enum FrameworkFlag {
    Next,
    React,
    Vue,
    Angular,
}

impl FrameworkFlag {
    pub const ALL: [FrameworkFlag; 4] = [
        FrameworkFlag::Next,
        FrameworkFlag::React,
        FrameworkFlag::Vue,
        FrameworkFlag::Angular,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FrameworkFlag::Next => "next",
            FrameworkFlag::React => "react",
            FrameworkFlag::Vue => "vue",
            FrameworkFlag::Angular => "angular",
        }
    }
}

impl fmt::Display for FrameworkFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Rule severities chosen during one run, in the order they were asked.
pub struct RuleSettings {
    entries: Vec<(String, Severity)>,
}

impl RuleSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a rule's severity, replacing an earlier value in place.
    pub fn set(&mut self, rule: impl Into<String>, severity: Severity) {
        let rule = rule.into();
        match self.entries.iter_mut().find(|(name, _)| *name == rule) {
            Some(entry) => entry.1 = severity,
            None => self.entries.push((rule, severity)),
        }
    }

    #[cfg(test)]
    pub fn get(&self, rule: &str) -> Option<Severity> {
        self.entries
            .iter()
            .find(|(name, _)| name == rule)
            .map(|(_, sev)| *sev)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Severity)> {
        self.entries.iter().map(|(name, sev)| (name.as_str(), *sev))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
