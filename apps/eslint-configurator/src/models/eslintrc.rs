//! `.eslintrc.json` document model.
//!
//! A loaded file is trusted as-is, so the configuration is kept as an
//! order-preserving JSON object rather than a fixed struct. Unknown keys
//! and their order survive a load/merge/write cycle. Typed accessors cover
//! the fields the merger touches: `extends`, `plugins` and `rules`.

use serde_json::{json, Map, Value as Json};

pub const EXTENDS: &str = "extends";
pub const PLUGINS: &str = "plugins";
pub const RULES: &str = "rules";

#[derive(Debug, Clone, PartialEq)]
pub struct LintConfiguration {
    root: Map<String, Json>,
}

impl Default for LintConfiguration {
    /// Baseline written when the project has no `.eslintrc.json` yet.
    fn default() -> Self {
        let value = json!({
            "env": {
                "browser": true,
                "node": true,
                "es2021": true
            },
            "extends": ["eslint:recommended", "plugin:@typescript-eslint/recommended"],
            "parserOptions": {
                "ecmaVersion": 12,
                "sourceType": "module"
            },
            "rules": {}
        });
        match value {
            Json::Object(root) => Self { root },
            _ => unreachable!("default configuration is an object literal"),
        }
    }
}

impl LintConfiguration {
    pub fn from_map(root: Map<String, Json>) -> Self {
        Self { root }
    }

    pub fn as_map(&self) -> &Map<String, Json> {
        &self.root
    }

    pub fn into_value(self) -> Json {
        Json::Object(self.root)
    }

    /// Current `extends` entries. A bare string counts as a single entry;
    /// a missing or otherwise-typed value counts as none.
    pub fn extends(&self) -> Vec<String> {
        match self.root.get(EXTENDS) {
            Some(Json::String(s)) => vec![s.clone()],
            Some(Json::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn has_extends(&self, entry: &str) -> bool {
        match self.root.get(EXTENDS) {
            Some(Json::String(s)) => s == entry,
            Some(Json::Array(items)) => items.iter().any(|v| v.as_str() == Some(entry)),
            _ => false,
        }
    }

    /// Append entries to the end of `extends`, normalizing it to an array.
    /// Non-string array members already present are kept.
    pub fn append_extends(&mut self, entries: &[String]) {
        if entries.is_empty() {
            return;
        }
        let arr = self.array_field_mut(EXTENDS);
        arr.extend(entries.iter().cloned().map(Json::String));
    }

    pub fn plugins(&self) -> Vec<String> {
        match self.root.get(PLUGINS) {
            Some(Json::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Push a plugin name, creating `plugins` when absent. No membership check.
    pub fn push_plugin(&mut self, plugin: &str) {
        self.array_field_mut(PLUGINS)
            .push(Json::String(plugin.to_string()));
    }

    /// Insert or overwrite one entry of the `rules` object.
    pub fn set_rule(&mut self, rule: &str, value: Json) {
        let slot = self
            .root
            .entry(RULES)
            .or_insert_with(|| Json::Object(Map::new()));
        if !slot.is_object() {
            *slot = Json::Object(Map::new());
        }
        if let Json::Object(rules) = slot {
            rules.insert(rule.to_string(), value);
        }
    }

    pub fn rule(&self, rule: &str) -> Option<&Json> {
        self.root.get(RULES)?.as_object()?.get(rule)
    }

    /// Field as a mutable array. Strings are wrapped, other types replaced.
    fn array_field_mut(&mut self, key: &str) -> &mut Vec<Json> {
        let slot = self
            .root
            .entry(key)
            .or_insert_with(|| Json::Array(Vec::new()));
        let normalized = match slot.take() {
            Json::Array(items) => items,
            Json::String(s) => vec![Json::String(s)],
            _ => Vec::new(),
        };
        *slot = Json::Array(normalized);
        match slot {
            Json::Array(items) => items,
            _ => unreachable!("slot normalized to an array above"),
        }
    }
}
