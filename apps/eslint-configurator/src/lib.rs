//! eslint-configurator core library.
//!
//! Collects ESLint rule preferences interactively and writes a merged
//! `.eslintrc.json` for the current project.
//!
//! High-level modules:
//! - `app`: Single-pass driver used by the binary.
//! - `catalog`: Built-in list of selectable rules.
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Tool settings discovery and effective resolution.
//! - `inspect`: Reads `.eslintrc.json` and detects frameworks from `package.json`.
//! - `prompt`: Rule and severity selection behind the `Prompter` trait.
//! - `merge`: Rule overlay and framework preset merging.
//! - `writer`: Persists the merged configuration.
//! - `models`: Rule, severity, framework and configuration models.
//! - `output`: Console messages and colored prefixes.
//! - `logging`: `tracing` subscriber setup.
//! - `error`: Error type shared by all modules.
pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod inspect;
pub mod logging;
pub mod merge;
pub mod models;
pub mod output;
pub mod prompt;
pub mod writer;
