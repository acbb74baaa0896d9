//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "eslint-configurator",
    version,
    about = "Interactively build an .eslintrc.json",
    long_about = "eslint-configurator: pick ESLint rules and severities interactively and merge them into ./.eslintrc.json.\n\nAn existing .eslintrc.json is used as the starting point; otherwise a built-in default is used. Framework presets (Next.js, React, Vue, Angular) are added from ./package.json dependencies.\n\nTool settings: eslint-configurator.toml|yaml (log_level, color, [prompt].page_size).",
    after_help = "Examples:\n  cd my-app && eslint-configurator"
)]
/// Top-level CLI. The tool takes no options beyond help and version.
pub struct Cli {}
