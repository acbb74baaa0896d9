//! Single-pass driver: inspect, prompt, merge, write.

use crate::catalog;
use crate::error::{ConfiguratorError, Result};
use crate::inspect;
use crate::merge;
use crate::output;
use crate::prompt::{self, Prompter};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user picked no rules; nothing was written.
    NoRulesSelected,
    /// Configuration written to this absolute path.
    Saved(PathBuf),
}

/// Run the configurator against `root`, printing progress to `out`.
///
/// Input files are read before the first prompt so a malformed file aborts
/// without asking anything. The configuration file is written at most once,
/// as the last step.
pub fn run<P, W>(root: &Path, prompter: &mut P, out: &mut W) -> Result<Outcome>
where
    P: Prompter + ?Sized,
    W: Write + ?Sized,
{
    output::print_banner(out).map_err(ConfiguratorError::Output)?;

    let existing = inspect::load_existing_configuration(root)?;
    let frameworks = inspect::detect_frameworks(root)?;

    let selected = prompt::collect_rule_selection(prompter, catalog::rules())?;
    if selected.is_empty() {
        output::print_no_selection(out).map_err(ConfiguratorError::Output)?;
        return Ok(Outcome::NoRulesSelected);
    }
    let settings = prompt::collect_severities(prompter, &selected)?;
    debug!(rules = settings.len(), "collected rule severities");

    let config = merge::merge(existing, &settings, &frameworks);
    let path = crate::writer::persist(root, &config)?;
    output::print_saved(out, &path).map_err(ConfiguratorError::Output)?;
    Ok(Outcome::Saved(path))
}
