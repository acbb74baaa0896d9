//! Interactive selection of rules and severities.
//!
//! Rendering and input sit behind [`Prompter`] so selection logic runs
//! without a terminal in tests. [`TerminalPrompter`] is the `dialoguer`
//! implementation used by the binary.

use crate::catalog;
use crate::error::{ConfiguratorError, Result};
use crate::models::{RuleDescriptor, RuleSettings, Severity};
use dialoguer::{MultiSelect, Select};

pub const RULE_SELECTION_PROMPT: &str = "Select the rules you want to enable:";

/// Capability interface over the interactive terminal.
pub trait Prompter {
    /// Ask for any number of `items`; returns the chosen indices.
    fn multi_select(&mut self, prompt: &str, items: &[String]) -> Result<Vec<usize>>;

    /// Ask for exactly one of `items`, highlighting `default` first.
    fn select(&mut self, prompt: &str, items: &[&str], default: usize) -> Result<usize>;
}

#[derive(Debug, Default)]
pub struct TerminalPrompter {
    page_size: Option<usize>,
}

impl TerminalPrompter {
    pub fn new(page_size: Option<usize>) -> Self {
        Self { page_size }
    }
}

impl Prompter for TerminalPrompter {
    fn multi_select(&mut self, prompt: &str, items: &[String]) -> Result<Vec<usize>> {
        let mut ms = MultiSelect::new().with_prompt(prompt).items(items);
        if let Some(n) = self.page_size {
            ms = ms.max_length(n);
        }
        Ok(ms.interact()?)
    }

    fn select(&mut self, prompt: &str, items: &[&str], default: usize) -> Result<usize> {
        let mut sel = Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default);
        if let Some(n) = self.page_size {
            sel = sel.max_length(n);
        }
        Ok(sel.interact()?)
    }
}

/// Offer every catalog rule; returns the chosen rule names in catalog order.
pub fn collect_rule_selection<P: Prompter + ?Sized>(
    prompter: &mut P,
    rules: &[RuleDescriptor],
) -> Result<Vec<&'static str>> {
    let labels: Vec<String> = rules.iter().map(catalog::choice_label).collect();
    let mut picked = prompter.multi_select(RULE_SELECTION_PROMPT, &labels)?;
    picked.sort_unstable();
    picked.dedup();
    picked
        .into_iter()
        .map(|i| {
            rules.get(i).map(|r| r.name).ok_or_else(|| {
                ConfiguratorError::Prompt(format!("selection index {} out of range", i))
            })
        })
        .collect()
}

/// Ask for one severity per selected rule, one prompt at a time.
pub fn collect_severities<P: Prompter + ?Sized>(
    prompter: &mut P,
    selected: &[&str],
) -> Result<RuleSettings> {
    let choices: Vec<&str> = Severity::ALL.iter().map(|s| s.as_str()).collect();
    let default = Severity::ALL
        .iter()
        .position(|s| *s == Severity::Error)
        .unwrap_or(0);
    let mut settings = RuleSettings::new();
    for name in selected {
        let prompt = format!("Set severity for rule: {}", name);
        let idx = prompter.select(&prompt, &choices, default)?;
        let severity = Severity::ALL.get(idx).copied().ok_or_else(|| {
            ConfiguratorError::Prompt(format!("severity index {} out of range", idx))
        })?;
        settings.set(*name, severity);
    }
    Ok(settings)
}
