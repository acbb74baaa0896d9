//! eslint-configurator binary entry point.
//! Resolves settings, sets up logging and runs the interactive pass.

use clap::Parser;
use eslint_configurator::app::{self, Outcome};
use eslint_configurator::cli::Cli;
use eslint_configurator::prompt::TerminalPrompter;
use eslint_configurator::{config, logging, output};
use std::io::IsTerminal;
use std::process;
use tracing::debug;

fn main() {
    let _cli = Cli::parse();
    let color_disabled =
        std::env::var_os("NO_COLOR").is_some() || !std::io::stderr().is_terminal();

    let work_dir = match std::env::current_dir() {
        Ok(d) => d,
        Err(e) => {
            output::print_error(&e, !color_disabled);
            process::exit(1);
        }
    };
    let eff = match config::resolve_effective(&work_dir, color_disabled) {
        Ok(eff) => eff,
        Err(e) => {
            output::print_error(&e, !color_disabled);
            process::exit(1);
        }
    };
    if let Err(e) = logging::init_logging(&eff.log_level, eff.color) {
        output::print_error(&e, eff.color);
        process::exit(1);
    }
    if let Some(p) = eff.settings_file.as_ref() {
        debug!(path = %p.display(), "using settings file");
    }

    let mut prompter = TerminalPrompter::new(eff.page_size);
    let mut stdout = std::io::stdout().lock();
    match app::run(&eff.work_dir, &mut prompter, &mut stdout) {
        Ok(Outcome::Saved(_)) | Ok(Outcome::NoRulesSelected) => {}
        Err(e) => {
            debug!("run failed: {:?}", e);
            output::print_error(&e, eff.color);
            process::exit(1);
        }
    }
}
