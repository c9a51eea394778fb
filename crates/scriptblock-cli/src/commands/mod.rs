//! Command dispatch and handler modules.

mod apply;
mod contexts;

use miette::Result;
use scriptblock_core::config::GlobalConfig;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli, config: &GlobalConfig) -> Result<()> {
    match cli.command {
        Command::Apply {
            file,
            context,
            json,
        } => apply::exec(file.as_deref(), &context, json, config),
        Command::Contexts => contexts::exec(),
    }
}
