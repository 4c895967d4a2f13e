//! The `check` subcommands: offline diagnostics.

use super::{output, ConfigPathArg};
use crate::config::Config;
use crate::error::Result;

/// Validate a configuration file and report what it resolves to.
pub fn config(args: &ConfigPathArg) -> Result<()> {
    let config = Config::load(&args.config)?;

    output::section("Configuration");
    output::key_value("Logging level", &config.logging.level);
    output::key_value("Logging format", &config.logging.format);
    output::key_value("Target investment", config.solver.target_investment);
    output::ok("configuration is valid");

    Ok(())
}
