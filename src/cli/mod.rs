//! Command-line interface definitions.

pub mod check;
pub mod output;
pub mod position;
pub mod share;
pub mod solve;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::error::Result;

/// Surestake - stake distribution and settlement for hedged positions.
#[derive(Parser, Debug)]
#[command(name = "surestake")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Distribute stakes for a position and settle every scenario
    Solve(SolveArgs),

    /// Encode or decode shareable position tokens
    #[command(subcommand)]
    Share(ShareCommand),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `surestake share`
#[derive(Subcommand, Debug)]
pub enum ShareCommand {
    /// Encode a position file into a URL-safe token
    Encode(ShareEncodeArgs),
    /// Decode a token back into a position listing
    Decode(ShareDecodeArgs),
}

/// Subcommands for `surestake check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `solve` subcommand.
#[derive(Parser, Debug)]
pub struct SolveArgs {
    /// Path to the position file
    #[arg(short, long, required_unless_present = "odds")]
    pub file: Option<PathBuf>,

    /// Comma-separated back odds instead of a position file; anything
    /// that does not parse as a number counts as "no odd entered"
    #[arg(long, conflicts_with = "file")]
    pub odds: Option<String>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the nominal investment targeted by automatic distribution
    #[arg(long)]
    pub investment: Option<Decimal>,

    /// Emit the result as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Operation label; emits the flattened ledger record as well
    #[arg(long)]
    pub label: Option<String>,
}

/// Arguments for `surestake share encode`.
#[derive(Parser, Debug)]
pub struct ShareEncodeArgs {
    /// Path to the position file
    #[arg(short, long)]
    pub file: PathBuf,

    /// Base URL; prints a full link instead of the bare token
    #[arg(long)]
    pub base: Option<String>,
}

/// Arguments for `surestake share decode`.
#[derive(Parser, Debug)]
pub struct ShareDecodeArgs {
    /// Token produced by `share encode`
    pub token: String,

    /// Emit the decoded snapshot as JSON
    #[arg(long)]
    pub json: bool,
}

/// Dispatch a parsed command line.
pub fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Solve(args) => solve::execute(args),
        Commands::Share(ShareCommand::Encode(args)) => share::encode(args),
        Commands::Share(ShareCommand::Decode(args)) => share::decode(args),
        Commands::Check(CheckCommand::Config(args)) => check::config(args),
    }
}
