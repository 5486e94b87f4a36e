//! Command-line interface for `kamel`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use anyhow::Result;
use clap::builder::NonEmptyStringValueParser;
use clap::{ArgGroup, Args, Parser, Subcommand};
use kamel_settings::{Folder, ResolveContext};
use std::io::Write;

use crate::logging;

/// `kamel` - Camel K command-line client.
#[derive(Parser, Debug)]
#[command(name = "kamel")]
#[command(author, version, about = "Camel K command-line client", long_about = None)]
pub struct Cli {
    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configure the default settings
    Config(ConfigArgs),

    /// Show the namespace Camel K would be installed into
    Install(InstallArgs),
}

#[derive(Args, Debug, Default)]
#[command(group(
    ArgGroup::new("action")
        .required(true)
        .multiple(true)
        .args(["default_namespace", "list"])
))]
pub struct ConfigArgs {
    /// Sets the default namespace for all the commands
    #[arg(long, value_name = "NAMESPACE", value_parser = NonEmptyStringValueParser::new())]
    pub default_namespace: Option<String>,

    /// List all existing settings
    #[arg(long)]
    pub list: bool,

    /// Where to look for the config file: used (working directory), sub or
    /// home (~/.kamel), env ($KAMEL_CONFIG_PATH)
    #[arg(long, value_name = "used|sub|home|env", value_parser = clap::value_parser!(Folder))]
    pub folder: Option<Folder>,
}

#[derive(Args, Debug, Default)]
pub struct InstallArgs {
    /// Namespace to install into (default: the configured default-namespace)
    #[arg(short, long)]
    pub namespace: Option<String>,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet, None)?;

    let mut out = std::io::stdout().lock();
    match cli.command {
        Some(Commands::Config(args)) => {
            commands::config::execute(&args, &ResolveContext::from_process(), &mut out)?;
        }
        Some(Commands::Install(args)) => {
            commands::install::execute(&args, &ResolveContext::from_process(), &mut out)?;
        }
        None => writeln!(out, "kamel - Camel K command-line client. Use --help for usage.")?,
    }

    Ok(())
}
