use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "diamond",
    about = "Diamond playground: highlight, check and run .dia sources",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct DiamondCli {
    /// Global: path to config (TOML); default: ~/.diamond/playground.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: plain output, no ANSI colors
    #[arg(long = "no-color", action = ArgAction::SetTrue, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive playground (default when no subcommand is given)
    Playground {
        /// Interpreter service URL (overrides config and DIAMOND_ENDPOINT)
        #[arg(long = "endpoint", value_name = "URL")]
        endpoint: Option<String>,
    },

    /// Dump the classified tokens of every line
    ///
    /// Examples:
    ///   diamond tokens hello.dia
    ///   diamond tokens hello.dia --json
    Tokens {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        /// Emit JSON instead of one token per line
        #[arg(long = "json", action = ArgAction::SetTrue)]
        json: bool,
    },

    /// Print a source file with syntax colors
    Highlight {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },

    /// Report unterminated strings; exits non-zero if any are found
    Check {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },

    /// Send a file to the interpreter service and print its output
    Run {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        /// Interpreter service URL (overrides config and DIAMOND_ENDPOINT)
        #[arg(long = "endpoint", value_name = "URL")]
        endpoint: Option<String>,
    },

    /// Write Monaco language + theme definitions as JSON
    Export {
        /// Output directory (short: -o)
        #[arg(short = 'o', long = "out", value_name = "DIR", default_value = ".")]
        out: PathBuf,
    },
}
