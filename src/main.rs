//! Diamond playground: interactive shell by default, plus file subcommands.
use clap::Parser;

use diamond_playground::cli::{Command, DiamondCli};
use diamond_playground::commands;
use diamond_playground::config::PlaygroundConfig;
use diamond_playground::core::registry;
use diamond_playground::shell;

fn init_logging() {
    let default = if std::env::var("DIAMOND_DEBUG").ok().as_deref() == Some("1") {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = DiamondCli::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    let cfg = PlaygroundConfig::load(args.config.as_deref())?;
    let language = registry::install(cfg.language()?)?;
    log::debug!("active language: {} ({})", language.id, language.theme.id());

    match args.cmd {
        None => shell::start(language, &cfg, None),
        Some(Command::Playground { endpoint }) => shell::start(language, &cfg, endpoint),
        Some(Command::Tokens { input, json }) => commands::tokens::main(&language, &input, json),
        Some(Command::Highlight { input }) => commands::highlight::main(&language, &input),
        Some(Command::Check { input }) => commands::check::main(&language, &input),
        Some(Command::Run { input, endpoint }) => commands::run::main(language, &cfg, &input, endpoint),
        Some(Command::Export { out }) => commands::export::main(&language, &out),
    }
}
