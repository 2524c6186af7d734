pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use orcalite_core::config::{AppConfig, ConfigOverrides, LoadOptions};

#[derive(Debug, Parser)]
#[command(
    name = "orcalite",
    about = "Terminal front end for the Meu Orçamento API",
    long_about = "Register and select clients, compose line items, and submit quotes against \
                  the remote Meu Orçamento REST service.",
    after_help = "Examples:\n  orcalite clients list\n  orcalite quote new --client-id 1 --item 2:9.99:Widget\n  orcalite login --email ana@example.com"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to an orcalite.toml config file")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "API base URL override")]
    base_url: Option<String>,
    #[arg(long, global = true, help = "Log level override (trace|debug|info|warn|error)")]
    log_level: Option<String>,
    #[arg(
        long,
        global = true,
        help = "Keep composed line items when a submission fails instead of clearing them"
    )]
    keep_items_on_failure: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Authenticate against the API and print the session user")]
    Login(commands::login::LoginArgs),
    #[command(subcommand, about = "List, register, and remove clients")]
    Clients(commands::clients::ClientsCommand),
    #[command(subcommand, about = "Compose and submit quotes")]
    Quote(commands::quote::QuoteCommand),
    #[command(about = "Print the effective configuration")]
    Config,
}

fn init_logging(config: &AppConfig) {
    use orcalite_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

pub async fn run() -> ExitCode {
    let cli = Cli::parse();

    let overrides = ConfigOverrides {
        base_url: cli.base_url.clone(),
        log_level: cli.log_level.clone(),
        reset_items_on_failure: cli.keep_items_on_failure.then_some(false),
    };
    let config = match AppConfig::load(LoadOptions {
        config_path: cli.config.clone(),
        require_file: cli.config.is_some(),
        overrides,
    }) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("configuration error: {error}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config);

    let result = match cli.command {
        Command::Login(args) => commands::login::run(&config, args).await,
        Command::Clients(command) => commands::clients::run(&config, command).await,
        Command::Quote(command) => commands::quote::run(&config, command).await,
        Command::Config => commands::config::run(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
