//! hrdesk library root.
//! Exposes the CLI parser, the high-level `run()` function and the modules
//! the commands are built from.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod device;
pub mod errors;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing::Level;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Login { .. }
        | Commands::Logout
        | Commands::Whoami
        | Commands::Profile => cli::commands::auth::handle(&cli.command, cfg),
        Commands::Dashboard => cli::commands::dashboard::handle(cfg),
        Commands::Status
        | Commands::Punch { .. }
        | Commands::Attendance { .. }
        | Commands::Watch { .. } => cli::commands::attendance::handle(&cli.command, cfg),
        Commands::Leave { .. } => cli::commands::leave::handle(&cli.command, cfg),
        Commands::Payslip { .. } => cli::commands::payslip::handle(&cli.command, cfg),
        Commands::Notifications { .. } => cli::commands::notifications::handle(&cli.command, cfg),
        Commands::Tenant { .. } => cli::commands::tenant::handle(&cli.command, cfg),
        Commands::Device { .. } => cli::commands::device::handle(&cli.command, cfg),
    }
}

fn parse_level(s: &str) -> Level {
    match s.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    }
}

/// Diagnostics go to stderr so command output stays clean.
fn init_tracing(cfg: &Config) {
    let level = std::env::var("HRDESK_LOG")
        .map(|v| parse_level(&v))
        .unwrap_or_else(|_| parse_level(&cfg.log_level));

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(url) = &cli.api_url {
        cfg.api_base_url = url.clone();
    }

    init_tracing(&cfg);
    tracing::debug!(db = %cfg.database, api = %cfg.api_base_url, "configuration loaded");

    dispatch(&cli, &cfg)
}
