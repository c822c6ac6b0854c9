//! enturno library root.
//! Exposes the CLI parser, the high-level run() function, and the internal
//! modules (reconciliation engine, backend client, session store).

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod providers;
pub mod store;
pub mod ui;
pub mod utils;

use std::path::PathBuf;
use std::sync::Arc;

use api::{ApiClient, ReqwestTransport};
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use models::movement::MovementKind;
use store::SessionStore;

/// Everything a command handler needs: configuration, the session store and
/// the backend client, explicitly constructed once per invocation and passed
/// in rather than reached for globally.
pub struct AppContext {
    pub dir: PathBuf,
    pub cfg: Config,
    pub store: SessionStore,
    pub api: ApiClient,
}

/// Central command dispatcher.
pub async fn dispatch(cli: &Cli, ctx: &mut AppContext) -> AppResult<()> {
    match &cli.command {
        Commands::Login { .. } => cli::commands::login::handle(&cli.command, ctx).await,
        Commands::Logout => cli::commands::logout::handle(ctx),
        Commands::Passwd { .. } => cli::commands::passwd::handle(&cli.command, ctx).await,
        Commands::Status => cli::commands::status::handle(ctx).await,
        Commands::In { at } => cli::commands::punch::handle(MovementKind::Entry, at, ctx).await,
        Commands::Pause { at } => {
            cli::commands::punch::handle(MovementKind::BreakStart, at, ctx).await
        }
        Commands::Resume { at } => {
            cli::commands::punch::handle(MovementKind::BreakEnd, at, ctx).await
        }
        Commands::Out { at } => cli::commands::punch::handle(MovementKind::Exit, at, ctx).await,
        Commands::Device => cli::commands::device::handle(ctx),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
    }
}

/// Entry point used by main.rs.
pub async fn run() -> AppResult<()> {
    // 1. parse CLI
    let cli = Cli::parse();

    // 2. resolve the config directory (global override wins)
    let dir = cli
        .config_dir
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_dir);

    // 3. load config once, apply per-invocation overrides
    let mut cfg = Config::load(&dir)?;
    if let Some(url) = &cli.url {
        cfg.base_url = url.clone();
    }

    // 4. session store + backend client
    let store = SessionStore::load(Config::session_file(&dir));
    let transport = ReqwestTransport::new(&cfg.base_url, cfg.timeout_secs)?;
    let api = ApiClient::new(Arc::new(transport));

    let mut ctx = AppContext {
        dir,
        cfg,
        store,
        api,
    };

    // 5. hand everything to the dispatcher
    dispatch(&cli, &mut ctx).await
}
