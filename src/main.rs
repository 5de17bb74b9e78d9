//! CLI entrypoint for LotusGuess
//!
//! Wires configuration, logging and services, then runs the interactive
//! client or the HTTP server.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use lotus_guess::adapters::http::app_router;
use lotus_guess::bootstrap::Services;
use lotus_guess::cli::{Cli, Command, DecisionRepl};
use lotus_guess::config::AppConfig;
use lotus_guess::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    init_logging(&config.log);

    match cli.chosen_command() {
        Command::Ask { seed, user_ref } => {
            if seed.is_some() {
                config.app.random_seed = seed;
            }
            let services = Services::from_config(&config)?;
            let user_ref = user_ref.or_else(|| config.record.user_ref.clone());

            let mut repl = DecisionRepl::new(services).with_user_ref(user_ref);
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            repl.run(stdin.lock(), &mut stdout).await?;
        }
        Command::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            let addr = config.server.socket_addr()?;
            let services = Services::from_config(&config)?;

            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .with_context(|| format!("Failed to bind {}", addr))?;
            info!(%addr, origin = %config.app.origin_url, "LotusGuess listening");

            axum::serve(listener, app_router(services.result_state()))
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
    }
}
