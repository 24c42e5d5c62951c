use clap::Parser;
use std::path::Path;

mod api;
mod cli;
mod core;
mod crypto;
mod export;
mod generators;
mod models;
mod pwned;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    let dotenv_loaded = Path::new(".env").exists() && dotenvy::dotenv().is_ok();

    let args = Args::parse();
    let mut config = Config::load();

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false)
        .parse_default_env()
        .init();
    config.log_warnings();

    if dotenv_loaded {
        log::debug!("Loaded .env file");
    }
    log::debug!("Command line args: {:?}", args.command.as_ref().map(command_name));

    match args.command {
        Some(CliCommand::Generate(generate_args)) => {
            cli::handlers::handle_generate(&generate_args, &config, args.json)
        }
        Some(CliCommand::Check { password }) => {
            cli::handlers::handle_check(&password, &config, args.json).await
        }
        Some(CliCommand::Serve { address, port }) => {
            if let Some(address) = address {
                config.web_address = address;
            }
            if let Some(port) = port {
                config.web_port = port;
            }
            serve(&config).await
        }
        None => serve(&config).await,
    }
}

async fn serve(config: &Config) -> anyhow::Result<()> {
    log::info!("🔒 Starting passforge - password generator & breach checker");
    println!("🚀 Serving on http://{}:{}", config.web_address, config.web_port);

    api::start_server(config).await.map_err(|e| {
        log::error!("API server failed: {}", e);
        anyhow::anyhow!(e)
    })?;

    log::info!("✅ passforge shutdown complete.");
    Ok(())
}

// Args carry passwords, so only the command name is logged
fn command_name(command: &CliCommand) -> &'static str {
    match command {
        CliCommand::Serve { .. } => "serve",
        CliCommand::Generate(_) => "generate",
        CliCommand::Check { .. } => "check",
    }
}
