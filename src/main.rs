use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod feedback;
mod layout;
mod routing;
mod session;
mod shell;

pub mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shopfront=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => cli::commands::init().await,
        Commands::Login {
            id,
            email,
            name,
            admin,
        } => cli::commands::login(&id, email, name, admin).await,
        Commands::Logout => cli::commands::logout().await,
        Commands::Navigate { path } => cli::commands::navigate(&path).await,
        Commands::Status => cli::commands::status().await,
        Commands::Routes => cli::commands::routes().await,
    }
}
