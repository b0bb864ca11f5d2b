//! CLI interface for Shopfront

pub mod commands;
mod output;

pub use output::*;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "shopfront")]
#[command(version = "0.1.0")]
#[command(about = "Session and navigation shell for a storefront single-page app", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new shopfront.toml configuration file
    Init,

    /// Log in with a backend-confirmed user record
    Login {
        /// Backend-assigned user id
        #[arg(long)]
        id: String,

        /// Email address
        #[arg(long)]
        email: Option<String>,

        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Mark the account as an administrator
        #[arg(long)]
        admin: bool,
    },

    /// Log out and clear the persisted session
    Logout,

    /// Run one navigation through the auth gate and print the outcome
    Navigate {
        /// The requested path, e.g. /cart
        path: String,
    },

    /// Show the current session
    Status,

    /// Print the static route policy table
    Routes,
}
