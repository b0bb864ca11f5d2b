//! CLI command implementations

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use crate::cli::output;
use crate::config::{self, Config};
use crate::feedback::FeedbackNotifier;
use crate::session::{FileStorage, Identity, SessionStore, UserRecord};
use crate::shell::Shell;

/// Build the shell over the configured session file
fn build_shell(config: &Config) -> Shell {
    let storage = Arc::new(FileStorage::new(&config.session.file));
    let store = SessionStore::new(storage);
    let notifier = FeedbackNotifier::with_timeout(config.feedback.timeout());
    Shell::new(store, notifier)
}

pub async fn init() -> Result<()> {
    let path = Path::new("shopfront.toml");
    if path.exists() {
        output::info("shopfront.toml already exists, leaving it untouched");
        return Ok(());
    }

    std::fs::write(path, config::default_config_content())?;
    output::success("Created shopfront.toml");
    Ok(())
}

pub async fn login(
    id: &str,
    email: Option<String>,
    name: Option<String>,
    admin: bool,
) -> Result<()> {
    let config = config::load_config_or_default();
    let mut shell = build_shell(&config);
    shell.start();

    let record = UserRecord {
        is_admin: admin,
        identity: Identity {
            id: id.to_string(),
            email,
            name,
        },
        extra: serde_json::Map::new(),
    };

    let rendered = shell.login(record)?;
    shell.post_feedback("Logged in successfully");

    if let Some(message) = shell.feedback() {
        output::info(&message);
    }
    output::print_rendered(&rendered);
    output::print_session(&shell.session());
    Ok(())
}

pub async fn logout() -> Result<()> {
    let config = config::load_config_or_default();
    let mut shell = build_shell(&config);
    shell.start();

    let rendered = shell.logout()?;
    shell.post_feedback("Logged out");

    if let Some(message) = shell.feedback() {
        output::info(&message);
    }
    output::print_rendered(&rendered);
    Ok(())
}

pub async fn navigate(path: &str) -> Result<()> {
    let config = config::load_config_or_default();
    let mut shell = build_shell(&config);
    shell.start();

    let rendered = shell.navigate(path);
    output::print_rendered(&rendered);
    Ok(())
}

pub async fn status() -> Result<()> {
    let config = config::load_config_or_default();
    let mut shell = build_shell(&config);
    shell.start();

    output::print_session(&shell.session());
    Ok(())
}

pub async fn routes() -> Result<()> {
    output::print_route_table();
    Ok(())
}
