//! CLI output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::layout::LayoutVariant;
use crate::routing::{RoutePolicyEntry, ROUTE_TABLE};
use crate::session::Session;
use crate::shell::Rendered;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Print the current session state
pub fn print_session(session: &Session) {
    println!("{}", "Session".bold().underline());
    println!();

    let state = if session.is_admin() {
        "authenticated (admin)".yellow().to_string()
    } else if session.is_authenticated() {
        "authenticated".green().to_string()
    } else {
        "anonymous".dimmed().to_string()
    };
    println!("  {} {}", "State:".bold(), state);

    if let Some(user) = &session.user {
        println!("  {} {}", "User:".bold(), user.identity.id);
        if let Some(email) = &user.identity.email {
            println!("  {} {}", "Email:".bold(), email);
        }
        if let Some(name) = &user.identity.name {
            println!("  {} {}", "Name:".bold(), name);
        }
    }
}

/// Print the outcome of a navigation
pub fn print_rendered(rendered: &Rendered) {
    if let Some(from) = &rendered.redirected_from {
        let how = if rendered.replaced_history {
            "replacing history"
        } else {
            "pushing history"
        };
        println!(
            "{} {} {} {} ({})",
            "→".yellow(),
            from,
            "redirected to".yellow(),
            rendered.path,
            how
        );
    }

    let shell = match rendered.layout {
        LayoutVariant::Chromed => "chromed",
        LayoutVariant::Bare => "bare",
    };

    println!(
        "{} rendering {} at {} [{} shell]",
        "▸".green(),
        rendered.route.to_string().bold(),
        rendered.path,
        shell
    );

    if let Some(chrome) = rendered.chrome {
        let nav = if chrome.admin {
            "admin navigation"
        } else if chrome.authenticated {
            "shopper navigation"
        } else {
            "anonymous navigation"
        };
        println!("  {} {}", "Chrome:".bold(), nav);
    }
}

/// Print the static route policy table
pub fn print_route_table() {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Path").fg(Color::Cyan),
            Cell::new("Capability").fg(Color::Cyan),
            Cell::new("Fallback").fg(Color::Cyan),
            Cell::new("History").fg(Color::Cyan),
        ]);

    for entry in ROUTE_TABLE {
        table.add_row(route_row(entry));
    }

    println!("{table}");
}

fn route_row(entry: &RoutePolicyEntry) -> Vec<Cell> {
    use crate::routing::Capability;

    let capability_color = match entry.capability {
        Capability::Public => Color::Green,
        Capability::Authenticated => Color::Yellow,
        Capability::ShopperOnly => Color::Yellow,
        Capability::AdminOnly => Color::Red,
    };

    let history = if entry.replace_history { "replace" } else { "push" };

    vec![
        Cell::new(entry.pattern),
        Cell::new(entry.capability.to_string()).fg(capability_color),
        Cell::new(entry.fallback),
        Cell::new(history),
    ]
}
