//! Static route policy table and path matching

use std::fmt;

use serde::{Deserialize, Serialize};

/// The access level a route requires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// Renders for any session
    Public,
    /// Any authenticated session, admin or not
    Authenticated,
    /// Authenticated non-admin only (cart, billing)
    ShopperOnly,
    /// Authenticated admin only
    AdminOnly,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Public => write!(f, "public"),
            Capability::Authenticated => write!(f, "authenticated"),
            Capability::ShopperOnly => write!(f, "shopper-only"),
            Capability::AdminOnly => write!(f, "admin-only"),
        }
    }
}

/// View identifier the router hands to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Categories,
    Product { category: String },
    Cart,
    Billing,
    BillingForm,
    Profile,
    Admin,
    Login,
    Signup,
    /// Explicit catch-all for paths outside the table
    NotFound,
}

impl Route {
    /// Auth-flow routes get the bare shell and stay reachable for any session
    pub fn is_auth_flow(&self) -> bool {
        matches!(self, Route::Login | Route::Signup)
    }

    /// Stable name for logging and CLI output
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::About => "about",
            Route::Categories => "categories",
            Route::Product { .. } => "product",
            Route::Cart => "cart",
            Route::Billing => "billing",
            Route::BillingForm => "billing-form",
            Route::Profile => "profile",
            Route::Admin => "admin-dashboard",
            Route::Login => "login",
            Route::Signup => "signup",
            Route::NotFound => "not-found",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Product { category } => write!(f, "product({})", category),
            other => write!(f, "{}", other.name()),
        }
    }
}

/// One row of the static policy table
#[derive(Debug, Clone, Copy)]
pub struct RoutePolicyEntry {
    /// Path pattern; `:name` segments capture a parameter
    pub pattern: &'static str,
    pub capability: Capability,
    /// Where a denied navigation redirects
    pub fallback: &'static str,
    /// Whether the denial redirect replaces history (no back-navigation
    /// to the denied route)
    pub replace_history: bool,
}

/// The route policy table. Immutable at runtime; first match wins.
pub const ROUTE_TABLE: &[RoutePolicyEntry] = &[
    RoutePolicyEntry {
        pattern: "/login",
        capability: Capability::Public,
        fallback: "/",
        replace_history: false,
    },
    RoutePolicyEntry {
        pattern: "/signup",
        capability: Capability::Public,
        fallback: "/",
        replace_history: false,
    },
    RoutePolicyEntry {
        pattern: "/",
        capability: Capability::Public,
        fallback: "/",
        replace_history: false,
    },
    RoutePolicyEntry {
        pattern: "/about",
        capability: Capability::Public,
        fallback: "/",
        replace_history: false,
    },
    RoutePolicyEntry {
        pattern: "/products/:category",
        capability: Capability::Public,
        fallback: "/",
        replace_history: false,
    },
    RoutePolicyEntry {
        pattern: "/categories",
        capability: Capability::Public,
        fallback: "/",
        replace_history: false,
    },
    RoutePolicyEntry {
        pattern: "/cart",
        capability: Capability::ShopperOnly,
        fallback: "/",
        replace_history: true,
    },
    RoutePolicyEntry {
        pattern: "/billing",
        capability: Capability::ShopperOnly,
        fallback: "/",
        replace_history: true,
    },
    RoutePolicyEntry {
        pattern: "/form",
        capability: Capability::Public,
        fallback: "/",
        replace_history: false,
    },
    RoutePolicyEntry {
        pattern: "/profile",
        capability: Capability::Public,
        fallback: "/",
        replace_history: false,
    },
    RoutePolicyEntry {
        pattern: "/admin",
        capability: Capability::AdminOnly,
        fallback: "/",
        replace_history: false,
    },
];

/// A matched path: the policy row plus the resolved view
#[derive(Debug, Clone)]
pub struct RouteMatch {
    pub entry: &'static RoutePolicyEntry,
    pub route: Route,
}

/// Normalize a requested path: strip query/fragment, force a leading
/// slash, drop a trailing slash (except for the root itself).
pub fn normalize_path(path: &str) -> String {
    let path = path
        .split(['?', '#'])
        .next()
        .unwrap_or("")
        .trim();

    let mut normalized = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };

    while normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
    }

    normalized
}

/// Resolve a normalized path against the table, first match wins
pub fn resolve(path: &str) -> Option<RouteMatch> {
    for entry in ROUTE_TABLE {
        if let Some(params) = match_pattern(entry.pattern, path) {
            return Some(RouteMatch {
                entry,
                route: route_for(entry.pattern, params),
            });
        }
    }
    None
}

/// Match a path against a pattern, capturing `:name` segments in order
fn match_pattern(pattern: &str, path: &str) -> Option<Vec<String>> {
    let pattern_segs: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    let path_segs: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    if pattern_segs.len() != path_segs.len() {
        return None;
    }

    let mut params = Vec::new();
    for (pat, seg) in pattern_segs.iter().zip(&path_segs) {
        if let Some(_name) = pat.strip_prefix(':') {
            params.push((*seg).to_string());
        } else if pat != seg {
            return None;
        }
    }
    Some(params)
}

fn route_for(pattern: &str, mut params: Vec<String>) -> Route {
    match pattern {
        "/" => Route::Home,
        "/about" => Route::About,
        "/categories" => Route::Categories,
        "/products/:category" => Route::Product {
            category: params.pop().unwrap_or_default(),
        },
        "/cart" => Route::Cart,
        "/billing" => Route::Billing,
        "/form" => Route::BillingForm,
        "/profile" => Route::Profile,
        "/admin" => Route::Admin,
        "/login" => Route::Login,
        "/signup" => Route::Signup,
        _ => Route::NotFound,
    }
}
