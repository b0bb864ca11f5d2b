//! Shell selection: which structural wrapper surrounds the routed view

use crate::routing::Route;
use crate::session::Session;

/// The structural wrapper around a rendered view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutVariant {
    /// Navigation header present
    Chromed,
    /// No navigation chrome (login, signup)
    Bare,
}

/// What the navigation header needs from the session, plus the logout
/// trigger it exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavChrome {
    pub authenticated: bool,
    pub admin: bool,
}

impl NavChrome {
    pub fn for_session(session: &Session) -> Self {
        Self {
            authenticated: session.is_authenticated(),
            admin: session.is_admin(),
        }
    }
}

/// Pure function of the route category, recomputed on every navigation
pub fn select_shell(route: &Route) -> LayoutVariant {
    if route.is_auth_flow() {
        LayoutVariant::Bare
    } else {
        LayoutVariant::Chromed
    }
}
