//! Authorization gate: admit or redirect a requested route

use crate::routing::policy::{self, Capability, Route};
use crate::session::Session;

/// Outcome of gating one navigation. A denial is a first-class redirect,
/// never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    Render(Route),
    Redirect {
        to: String,
        /// Replace the history entry instead of pushing one
        replace_history: bool,
    },
}

/// Evaluate a normalized path against the policy table for the given
/// session. Unknown paths admit the explicit not-found view rather than
/// falling into undefined behavior.
pub fn evaluate(path: &str, session: &Session) -> Admission {
    let Some(matched) = policy::resolve(path) else {
        tracing::debug!(path, "no route entry, rendering not-found");
        return Admission::Render(Route::NotFound);
    };

    let permitted = match matched.entry.capability {
        Capability::Public => true,
        Capability::Authenticated => session.is_authenticated(),
        Capability::ShopperOnly => session.is_shopper(),
        Capability::AdminOnly => session.is_authenticated() && session.is_admin(),
    };

    if permitted {
        tracing::debug!(path, route = %matched.route, "admitted");
        Admission::Render(matched.route)
    } else {
        tracing::debug!(
            path,
            capability = %matched.entry.capability,
            fallback = matched.entry.fallback,
            "denied, redirecting"
        );
        Admission::Redirect {
            to: matched.entry.fallback.to_string(),
            replace_history: matched.entry.replace_history,
        }
    }
}
