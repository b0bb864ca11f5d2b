//! The navigation shell: routes paths to views through the auth gate

use crate::error::Result;
use crate::feedback::FeedbackNotifier;
use crate::layout::{self, LayoutVariant, NavChrome};
use crate::routing::{gate, normalize_path, Admission, Route};
use crate::session::{Session, SessionStore, UserRecord};

/// Fallbacks in the policy table are public, so a denial settles in one
/// hop; the cap only guards against a future misconfigured table.
const MAX_REDIRECT_HOPS: usize = 4;

/// Outcome of one navigation: the view to render and its wrapper
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub route: Route,
    pub layout: LayoutVariant,
    /// Present iff the layout is chromed
    pub chrome: Option<NavChrome>,
    /// Final path after any redirect
    pub path: String,
    /// The denied path this navigation was redirected away from
    pub redirected_from: Option<String>,
    /// Whether the redirect replaced the history entry
    pub replaced_history: bool,
}

/// Orchestrator owning the session store, the feedback channel and the
/// currently rendered route.
///
/// Every navigation and every session mutation re-runs the gate against
/// the latest session snapshot, so the rendered view is never stale.
pub struct Shell {
    store: SessionStore,
    notifier: FeedbackNotifier,
    current_path: String,
}

impl Shell {
    pub fn new(store: SessionStore, notifier: FeedbackNotifier) -> Self {
        Self {
            store,
            notifier,
            current_path: "/".to_string(),
        }
    }

    /// Hydrate the session from persisted storage and land on the root.
    /// Called once at startup, before the first render.
    pub fn start(&mut self) -> Rendered {
        self.store.hydrate();
        self.navigate("/")
    }

    /// Route a requested path through the gate and record the outcome
    pub fn navigate(&mut self, path: &str) -> Rendered {
        let session = self.store.current();
        let mut path = normalize_path(path);
        let mut redirected_from = None;
        let mut replaced_history = false;

        let mut hops = 0;
        let route = loop {
            match gate::evaluate(&path, &session) {
                Admission::Render(route) => break route,
                Admission::Redirect {
                    to,
                    replace_history,
                } => {
                    hops += 1;
                    if hops > MAX_REDIRECT_HOPS {
                        tracing::warn!(path, "redirect chain exceeded cap, rendering not-found");
                        break Route::NotFound;
                    }
                    redirected_from.get_or_insert_with(|| path.clone());
                    replaced_history = replace_history;
                    path = normalize_path(&to);
                }
            }
        };

        let layout = layout::select_shell(&route);
        let chrome = match layout {
            LayoutVariant::Chromed => Some(NavChrome::for_session(&session)),
            LayoutVariant::Bare => None,
        };

        tracing::info!(
            route = %route,
            path,
            redirected = redirected_from.is_some(),
            "navigated"
        );

        self.current_path = path.clone();
        Rendered {
            route,
            layout,
            chrome,
            path,
            redirected_from,
            replaced_history,
        }
    }

    /// Login callback used identically by the login and signup views.
    /// Re-evaluates the current route against the new session.
    pub fn login(&mut self, user: UserRecord) -> Result<Rendered> {
        self.store.login(user)?;
        let path = self.current_path.clone();
        Ok(self.navigate(&path))
    }

    /// Logout trigger exposed to the navigation chrome
    pub fn logout(&mut self) -> Result<Rendered> {
        self.store.logout()?;
        let path = self.current_path.clone();
        Ok(self.navigate(&path))
    }

    /// Snapshot of the current session
    pub fn session(&self) -> Session {
        self.store.current()
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Post a transient status message, visible independent of route
    pub fn post_feedback(&self, text: impl Into<String>) {
        self.notifier.post(text);
    }

    /// The active feedback message, if its timer has not fired
    pub fn feedback(&self) -> Option<String> {
        self.notifier.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStorage;
    use std::sync::Arc;

    fn shell() -> Shell {
        Shell::new(
            SessionStore::new(Arc::new(MemoryStorage::new())),
            FeedbackNotifier::new(),
        )
    }

    #[test]
    fn test_start_lands_on_home() {
        let mut shell = shell();
        let rendered = shell.start();
        assert_eq!(rendered.route, Route::Home);
        assert_eq!(rendered.layout, LayoutVariant::Chromed);
        assert!(rendered.redirected_from.is_none());
    }

    #[test]
    fn test_denied_navigation_redirects_home() {
        let mut shell = shell();
        shell.start();

        let rendered = shell.navigate("/cart");
        assert_eq!(rendered.route, Route::Home);
        assert_eq!(rendered.path, "/");
        assert_eq!(rendered.redirected_from.as_deref(), Some("/cart"));
        assert!(rendered.replaced_history);
    }

    #[test]
    fn test_login_reevaluates_current_route() {
        let mut shell = shell();
        shell.start();
        shell.navigate("/cart"); // denied, now sitting on "/"

        let rendered = shell.login(UserRecord::new("u1", false)).unwrap();
        assert_eq!(rendered.route, Route::Home);
        assert!(rendered.chrome.unwrap().authenticated);

        // Now the cart admits the shopper
        let rendered = shell.navigate("/cart");
        assert_eq!(rendered.route, Route::Cart);
    }

    #[test]
    fn test_logout_kicks_session_off_gated_route() {
        let mut shell = shell();
        shell.start();
        shell.login(UserRecord::new("u1", false)).unwrap();
        assert_eq!(shell.navigate("/cart").route, Route::Cart);

        let rendered = shell.logout().unwrap();
        assert_eq!(rendered.route, Route::Home);
        assert_eq!(rendered.redirected_from.as_deref(), Some("/cart"));
        assert!(!rendered.chrome.unwrap().authenticated);
    }
}
