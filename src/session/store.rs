//! Session store: owns the session and its persistence

use std::sync::{Arc, Mutex};

use crate::error::Result;
use crate::session::models::{Session, StoredSession, UserRecord};
use crate::session::storage::SessionStorage;

/// Owner of the visitor's session.
///
/// All other components read snapshots via [`SessionStore::current`];
/// only `login` and `logout` write the persisted record, and only
/// `hydrate` reads it.
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    session: Mutex<Session>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            storage,
            session: Mutex::new(Session::anonymous()),
        }
    }

    /// Restore the session from persisted storage, once at startup.
    ///
    /// A missing, corrupt, or structurally invalid record is recovered
    /// locally as the anonymous session, never surfaced as an error.
    pub fn hydrate(&self) -> Session {
        let session = match self.storage.load() {
            Ok(Some(stored)) => match stored.user.validate() {
                Ok(()) => {
                    tracing::debug!(
                        user = %stored.user.identity.id,
                        admin = stored.user.is_admin,
                        "restored persisted session"
                    );
                    Session::for_user(stored.user)
                }
                Err(e) => {
                    tracing::warn!("persisted session record invalid, treating as anonymous: {}", e);
                    Session::anonymous()
                }
            },
            Ok(None) => Session::anonymous(),
            Err(e) => {
                tracing::warn!("failed to read persisted session, treating as anonymous: {}", e);
                Session::anonymous()
            }
        };

        *self.session.lock().unwrap() = session.clone();
        session
    }

    /// Log in with a backend-confirmed user record.
    ///
    /// The record is validated structurally, then becomes the session
    /// wholesale and is persisted.
    pub fn login(&self, user: UserRecord) -> Result<Session> {
        user.validate()?;

        self.storage.save(&StoredSession::new(user.clone()))?;
        let session = Session::for_user(user);

        tracing::info!(admin = session.admin, "logged in");
        *self.session.lock().unwrap() = session.clone();
        Ok(session)
    }

    /// Clear all persisted session data and return to anonymous
    pub fn logout(&self) -> Result<Session> {
        self.storage.clear()?;

        let session = Session::anonymous();
        tracing::info!("logged out");
        *self.session.lock().unwrap() = session.clone();
        Ok(session)
    }

    /// Snapshot of the current session
    pub fn current(&self) -> Session {
        self.session.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::storage::MemoryStorage;

    fn store() -> SessionStore {
        SessionStore::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_hydrate_empty_storage_is_anonymous() {
        let store = store();
        let session = store.hydrate();
        assert_eq!(session, Session::anonymous());
    }

    #[test]
    fn test_login_updates_current() {
        let store = store();
        store.hydrate();

        let session = store.login(UserRecord::new("u1", false)).unwrap();
        assert!(session.is_shopper());
        assert_eq!(store.current(), session);
    }

    #[test]
    fn test_login_rejects_invalid_record() {
        let store = store();
        assert!(store.login(UserRecord::new("", false)).is_err());
        // Session untouched on failed login
        assert_eq!(store.current(), Session::anonymous());
    }

    #[test]
    fn test_logout_resets_to_anonymous() {
        let store = store();
        store.login(UserRecord::new("u1", true)).unwrap();
        let session = store.logout().unwrap();
        assert_eq!(session, Session::anonymous());
        assert_eq!(store.current(), Session::anonymous());
    }

    #[test]
    fn test_hydrate_reproduces_login() {
        let storage = Arc::new(MemoryStorage::new());

        let first = SessionStore::new(storage.clone());
        first.login(UserRecord::new("u1", true)).unwrap();

        // Simulates a reload: a fresh store over the same storage
        let second = SessionStore::new(storage);
        let session = second.hydrate();
        assert!(session.is_authenticated());
        assert!(session.is_admin());
    }
}
