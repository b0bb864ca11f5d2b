//! Session and user record models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Identity fields of a logged-in user, as supplied by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Backend-assigned user identifier
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The user record handed to `login` by the auth views.
///
/// Serialized camelCase so the persisted JSON matches what the backend
/// returns. Extra fields the backend sends are carried along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Missing flag means non-admin, never an error
    #[serde(default)]
    pub is_admin: bool,

    pub identity: Identity,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    /// Create a record with just the required fields
    pub fn new(id: impl Into<String>, is_admin: bool) -> Self {
        Self {
            is_admin,
            identity: Identity {
                id: id.into(),
                email: None,
                name: None,
            },
            extra: Map::new(),
        }
    }

    /// Validate the record at the login boundary.
    ///
    /// The record's authenticity is not checked (the backend already
    /// confirmed credentials); only structural validity is.
    pub fn validate(&self) -> Result<()> {
        if self.identity.id.trim().is_empty() {
            return Err(Error::InvalidUserRecord(
                "identity id must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// The visitor's current authentication and privilege state.
///
/// `admin` implies `authenticated`: the only constructors are
/// [`Session::anonymous`] and [`Session::for_user`], neither of which can
/// produce an anonymous admin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub authenticated: bool,
    pub admin: bool,
    pub user: Option<UserRecord>,
}

impl Session {
    /// The anonymous default every process starts from
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            admin: false,
            user: None,
        }
    }

    /// Session for a validated user record
    pub fn for_user(user: UserRecord) -> Self {
        Self {
            authenticated: true,
            admin: user.is_admin,
            user: Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn is_admin(&self) -> bool {
        self.admin
    }

    /// Authenticated shopper, i.e. not an admin account
    pub fn is_shopper(&self) -> bool {
        self.authenticated && !self.admin
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}

/// Wire format of the persisted session record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub user: UserRecord,
    /// When the record was written, for diagnostics only
    pub saved_at: DateTime<Utc>,
}

impl StoredSession {
    pub fn new(user: UserRecord) -> Self {
        Self {
            user,
            saved_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_default() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
        assert!(session.user.is_none());
    }

    #[test]
    fn test_admin_implies_authenticated() {
        let session = Session::for_user(UserRecord::new("u1", true));
        assert!(session.is_authenticated());
        assert!(session.is_admin());
        assert!(!session.is_shopper());
    }

    #[test]
    fn test_shopper_session() {
        let session = Session::for_user(UserRecord::new("u2", false));
        assert!(session.is_authenticated());
        assert!(!session.is_admin());
        assert!(session.is_shopper());
    }

    #[test]
    fn test_missing_admin_flag_defaults_to_false() {
        let record: UserRecord =
            serde_json::from_str(r#"{"identity": {"id": "u3"}}"#).unwrap();
        assert!(!record.is_admin);
    }

    #[test]
    fn test_extra_fields_survive_round_trip() {
        let json = r#"{"isAdmin": true, "identity": {"id": "u4"}, "cartId": "c-9"}"#;
        let record: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.extra.get("cartId").unwrap(), "c-9");

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["cartId"], "c-9");
        assert_eq!(back["isAdmin"], true);
    }

    #[test]
    fn test_empty_id_rejected() {
        let record = UserRecord::new("  ", false);
        assert!(record.validate().is_err());
    }
}
