//! Session user record.

use crate::frontend::services::storage::{SessionStore, StorageError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Label shown when the record carries neither `name` nor `username`.
pub const FALLBACK_LABEL: &str = "User";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("stored session is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("stored session is not a JSON object")]
    NotAnObject,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The record the login page writes into session storage.
///
/// Only the display fields are interpreted; everything else is carried
/// through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionUser {
    fields: Map<String, Value>,
}

impl SessionUser {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Builds a record from any JSON value. Only objects are accepted.
    pub fn from_value(value: Value) -> Result<Self, SessionError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(SessionError::NotAnObject),
        }
    }

    /// `name`, then `username`, then [`FALLBACK_LABEL`].
    pub fn display_name(&self) -> String {
        ["name", "username"]
            .iter()
            .find_map(|field| self.fields.get(*field).and_then(label_from))
            .unwrap_or_else(|| FALLBACK_LABEL.to_string())
    }

    /// Reads the record stored under `key`.
    ///
    /// Absence is `Ok(None)`; a payload that is not a JSON object is an error.
    pub fn load(store: &SessionStore, key: &str) -> Result<Option<Self>, SessionError> {
        match store.get_json::<Value>(key)? {
            Some(value) => Self::from_value(value).map(Some),
            None => Ok(None),
        }
    }

    pub fn save(&self, store: &SessionStore, key: &str) -> Result<(), SessionError> {
        store.set_json(key, self)?;
        Ok(())
    }

    pub fn delete(store: &SessionStore, key: &str) -> Result<(), SessionError> {
        store.remove(key)?;
        Ok(())
    }
}

// Empty strings, null, false and 0 count as missing. Arrays and objects are
// not labels either.
fn label_from(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// Login state derived from the stored record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthSession {
    pub user: Option<SessionUser>,
}

impl AuthSession {
    /// Restores the session from storage.
    ///
    /// A record that cannot be interpreted is discarded and the visitor is
    /// treated as logged out.
    pub fn restore(store: &SessionStore, key: &str) -> Self {
        match SessionUser::load(store, key) {
            Ok(user) => Self { user },
            Err(e) => {
                log::warn!("Discarding stored session under '{key}': {e}");
                if let Err(e) = SessionUser::delete(store, key) {
                    log::warn!("Failed to clear stored session: {e}");
                }
                Self::default()
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Display label for the header menu, if logged in.
    pub fn label(&self) -> Option<String> {
        self.user.as_ref().map(SessionUser::display_name)
    }

    /// Forgets the user and removes the stored record.
    pub fn logout(&mut self, store: &SessionStore, key: &str) -> Result<(), SessionError> {
        self.user = None;
        SessionUser::delete(store, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const KEY: &str = "user";

    fn user(value: Value) -> SessionUser {
        SessionUser::from_value(value).unwrap()
    }

    #[test]
    fn display_name_prefers_name_then_username() {
        assert_eq!(user(json!({ "name": "Siti", "username": "siti99" })).display_name(), "Siti");
        assert_eq!(user(json!({ "username": "alice" })).display_name(), "alice");
        assert_eq!(user(json!({ "email": "a@b.c" })).display_name(), "User");
    }

    #[test]
    fn empty_name_falls_through_to_username() {
        assert_eq!(user(json!({ "name": "", "username": "bob" })).display_name(), "bob");
        assert_eq!(user(json!({ "name": null, "username": "" })).display_name(), "User");
    }

    #[test]
    fn structured_name_falls_through_to_username() {
        assert_eq!(user(json!({ "name": ["Siti"], "username": "bob" })).display_name(), "bob");
        assert_eq!(user(json!({ "name": { "first": "Siti" } })).display_name(), "User");
    }

    #[test]
    fn non_object_payload_is_rejected() {
        assert!(matches!(
            SessionUser::from_value(json!("alice")),
            Err(SessionError::NotAnObject)
        ));
        assert!(matches!(
            SessionUser::from_value(Value::Null),
            Err(SessionError::NotAnObject)
        ));
    }

    #[test]
    fn absent_record_is_logged_out() {
        let store = SessionStore::memory();
        let session = AuthSession::restore(&store, KEY);
        assert!(!session.is_authenticated());
        assert_eq!(session.label(), None);
    }

    #[test]
    fn stored_record_restores_login() {
        let store = SessionStore::memory();
        store.set(KEY, r#"{"username":"alice","id":7}"#).unwrap();

        let session = AuthSession::restore(&store, KEY);
        assert!(session.is_authenticated());
        assert_eq!(session.label().as_deref(), Some("alice"));
        let stored = serde_json::to_value(session.user.unwrap()).unwrap();
        assert_eq!(stored["id"], 7);
    }

    #[test]
    fn malformed_record_is_discarded() {
        let store = SessionStore::memory();
        store.set(KEY, "{\"username\":").unwrap();

        let session = AuthSession::restore(&store, KEY);
        assert!(!session.is_authenticated());
        assert_eq!(store.get(KEY), None);
    }

    #[test]
    fn null_record_is_discarded() {
        let store = SessionStore::memory();
        store.set(KEY, "null").unwrap();

        assert!(!AuthSession::restore(&store, KEY).is_authenticated());
        assert_eq!(store.get(KEY), None);
    }

    #[test]
    fn logout_clears_storage() {
        let store = SessionStore::memory();
        user(json!({ "name": "Siti" })).save(&store, KEY).unwrap();

        let mut session = AuthSession::restore(&store, KEY);
        assert!(session.is_authenticated());

        session.logout(&store, KEY).unwrap();
        assert!(!session.is_authenticated());
        assert_eq!(store.get(KEY), None);
        assert!(!AuthSession::restore(&store, KEY).is_authenticated());
    }
}
