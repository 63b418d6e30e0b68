//! Authentication context and state management.

use crate::frontend::services::storage::SessionStore;
use crate::frontend::services::user::{AuthSession, SessionError, SessionUser};
use dioxus::prelude::*;

/// Login state shared through the component tree.
#[derive(Clone, Copy)]
pub struct AuthState {
    pub is_authenticated: Signal<bool>,
    pub current_user: Signal<Option<SessionUser>>,
    store: Signal<SessionStore>,
    key: Signal<String>,
}

impl AuthState {
    /// Builds the context value from whatever session is stored under
    /// `key`. Must be called from a component.
    pub fn restore(store: SessionStore, key: String) -> Self {
        let session = AuthSession::restore(&store, &key);
        if let Some(label) = session.label() {
            log::info!("Restored session for {label}");
        }
        Self {
            is_authenticated: Signal::new(session.is_authenticated()),
            current_user: Signal::new(session.user),
            store: Signal::new(store),
            key: Signal::new(key),
        }
    }

    /// Stores `user` as the logged-in visitor.
    pub fn login(&mut self, user: SessionUser) -> Result<(), SessionError> {
        user.save(&self.store.read(), &self.key.read())?;
        log::info!("Logged in as {}", user.display_name());
        self.current_user.set(Some(user));
        self.is_authenticated.set(true);
        Ok(())
    }

    /// Logs out the current user.
    pub fn logout(&mut self) {
        let mut session = AuthSession {
            user: self.current_user.peek().clone(),
        };
        if let Err(e) = session.logout(&self.store.read(), &self.key.read()) {
            log::warn!("Failed to remove stored session: {e}");
        }
        self.is_authenticated.set(false);
        self.current_user.set(session.user);
    }

    /// Gets the display label of the current user, if any.
    pub fn get_username(&self) -> Option<String> {
        self.current_user.read().as_ref().map(SessionUser::display_name)
    }
}

/// Gets the auth state from context.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    const KEY: &str = "user";

    fn in_root_scope(f: impl FnOnce()) {
        let mut dom = VirtualDom::new(|| rsx! {});
        dom.rebuild_in_place();
        dom.in_scope(ScopeId::ROOT, f);
    }

    fn record(value: Value) -> SessionUser {
        SessionUser::from_value(value).unwrap()
    }

    #[test]
    fn login_stores_the_record_and_flags_the_session() {
        in_root_scope(|| {
            let store = SessionStore::memory();
            let mut auth = AuthState::restore(store.clone(), KEY.to_string());
            assert!(!*auth.is_authenticated.peek());
            assert_eq!(auth.get_username(), None);

            auth.login(record(json!({ "username": "alice" }))).unwrap();
            assert!(*auth.is_authenticated.peek());
            assert_eq!(auth.get_username().as_deref(), Some("alice"));
            assert_eq!(store.get(KEY).as_deref(), Some(r#"{"username":"alice"}"#));
        });
    }

    #[test]
    fn logout_removes_the_stored_record() {
        in_root_scope(|| {
            let store = SessionStore::memory();
            store.set(KEY, r#"{"name":"Siti"}"#).unwrap();
            let mut auth = AuthState::restore(store.clone(), KEY.to_string());
            assert!(*auth.is_authenticated.peek());
            assert_eq!(auth.get_username().as_deref(), Some("Siti"));

            auth.logout();
            assert!(!*auth.is_authenticated.peek());
            assert!(auth.current_user.peek().is_none());
            assert_eq!(store.get(KEY), None);
        });
    }
}
