//! Session — the client-held proof of authentication and its lifecycle.
//!
//! Two states: **Anonymous** (no persisted token) and **Authenticated**
//! (token present, treated as valid until the server says otherwise).
//! The client never inspects expiry or signature; invalidity is
//! discovered reactively through an unauthorized response.

use crate::ports::{Navigator, TokenStore};

/// The session over a token store.
///
/// Every read goes to the store, so the credential a caller attaches to
/// an outgoing request is always derived from current state; there is
/// no cached copy to fall out of sync.
#[derive(Debug, Clone)]
pub struct Session<S> {
    store: S,
}

impl<S: TokenStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Return the current bearer token, if one is persisted.
    ///
    /// Synchronous and side-effect-free.
    pub fn token(&self) -> Option<String> {
        self.store.get()
    }

    /// Whether a session is established.
    pub fn is_authenticated(&self) -> bool {
        self.store.get().is_some()
    }

    /// Transition Anonymous → Authenticated with a fresh token.
    ///
    /// Persists synchronously, so the next outgoing request observes the
    /// new credential. Single-writer discipline: only the login-success
    /// handler calls this.
    pub fn establish(&self, token: &str) {
        self.store.set(token);
        tracing::info!("session established");
    }

    /// Transition Authenticated → Anonymous.
    ///
    /// Returns `true` when a token was actually removed, i.e. when this
    /// call performed the transition. Clearing an absent session is a
    /// no-op returning `false`, which is what collapses concurrent
    /// teardown triggers to a single observable transition.
    pub fn clear(&self) -> bool {
        if self.store.get().is_none() {
            return false;
        }
        self.store.remove();
        tracing::info!("session cleared");
        true
    }
}

/// Tear down the session in reaction to an unauthorized response.
///
/// Explicit logout and the 401 interceptor both funnel through
/// [`Session::clear`], so storage and credential state can never
/// diverge. The navigation side effect fires only for the call that
/// actually performed the transition: N in-flight requests all coming
/// back unauthorized produce exactly one redirect.
pub fn force_logout<S: TokenStore, N: Navigator>(session: &Session<S>, navigator: &N) {
    if session.clear() {
        tracing::warn!("unauthorized response, forcing logout");
        navigator.redirect_to_login();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::guard::{GuardOutcome, guard};

    #[derive(Default)]
    struct InMemoryTokenStore {
        token: RefCell<Option<String>>,
    }

    impl TokenStore for InMemoryTokenStore {
        fn get(&self) -> Option<String> {
            self.token.borrow().clone()
        }

        fn set(&self, token: &str) {
            *self.token.borrow_mut() = Some(token.to_string());
        }

        fn remove(&self) {
            *self.token.borrow_mut() = None;
        }
    }

    #[derive(Default)]
    struct CountingNavigator {
        redirects: Cell<u32>,
    }

    impl Navigator for CountingNavigator {
        fn redirect_to_login(&self) {
            self.redirects.set(self.redirects.get() + 1);
        }
    }

    fn anonymous_session() -> Session<InMemoryTokenStore> {
        Session::new(InMemoryTokenStore::default())
    }

    #[test]
    fn should_roundtrip_token_through_establish_and_token() {
        let session = anonymous_session();
        session.establish("abc123");
        assert_eq!(session.token().as_deref(), Some("abc123"));
        assert!(session.is_authenticated());
    }

    #[test]
    fn should_start_anonymous_when_store_is_empty() {
        let session = anonymous_session();
        assert!(session.token().is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn should_report_transition_on_first_clear_only() {
        let session = anonymous_session();
        session.establish("abc123");

        assert!(session.clear());
        assert!(!session.clear());
        assert!(session.token().is_none());
    }

    #[test]
    fn should_treat_clear_of_absent_session_as_noop() {
        let session = anonymous_session();
        assert!(!session.clear());
    }

    #[test]
    fn should_redirect_once_when_forced_logout_fires_repeatedly() {
        // Three in-flight requests all answered with 401.
        let session = anonymous_session();
        session.establish("expired");
        let navigator = CountingNavigator::default();

        force_logout(&session, &navigator);
        force_logout(&session, &navigator);
        force_logout(&session, &navigator);

        assert_eq!(navigator.redirects.get(), 1);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn should_not_redirect_when_session_already_anonymous() {
        // A 401 from the login endpoint itself: invalid credentials,
        // nothing to tear down.
        let session = anonymous_session();
        let navigator = CountingNavigator::default();

        force_logout(&session, &navigator);

        assert_eq!(navigator.redirects.get(), 0);
    }

    #[test]
    fn should_redirect_guard_for_any_view_after_clear() {
        let session = anonymous_session();
        session.establish("abc123");
        session.clear();

        for view in ["devices", "users", "groups", "dashboard"] {
            assert!(matches!(
                guard(&session, view),
                GuardOutcome::RedirectToLogin
            ));
        }
    }

    #[test]
    fn should_render_protected_view_after_login() {
        let session = anonymous_session();
        session.establish("abc123");

        match guard(&session, "devices") {
            GuardOutcome::Render(view) => assert_eq!(view, "devices"),
            GuardOutcome::RedirectToLogin => panic!("expected render"),
        }
    }

    #[test]
    fn should_overwrite_previous_token_on_new_login() {
        let session = anonymous_session();
        session.establish("first");
        session.establish("second");
        assert_eq!(session.token().as_deref(), Some("second"));
    }
}
