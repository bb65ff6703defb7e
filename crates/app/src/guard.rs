//! Route guard — the decision point between rendering and redirecting.

use crate::ports::TokenStore;
use crate::session::Session;

/// Outcome of a navigation attempt against the current session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome<V> {
    /// Session present: render the requested view.
    Render(V),
    /// Session absent: send the user to the login view instead.
    RedirectToLogin,
}

/// Decide whether `view` may render given the current session state.
///
/// Pure over the session read; callers must re-evaluate on every
/// navigation attempt rather than caching the outcome, since a forced
/// logout can occur between navigations.
pub fn guard<S: TokenStore, V>(session: &Session<S>, view: V) -> GuardOutcome<V> {
    if session.is_authenticated() {
        GuardOutcome::Render(view)
    } else {
        GuardOutcome::RedirectToLogin
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

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

    #[test]
    fn should_redirect_when_no_token_is_persisted() {
        let session = Session::new(InMemoryTokenStore::default());
        assert_eq!(guard(&session, "devices"), GuardOutcome::RedirectToLogin);
    }

    #[test]
    fn should_render_when_token_is_persisted() {
        let session = Session::new(InMemoryTokenStore::default());
        session.establish("abc123");
        assert_eq!(guard(&session, "devices"), GuardOutcome::Render("devices"));
    }

    #[test]
    fn should_observe_session_change_between_evaluations() {
        let session = Session::new(InMemoryTokenStore::default());
        session.establish("abc123");
        assert_eq!(guard(&session, "users"), GuardOutcome::Render("users"));

        session.clear();
        assert_eq!(guard(&session, "users"), GuardOutcome::RedirectToLogin);
    }
}
