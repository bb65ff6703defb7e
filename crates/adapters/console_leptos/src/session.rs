//! Browser-backed session: `localStorage` token store, location-based
//! redirect, and the reactive handle the components share.

use leptos::prelude::*;
use ztconsole_app::ports::{Navigator, TokenStore};
use ztconsole_app::{GuardOutcome, Session, force_logout, guard};

/// Key used to persist the bearer token in `localStorage`.
const STORAGE_KEY: &str = "ztconsole-token";

/// Token store over the browser's `localStorage`.
///
/// Absence of the entry (or of storage itself, e.g. in private
/// browsing with storage disabled) reads as Anonymous.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        local_storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
    }

    fn set(&self, token: &str) {
        match local_storage() {
            Some(storage) => {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
            None => leptos::logging::warn!("localStorage unavailable, session will not persist"),
        }
    }

    fn remove(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

/// Navigator that performs the forced-logout redirect by assigning
/// `window.location`, reloading the whole app on the login view so
/// every mounted component observes the teardown at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect_to_login(&self) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}

/// Reactive session handle shared through Leptos context.
///
/// The persisted token in `localStorage` is the source of truth; the
/// signal only mirrors presence/absence so the nav bar can re-render
/// on login and logout.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    authenticated: RwSignal<bool>,
}

impl SessionHandle {
    fn session() -> Session<BrowserTokenStore> {
        Session::new(BrowserTokenStore)
    }

    #[must_use]
    pub fn new() -> Self {
        Self {
            authenticated: RwSignal::new(Self::session().is_authenticated()),
        }
    }

    /// Signal mirroring whether a session is currently established.
    #[must_use]
    pub fn authenticated(&self) -> RwSignal<bool> {
        self.authenticated
    }

    /// Current bearer token, read fresh from storage.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        Self::session().token()
    }

    /// Login-success handler: the single writer that establishes a
    /// session.
    pub fn login(&self, token: &str) {
        Self::session().establish(token);
        self.authenticated.set(true);
    }

    /// Explicit, user-initiated logout. Shares the teardown path with
    /// the unauthorized interceptor; the caller navigates afterwards.
    pub fn logout(&self) {
        Self::session().clear();
        self.authenticated.set(false);
    }

    /// System-initiated teardown after an unauthorized response.
    /// Redirects to the login view at most once per transition.
    pub fn force_logout(&self) {
        self.authenticated.set(false);
        force_logout(&Self::session(), &BrowserNavigator);
    }

    /// Evaluate the route guard for a navigation attempt.
    pub fn guard<V>(&self, view: V) -> GuardOutcome<V> {
        guard(&Self::session(), view)
    }
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the session handle and put it into Leptos context.
///
/// Called once from `App`; everything below reaches it via
/// [`use_session`].
pub fn provide_session() -> SessionHandle {
    let handle = SessionHandle::new();
    provide_context(handle);
    handle
}

/// Access the session handle from Leptos context.
///
/// Must be called within a component tree rooted in `App`.
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("SessionHandle not found in context")
}
