//! Token storage port — persisted bearer-token access.

/// Persistent storage for the bearer token under a single fixed key.
///
/// Reads and writes are synchronous; the browser adapter backs this
/// with `localStorage`, tests use an in-memory double. Absence of a
/// stored token means the session is Anonymous.
pub trait TokenStore {
    /// Return the persisted token, if any. Side-effect-free.
    fn get(&self) -> Option<String>;

    /// Persist `token`, replacing any previous value.
    fn set(&self, token: &str);

    /// Remove the persisted token. Removing an absent token is a no-op.
    fn remove(&self);
}
