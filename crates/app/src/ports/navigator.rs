//! Navigation port — the redirect side effect of a forced logout.

/// Performs the single observable navigation to the login view.
///
/// Invoked by [`force_logout`](crate::session::force_logout) at most
/// once per Authenticated → Anonymous transition, however many
/// unauthorized responses arrive around the same time.
pub trait Navigator {
    fn redirect_to_login(&self);
}
