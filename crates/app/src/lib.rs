//! # ztconsole-app
//!
//! Application layer — the session state machine, the route guard, and
//! **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - [`ports::TokenStore`] — persisted bearer-token storage
//!   - [`ports::Navigator`] — the redirect-to-login side effect
//! - Hold the two-state session machine (Anonymous ⇄ Authenticated) with
//!   a single-writer discipline: only the login-success handler
//!   establishes a session, and explicit logout and the unauthorized
//!   interceptor converge on the same idempotent teardown
//! - Decide, per navigation attempt, whether a view renders or the user
//!   is redirected to the login view
//!
//! ## Dependency rule
//! No IO and no framework imports; adapters depend on *this* crate,
//! not the reverse.

pub mod guard;
pub mod ports;
pub mod session;

pub use guard::{GuardOutcome, guard};
pub use session::{Session, force_logout};
