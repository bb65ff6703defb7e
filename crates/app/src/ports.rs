//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the
//! browser. They are defined here (in `app`) so that both the session
//! layer and the adapter layer can depend on them without creating
//! circular dependencies.

pub mod navigator;
pub mod token_store;

pub use navigator::Navigator;
pub use token_store::TokenStore;
