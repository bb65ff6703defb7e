//! # ztconsole-domain
//!
//! Pure domain model for the IoT zero-trust administration console.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define the flat records the platform API returns (**Devices**,
//!   **Users**, **Groups**) exactly as they appear on the wire
//! - Define the validated create payloads the console submits
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO
//! crates. All IO boundaries are expressed as traits in the `app` crate
//! (ports).

pub mod error;
pub mod id;

pub mod device;
pub mod group;
pub mod user;
