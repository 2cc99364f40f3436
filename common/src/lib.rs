//! # Hostmap Common
//!
//! Shared model for the `hostmap` workspace.
//!
//! * **[`host`]**: the per-host record and the typed update merged into it.
//! * **[`registry`]**: the accumulator every source writes into, and the read-only snapshot.
//! * **[`error`]**: the error taxonomy for inventory parsing and fact decoding.
//! * **[`config`]**: build options chosen by the caller.

pub mod config;
pub mod error;
pub mod group;
pub mod host;
pub mod log;
pub mod registry;

#[doc(hidden)]
pub use tracing;
