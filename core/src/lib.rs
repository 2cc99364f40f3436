//! # Hostmap Core
//!
//! Builds a host registry from fact snapshots and an inventory document.
//!
//! * **[`pattern`]**: host definition expansion (`web[01:10]`, `rack[a:c]`).
//! * **[`classifier`]**: inventory text to group sections.
//! * **[`resolver`]**: group sections to registry writes, in precedence order.
//! * **[`inventory`]**: loading inventory files and driving the two above.
//! * **[`facts`]**: per-host fact sources.
//! * **[`build`]**: the full batch, from sources to a read-only snapshot.

pub mod build;
pub mod classifier;
pub mod facts;
mod files;
pub mod inventory;
pub mod pattern;
pub mod resolver;
pub mod words;
