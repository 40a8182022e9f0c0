//! Project configuration: the substitution table.
//!
//! The surrounding build owns its configuration; this crate only models the
//! substitution table it injects into directive processing, plus a loader
//! for the TOML form the table is shipped in.

pub mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader};
pub use types::Substitutions;
