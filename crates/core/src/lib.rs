#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod dates;
pub mod meta;

#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
