//! Configuration file support.
//!
//! Loaded once at startup from `~/.config/anyscp/config.toml`; every field
//! has a default, so a missing file or section is fine.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, Defaults, Programs};
