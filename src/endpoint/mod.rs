//! Endpoint classification and remote path handling.
//!
//! Everything here is pure string work except [`is_directory`], which asks
//! the local filesystem.

mod path;
mod spec;

pub use path::{basename, remote_target, resolve_remote, split_target};
pub use spec::{is_directory, is_local, EndpointSpec};
