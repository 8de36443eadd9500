//! Secure copy orchestration over the system `scp` and `ssh` clients.
//!
//! The external executables do the wire protocol and authentication; this
//! crate decides their flags, runs them, and turns exit status and stderr
//! into values:
//!
//! - [`scp`] / [`iscp`] copy between two endpoints without any state.
//! - [`Session`] remembers host, user and remote working directory and
//!   offers `get`, `put` and `size`.
//!
//! Expected failures never surface as `Err` or panics. Copies return a
//! [`TransferOutcome`]; size queries return a [`SizeResult`] whose zero-byte
//! case is a separate variant from failure.

pub mod cli;
pub mod command;
pub mod config;
pub mod confirm;
pub mod endpoint;
pub mod error;
pub mod logging;
pub mod process;
pub mod session;
pub mod size;
pub mod transfer;

pub use error::TransferError;
pub use session::Session;
pub use size::SizeResult;
pub use transfer::{iscp, scp, TransferOutcome, Transport};
