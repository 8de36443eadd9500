//! Command construction for the copy executable.
//!
//! ```text
//! source, destination, mode → flag policy → [scp, -prqB, source, destination]
//! ```
//!
//! No I/O happens here beyond the local directory check on the source.

mod flags;
mod invocation;

pub use flags::ScpFlags;
pub use invocation::{build_invocation, CommandInvocation};

/// Whether a copy may prompt on the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransferMode {
    /// Quiet, never prompts; fails instead of asking for a password.
    #[default]
    Batch,
    /// Confirmed by the operator first; the transport may prompt itself.
    Interactive,
}

impl TransferMode {
    pub fn from_interactive(interactive: bool) -> Self {
        if interactive {
            TransferMode::Interactive
        } else {
            TransferMode::Batch
        }
    }
}
