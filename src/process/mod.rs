//! Child process execution.
//!
//! [`Spawner`] is the seam between the copy/size logic and the operating
//! system: [`SystemSpawner`] runs real processes, tests substitute fakes that
//! record invocations and script exit codes.

mod system;

use std::io;

use crate::command::CommandInvocation;

pub use system::SystemSpawner;

/// What a finished child left behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChildOutput {
    /// Exit code, `None` when the child was killed by a signal.
    pub code: Option<i32>,
    /// Everything written to standard output.
    pub stdout: Vec<u8>,
    /// Everything written to standard error.
    pub stderr: Vec<u8>,
}

impl ChildOutput {
    /// Exit status 0.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs one invocation to completion.
///
/// Blocks until the child exits. An `Err` means the child could not be
/// started or waited on; a child that ran and failed is an `Ok` with a
/// nonzero code.
pub trait Spawner: Send {
    fn run(&mut self, invocation: &CommandInvocation) -> io::Result<ChildOutput>;
}
