//! Copy execution.
//!
//! [`Transport`] owns the program names, the process spawner and the
//! confirmation gate. Both the session methods and the [`scp`] / [`iscp`]
//! free functions go through [`Transport::copy`]; there is one copy path.

mod outcome;

use std::io;

use tracing::{info, warn};

use crate::command::{build_invocation, CommandInvocation, TransferMode};
use crate::config::Programs;
use crate::confirm::{Confirm, TerminalPrompt};
use crate::endpoint::EndpointSpec;
use crate::error::TransferError;
use crate::process::{ChildOutput, Spawner, SystemSpawner};

pub use outcome::TransferOutcome;

/// Drives the external scp and ssh executables.
///
/// One call spawns at most one child and blocks until it exits. Nothing is
/// retried, and no timeout is applied.
pub struct Transport {
    programs: Programs,
    spawner: Box<dyn Spawner>,
    confirm: Box<dyn Confirm + Send>,
}

impl Transport {
    /// Platform programs, real processes, terminal confirmation.
    pub fn new() -> Self {
        Self {
            programs: Programs::default(),
            spawner: Box::new(SystemSpawner),
            confirm: Box::new(TerminalPrompt),
        }
    }

    pub fn with_programs(mut self, programs: Programs) -> Self {
        self.programs = programs;
        self
    }

    pub fn with_spawner(mut self, spawner: impl Spawner + 'static) -> Self {
        self.spawner = Box::new(spawner);
        self
    }

    pub fn with_confirm(mut self, confirm: impl Confirm + Send + 'static) -> Self {
        self.confirm = Box::new(confirm);
        self
    }

    pub fn programs(&self) -> &Programs {
        &self.programs
    }

    pub fn set_programs(&mut self, programs: Programs) {
        self.programs = programs;
    }

    /// Copy `source` to `destination`.
    ///
    /// In interactive mode the rendered command goes through the
    /// confirmation gate first; a decline returns without spawning anything.
    pub fn copy(
        &mut self,
        source: &EndpointSpec,
        destination: &EndpointSpec,
        mode: TransferMode,
    ) -> TransferOutcome {
        TransferOutcome::from_result(self.try_copy(source, destination, mode))
    }

    fn try_copy(
        &mut self,
        source: &EndpointSpec,
        destination: &EndpointSpec,
        mode: TransferMode,
    ) -> Result<(), TransferError> {
        let invocation = build_invocation(&self.programs.scp, source, destination, mode);

        if mode == TransferMode::Interactive && !self.confirm.confirm(&invocation.render()) {
            warn!(command = %invocation.render(), "Copy declined by operator");
            return Err(TransferError::UserDeclined);
        }

        let output = self
            .spawn(&invocation)
            .map_err(|source| TransferError::Launch {
                program: invocation.program.clone(),
                source,
            })?;

        if !output.success() {
            let err = TransferError::from_child(&invocation.program, &output);
            warn!(code = ?output.code, error = %err, "Copy failed");
            return Err(err);
        }

        info!(source = %source, destination = %destination, "Copy finished");
        Ok(())
    }

    pub(crate) fn spawn(&mut self, invocation: &CommandInvocation) -> io::Result<ChildOutput> {
        self.spawner.run(invocation)
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy without session state.
///
/// `interactive` selects the confirm-first mode, prompting on the terminal.
pub fn scp(source: &str, destination: &str, interactive: bool) -> TransferOutcome {
    Transport::new().copy(
        &EndpointSpec::from(source),
        &EndpointSpec::from(destination),
        TransferMode::from_interactive(interactive),
    )
}

/// Interactive [`scp`].
pub fn iscp(source: &str, destination: &str) -> TransferOutcome {
    scp(source, destination, true)
}
