//! Command invocation: program plus ordered arguments.

use crate::command::{ScpFlags, TransferMode};
use crate::endpoint::EndpointSpec;

/// A fully formed child-process command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    /// Executable to run.
    pub program: String,
    /// Arguments after the program name, in order.
    pub args: Vec<String>,
    /// Copy flags when this is an scp invocation.
    pub flags: Option<ScpFlags>,
}

impl CommandInvocation {
    /// A plain command with no copy flags attached.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            flags: None,
        }
    }

    /// Full argument vector, program first.
    pub fn argv(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len() + 1);
        argv.push(self.program.clone());
        argv.extend(self.args.iter().cloned());
        argv
    }

    /// Space-joined command line, as shown to the operator.
    pub fn render(&self) -> String {
        self.argv().join(" ")
    }
}

/// Build `[program, flags, source, destination]` for a copy.
pub fn build_invocation(
    program: &str,
    source: &EndpointSpec,
    destination: &EndpointSpec,
    mode: TransferMode,
) -> CommandInvocation {
    let source_is_local_file = !source.is_remote() && !source.is_local_directory();
    let flags = ScpFlags::select(source_is_local_file, mode);

    CommandInvocation {
        program: program.to_string(),
        args: vec![
            flags.to_arg(),
            source.as_str().to_string(),
            destination.as_str().to_string(),
        ],
        flags: Some(flags),
    }
}
