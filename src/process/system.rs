use std::io::{self, Read};
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};

use tracing::{debug, debug_span};
use uuid::Uuid;

use crate::command::CommandInvocation;
use crate::process::{ChildOutput, Spawner};

/// Runs invocations as real child processes.
///
/// Each child gets its own stdin, stdout and stderr pipes. Stdin is closed
/// straight after spawn so the child sees EOF rather than a pipe nobody
/// writes to. Stdout and stderr are drained on reader threads while the
/// caller waits, so a child that writes more than a pipe buffer of
/// diagnostics cannot wedge on a full pipe.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSpawner;

impl Spawner for SystemSpawner {
    fn run(&mut self, invocation: &CommandInvocation) -> io::Result<ChildOutput> {
        let span = debug_span!(
            "child",
            id = %Uuid::new_v4(),
            program = %invocation.program
        );
        let _enter = span.enter();

        debug!(command = %invocation.render(), "Spawning child");

        let mut child = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        drop(child.stdin.take());

        let stdout = child.stdout.take().map(drain);
        let stderr = child.stderr.take().map(drain);

        let status = child.wait()?;
        let stdout = collect(stdout);
        let stderr = collect(stderr);

        debug!(
            code = ?status.code(),
            stdout_bytes = stdout.len(),
            stderr_bytes = stderr.len(),
            "Child exited"
        );

        Ok(ChildOutput {
            code: status.code(),
            stdout,
            stderr,
        })
    }
}

fn drain<R: Read + Send + 'static>(mut reader: R) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = reader.read_to_end(&mut buf);
        buf
    })
}

fn collect(handle: Option<JoinHandle<Vec<u8>>>) -> Vec<u8> {
    handle
        .map(|h| h.join().unwrap_or_default())
        .unwrap_or_default()
}
