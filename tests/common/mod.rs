//! Shared test utilities and fake transports.

#![allow(dead_code, unused_imports)]

use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyscp::command::CommandInvocation;
use anyscp::config::Programs;
use anyscp::process::{ChildOutput, Spawner};
use anyscp::Transport;
use parking_lot::{Mutex, MutexGuard};
use tempfile::TempDir;

// -- Spawner fakes ------------------------------------------------------------

/// Records every invocation and replays scripted child results.
///
/// Clones share state, so a test can keep one handle while the transport
/// owns another. Unscripted calls succeed with empty output.
#[derive(Clone, Default)]
pub struct FakeSpawner {
    calls: Arc<Mutex<Vec<CommandInvocation>>>,
    responses: Arc<Mutex<VecDeque<io::Result<ChildOutput>>>>,
}

impl FakeSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a child that exits with `code` after writing the given streams.
    pub fn respond(&self, code: i32, stdout: &str, stderr: &str) -> &Self {
        self.responses.lock().push_back(Ok(ChildOutput {
            code: Some(code),
            stdout: stdout.as_bytes().to_vec(),
            stderr: stderr.as_bytes().to_vec(),
        }));
        self
    }

    /// Queue a spawn failure, as if the program did not exist.
    pub fn fail_to_launch(&self) -> &Self {
        self.responses
            .lock()
            .push_back(Err(io::Error::new(io::ErrorKind::NotFound, "no such program")));
        self
    }

    pub fn spawn_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn calls(&self) -> Vec<CommandInvocation> {
        self.calls.lock().clone()
    }

    pub fn last_argv(&self) -> Vec<String> {
        self.calls
            .lock()
            .last()
            .map(|c| c.argv())
            .expect("no process was spawned")
    }
}

impl Spawner for FakeSpawner {
    fn run(&mut self, invocation: &CommandInvocation) -> io::Result<ChildOutput> {
        self.calls.lock().push(invocation.clone());
        self.responses.lock().pop_front().unwrap_or_else(|| {
            Ok(ChildOutput {
                code: Some(0),
                ..ChildOutput::default()
            })
        })
    }
}

/// Transport over `spawner` whose confirmation gate always gives `answer`.
pub fn fake_transport(spawner: &FakeSpawner, answer: bool) -> Transport {
    Transport::new()
        .with_spawner(spawner.clone())
        .with_confirm(move |_: &str| answer)
}

// -- Script fakes -------------------------------------------------------------

static PROCESS_LOCK: Mutex<()> = parking_lot::const_mutex(());

/// Serialize tests that write and exec scripts.
///
/// A script still open for writing in one thread can leak into a child
/// forked by another, which makes exec fail with "text file busy".
pub fn process_lock() -> MutexGuard<'static, ()> {
    PROCESS_LOCK.lock()
}

/// Write an executable `/bin/sh` script.
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("Failed to write script");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make script executable");
    }

    path
}

/// Fake scp that stores its arguments, one per line, in `scp.args`.
pub fn recording_scp(dir: &Path, exit_code: i32) -> PathBuf {
    write_script(
        dir,
        "scp",
        &format!(
            "printf '%s\\n' \"$@\" > \"{}\"\nexit {}",
            dir.join("scp.args").display(),
            exit_code
        ),
    )
}

/// Arguments seen by [`recording_scp`].
pub fn recorded_args(dir: &Path) -> Vec<String> {
    std::fs::read_to_string(dir.join("scp.args"))
        .expect("scp was not run")
        .lines()
        .map(String::from)
        .collect()
}

/// Fake ssh that runs the remote command in a local shell.
///
/// Mirrors what sshd does: the words after the target are joined with
/// spaces and handed to a shell, so quoting mistakes show up here too.
pub fn local_ssh(dir: &Path) -> PathBuf {
    write_script(dir, "ssh", "shift\neval \"$*\"")
}

/// Programs pointing at fakes.
pub fn programs(scp: &Path, ssh: &Path) -> Programs {
    Programs {
        scp: scp.display().to_string(),
        ssh: ssh.display().to_string(),
        ..Programs::default()
    }
}

/// Create a scratch directory.
pub fn scratch() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}
