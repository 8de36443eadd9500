//! Stateful host/user/working-directory facade over [`Transport`].
//!
//! A session is owned by one caller. Sessions are `Send`, so each thread
//! can hold its own; sharing one between threads needs outside locking.

use tracing::debug;

use crate::command::TransferMode;
use crate::config::{Config, Programs};
use crate::endpoint::{basename, remote_target, resolve_remote, split_target, EndpointSpec};
use crate::size::SizeResult;
use crate::transfer::{TransferOutcome, Transport};

pub struct Session {
    host: String,
    user: Option<String>,
    cwd: Option<String>,
    interactive: bool,
    transport: Transport,
    last_error: Option<String>,
}

impl Session {
    /// New batch-mode session for `host`, no user, no working directory.
    ///
    /// # Panics
    ///
    /// Panics if `host` is empty.
    pub fn new(host: impl Into<String>) -> Self {
        let host = host.into();
        assert!(!host.is_empty(), "Session requires a non-empty host");
        Self {
            host,
            user: None,
            cwd: None,
            interactive: false,
            transport: Transport::new(),
            last_error: None,
        }
    }

    /// Session for a `[user@]host` target.
    ///
    /// # Panics
    ///
    /// Panics if the host part is empty.
    pub fn from_target(target: &str) -> Self {
        let (user, host) = split_target(target);
        let mut session = Self::new(host);
        session.user = user.map(String::from);
        session
    }

    /// Replace the transport (programs, spawner, confirmation gate).
    pub fn with_transport(mut self, transport: Transport) -> Self {
        self.transport = transport;
        self
    }

    /// Apply config programs and defaults. A user already set is kept.
    pub fn with_config(mut self, config: &Config) -> Self {
        self.transport.set_programs(config.programs.clone());
        if self.user.is_none() {
            self.user = config.defaults.user.clone();
        }
        if let Some(cwd) = &config.defaults.cwd {
            self.cwd(cwd);
        }
        self.interactive = config.defaults.interactive;
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Current remote working directory, if one was set.
    pub fn working_dir(&self) -> Option<&str> {
        self.cwd.as_deref()
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Message of the most recent failed operation; cleared on success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Set the remote login name. An empty name clears it.
    pub fn login(&mut self, user: &str) {
        self.user = (!user.is_empty()).then(|| user.to_string());
    }

    /// Set the remote working directory. An empty path means `/`.
    pub fn cwd(&mut self, path: &str) {
        let path = if path.is_empty() { "/" } else { path };
        self.cwd = Some(path.to_string());
    }

    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    pub fn set_programs(&mut self, programs: Programs) {
        self.transport.set_programs(programs);
    }

    /// `[user@]host` for this session.
    pub fn target(&self) -> String {
        remote_target(self.user.as_deref(), &self.host)
    }

    /// `[user@]host:path` with `path` resolved against the working directory.
    pub fn remote_spec(&self, path: &str) -> EndpointSpec {
        let resolved = resolve_remote(self.cwd.as_deref(), path);
        EndpointSpec::remote(self.user.as_deref(), &self.host, &resolved)
    }

    /// Fetch `remote` into `local`, which defaults to the remote basename.
    pub fn get(&mut self, remote: &str, local: Option<&str>) -> TransferOutcome {
        let local = local.map(str::to_string).unwrap_or_else(|| default_name(remote));
        let source = self.remote_spec(remote);
        let destination = EndpointSpec::new(local);
        debug!(%source, %destination, "get");
        let outcome = self.transport.copy(&source, &destination, self.mode());
        self.record(outcome)
    }

    /// Send `local` to `remote`, which defaults to the local basename.
    pub fn put(&mut self, local: &str, remote: Option<&str>) -> TransferOutcome {
        let remote = remote.map(str::to_string).unwrap_or_else(|| default_name(local));
        let source = EndpointSpec::new(local);
        let destination = self.remote_spec(&remote);
        debug!(%source, %destination, "put");
        let outcome = self.transport.copy(&source, &destination, self.mode());
        self.record(outcome)
    }

    /// Size of a remote file in bytes.
    pub fn size(&mut self, file: &str) -> SizeResult {
        let path = resolve_remote(self.cwd.as_deref(), file);
        let target = self.target();
        let result = self.transport.query_size(&target, &path);
        self.last_error = result.error_message().map(String::from);
        result
    }

    /// Accepted for compatibility with FTP-style callers; transfers are
    /// always binary.
    pub fn binary(&mut self) -> TransferOutcome {
        TransferOutcome::succeeded()
    }

    /// Accepted for compatibility with FTP-style callers; there is no
    /// connection to close.
    pub fn quit(&mut self) -> TransferOutcome {
        TransferOutcome::succeeded()
    }

    fn mode(&self) -> TransferMode {
        TransferMode::from_interactive(self.interactive)
    }

    fn record(&mut self, outcome: TransferOutcome) -> TransferOutcome {
        self.last_error = (!outcome.success).then(|| outcome.error_message.clone());
        outcome
    }
}

/// Basename of `path`, or `.` when it has none (e.g. `/`).
fn default_name(path: &str) -> String {
    match basename(path) {
        "" => ".".to_string(),
        name => name.to_string(),
    }
}
