use thiserror::Error;

use crate::process::ChildOutput;

/// Ways a copy or size query can fail.
///
/// None of these escape the transfer runner or the size query as `Err`; they
/// are folded into [`TransferOutcome`](crate::transfer::TransferOutcome) and
/// [`SizeResult`](crate::size::SizeResult) where they are detected.
#[derive(Debug, Error)]
pub enum TransferError {
    /// The operator answered anything but yes at the confirmation prompt.
    #[error("User declined")]
    UserDeclined,

    /// The child ran and exited nonzero (or was killed).
    #[error("{}", transport_message(.code, .stderr))]
    TransportFailure {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The executable could not be started at all.
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The remote byte count did not start with a number.
    #[error("unparsable output from remote wc: {0}")]
    UnparsableRemoteOutput(String),
}

impl TransferError {
    /// Failure for a child that exited unsuccessfully, keeping all of stderr.
    pub fn from_child(program: &str, output: &ChildOutput) -> Self {
        TransferError::TransportFailure {
            program: program.to_string(),
            code: output.code,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    /// Short machine-readable kind, used in JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            TransferError::UserDeclined => "user_declined",
            TransferError::TransportFailure { .. } => "transport_failure",
            TransferError::Launch { .. } => "launch_failure",
            TransferError::UnparsableRemoteOutput(_) => "unparsable_remote_output",
        }
    }
}

fn transport_message(code: &Option<i32>, stderr: &str) -> String {
    let stderr = stderr.trim_end_matches(['\r', '\n']);
    if !stderr.is_empty() {
        return stderr.to_string();
    }
    match code {
        Some(code) => format!("command exited with status {}", code),
        None => "command terminated by signal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(code: Option<i32>, stderr: &str) -> TransferError {
        TransferError::TransportFailure {
            program: "scp".into(),
            code,
            stderr: stderr.into(),
        }
    }

    #[test]
    fn declined_message_is_fixed() {
        assert_eq!(TransferError::UserDeclined.to_string(), "User declined");
    }

    #[test]
    fn stderr_is_kept_whole() {
        let err = failure(Some(1), "scp: first problem\nscp: second problem\n");
        assert_eq!(err.to_string(), "scp: first problem\nscp: second problem");
    }

    #[test]
    fn empty_stderr_falls_back_to_status() {
        assert_eq!(failure(Some(255), "").to_string(), "command exited with status 255");
        assert_eq!(failure(None, "\n").to_string(), "command terminated by signal");
    }

    #[test]
    fn unparsable_includes_raw_text() {
        let err = TransferError::UnparsableRemoteOutput("total bogus".into());
        assert_eq!(err.to_string(), "unparsable output from remote wc: total bogus");
        assert_eq!(err.kind(), "unparsable_remote_output");
    }
}
