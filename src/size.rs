//! Remote file size over an ssh command channel.
//!
//! Runs `ssh [user@]host wc -c <escaped path>` and reads the leading number
//! from the first line of output. A zero-length file is `Bytes(0)`, which
//! is a different variant from a failed query.

use std::borrow::Cow;

use serde::Serialize;
use tracing::{info, warn};

use crate::command::CommandInvocation;
use crate::error::TransferError;
use crate::transfer::Transport;

/// Outcome of a size query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", content = "value", rename_all = "snake_case")]
pub enum SizeResult {
    /// Size in bytes; 0 is a valid size.
    Bytes(u64),
    /// The query did not produce a size.
    QueryFailed(String),
}

impl SizeResult {
    pub fn is_failure(&self) -> bool {
        matches!(self, SizeResult::QueryFailed(_))
    }

    pub fn bytes(&self) -> Option<u64> {
        match self {
            SizeResult::Bytes(n) => Some(*n),
            SizeResult::QueryFailed(_) => None,
        }
    }

    /// Failure reason, `None` for a size.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            SizeResult::Bytes(_) => None,
            SizeResult::QueryFailed(reason) => Some(reason),
        }
    }

    pub fn from_result(result: Result<u64, TransferError>) -> Self {
        match result {
            Ok(n) => SizeResult::Bytes(n),
            Err(err) => SizeResult::QueryFailed(err.to_string()),
        }
    }
}

/// Quote a path so the remote shell sees exactly one argument.
pub fn escape_remote_path(path: &str) -> String {
    shell_escape::unix::escape(Cow::Borrowed(path)).into_owned()
}

/// Read the byte count from `wc -c` output.
///
/// Only the first line matters. It must start with optional whitespace and
/// a run of digits; anything after the digits (some `wc` builds echo the
/// file name) is ignored.
pub fn parse_wc_output(raw: &str) -> Result<u64, TransferError> {
    let line = raw.lines().next().unwrap_or("");
    let unparsable = || TransferError::UnparsableRemoteOutput(line.to_string());

    let rest = line.trim_start();
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return Err(unparsable());
    }

    rest[..digits_end].parse::<u64>().map_err(|_| unparsable())
}

impl Transport {
    /// Size of `remote_path` on `target` (`[user@]host`).
    ///
    /// The path is used as given; callers resolve it against a working
    /// directory first.
    pub fn query_size(&mut self, target: &str, remote_path: &str) -> SizeResult {
        SizeResult::from_result(self.try_query_size(target, remote_path))
    }

    fn try_query_size(&mut self, target: &str, remote_path: &str) -> Result<u64, TransferError> {
        let mut args = vec![target.to_string()];
        args.extend(self.programs().wc_words());
        args.push(escape_remote_path(remote_path));
        let invocation = CommandInvocation::new(self.programs().ssh.clone(), args);

        let output = self
            .spawn(&invocation)
            .map_err(|source| TransferError::Launch {
                program: invocation.program.clone(),
                source,
            })?;

        if !output.success() {
            let err = TransferError::from_child(&invocation.program, &output);
            warn!(host = target, path = remote_path, error = %err, "Size query failed");
            return Err(err);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let size = parse_wc_output(&stdout).inspect_err(|err| {
            warn!(host = target, path = remote_path, error = %err, "Size query output rejected");
        })?;

        info!(host = target, path = remote_path, size, "Size query finished");
        Ok(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_number() {
        assert_eq!(parse_wc_output("1024\n").unwrap(), 1024);
    }

    #[test]
    fn zero_is_a_size() {
        assert_eq!(parse_wc_output("0\n").unwrap(), 0);
        let result = SizeResult::from_result(parse_wc_output("0\n"));
        assert_eq!(result, SizeResult::Bytes(0));
        assert!(!result.is_failure());
    }

    #[test]
    fn leading_whitespace_and_trailing_name() {
        assert_eq!(parse_wc_output("     42 /tmp/file name.txt\n").unwrap(), 42);
        assert_eq!(parse_wc_output("7\tfile\nsecond line\n").unwrap(), 7);
    }

    #[test]
    fn garbage_is_rejected_with_raw_text() {
        let err = parse_wc_output("wc: no such file\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unparsable output from remote wc: wc: no such file"
        );
    }

    #[test]
    fn empty_output_is_rejected() {
        assert!(parse_wc_output("").is_err());
        assert!(parse_wc_output("\n").is_err());
    }

    #[test]
    fn overflow_is_rejected() {
        assert!(parse_wc_output("99999999999999999999999999\n").is_err());
    }

    #[test]
    fn escaping_quotes_spaces() {
        assert_eq!(escape_remote_path("plain/path.txt"), "plain/path.txt");
        assert_eq!(escape_remote_path("my file.txt"), "'my file.txt'");
    }

    #[test]
    fn json_keeps_zero_distinct_from_failure() {
        let zero = serde_json::to_value(SizeResult::Bytes(0)).unwrap();
        assert_eq!(zero, serde_json::json!({"result": "bytes", "value": 0}));

        let failed = serde_json::to_value(SizeResult::QueryFailed("boom".into())).unwrap();
        assert_eq!(failed, serde_json::json!({"result": "query_failed", "value": "boom"}));
    }
}
