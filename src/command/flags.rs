//! Flag policy for the secure-copy executable.

use std::fmt;

use crate::command::TransferMode;

/// Single-letter options passed to `scp`, rendered as one `-prqB` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScpFlags {
    /// `-p`: preserve modification times, access times and modes.
    pub preserve: bool,
    /// `-r`: copy directories recursively.
    pub recursive: bool,
    /// `-q`: no progress meter.
    pub quiet: bool,
    /// `-B`: batch mode, never ask for passwords or passphrases.
    pub batch: bool,
}

impl ScpFlags {
    /// Pick flags for a transfer.
    ///
    /// `source_is_local_file` is true only when the source is local and not a
    /// directory; that is the one case where `-r` is left out, since some scp
    /// builds mishandle it on plain files. Remote sources keep `-r` because
    /// their directory-ness is unknown client-side.
    pub fn select(source_is_local_file: bool, mode: TransferMode) -> Self {
        let batch = mode == TransferMode::Batch;
        Self {
            preserve: true,
            recursive: !source_is_local_file,
            quiet: batch,
            batch,
        }
    }

    /// The combined option string, e.g. `-prqB`.
    pub fn to_arg(&self) -> String {
        let mut arg = String::from("-");
        if self.preserve {
            arg.push('p');
        }
        if self.recursive {
            arg.push('r');
        }
        if self.quiet {
            arg.push('q');
        }
        if self.batch {
            arg.push('B');
        }
        arg
    }
}

impl fmt::Display for ScpFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_arg())
    }
}
