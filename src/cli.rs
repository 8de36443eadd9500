//! Command-line definitions for the `anyscp` binary.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::config::Programs;

/// Copy files through the system scp and ssh clients.
#[derive(Debug, Parser)]
#[command(name = "anyscp", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Remote working directory for relative remote paths.
    #[arg(long, global = true, value_name = "DIR")]
    pub cwd: Option<String>,

    /// Remote login name (overrides the user in TARGET).
    #[arg(long, global = true, value_name = "USER")]
    pub user: Option<String>,

    /// Show each copy command and ask before running it.
    #[arg(short, long, global = true)]
    pub interactive: bool,

    /// Secure-copy executable to run.
    #[arg(long, global = true, value_name = "PROGRAM")]
    pub scp: Option<String>,

    /// Secure-shell executable to run remote commands with.
    #[arg(long, global = true, value_name = "PROGRAM")]
    pub ssh: Option<String>,

    /// Config file to use instead of the default location.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the result as JSON on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    /// More log output (repeat for more).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Copy SOURCE to DEST; either may be a local path or [user@]host:path.
    Cp { source: String, dest: String },

    /// Fetch REMOTE from TARGET ([user@]host) into LOCAL.
    Get {
        target: String,
        remote: String,
        /// Defaults to the remote file name.
        local: Option<String>,
    },

    /// Send LOCAL to REMOTE on TARGET ([user@]host).
    Put {
        target: String,
        local: String,
        /// Defaults to the local file name.
        remote: Option<String>,
    },

    /// Print the size in bytes of REMOTE on TARGET ([user@]host).
    Size { target: String, remote: String },
}

impl Cli {
    /// Config programs with command-line overrides applied.
    pub fn programs(&self, configured: &Programs) -> Programs {
        let mut programs = configured.clone();
        if let Some(scp) = &self.scp {
            programs.scp = scp.clone();
        }
        if let Some(ssh) = &self.ssh {
            programs.ssh = ssh.clone();
        }
        programs
    }
}
