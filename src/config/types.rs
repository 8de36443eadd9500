use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub programs: Programs,
    #[serde(default)]
    pub defaults: Defaults,
}

/// External executables the transport drives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Programs {
    /// Secure-copy executable (default: "scp").
    #[serde(default = "default_scp")]
    pub scp: String,
    /// Secure-shell executable used for remote commands (default: "ssh").
    #[serde(default = "default_ssh")]
    pub ssh: String,
    /// Remote byte-count command, split on whitespace (default: "wc -c").
    #[serde(default = "default_wc")]
    pub wc: String,
}

/// Session defaults applied when a session is created from config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    /// Remote login name; the transport's own default when unset.
    #[serde(default)]
    pub user: Option<String>,
    /// Remote working directory relative paths resolve against.
    #[serde(default)]
    pub cwd: Option<String>,
    /// Confirm every copy before running it.
    #[serde(default)]
    pub interactive: bool,
}

fn default_scp() -> String {
    "scp".to_string()
}

fn default_ssh() -> String {
    "ssh".to_string()
}

fn default_wc() -> String {
    "wc -c".to_string()
}

impl Programs {
    /// The byte-count command as separate words.
    pub fn wc_words(&self) -> Vec<String> {
        self.wc.split_whitespace().map(String::from).collect()
    }
}

impl Default for Programs {
    fn default() -> Self {
        Self {
            scp: default_scp(),
            ssh: default_ssh(),
            wc: default_wc(),
        }
    }
}
