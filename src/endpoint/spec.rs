//! Endpoint specifier: local path or `[user@]host:path`.

use std::fmt;
use std::path::Path;

/// A copy endpoint as handed to the secure-copy executable.
///
/// Either a local filesystem path or a remote specifier of the form
/// `[user@]host:path`. Locality is decided purely from the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EndpointSpec(String);

impl EndpointSpec {
    pub fn new(spec: impl Into<String>) -> Self {
        Self(spec.into())
    }

    /// Build `[user@]host:path`.
    pub fn remote(user: Option<&str>, host: &str, path: &str) -> Self {
        let target = super::remote_target(user, host);
        Self(format!("{}:{}", target, path))
    }

    /// True when the spec carries a `host:` prefix.
    pub fn is_remote(&self) -> bool {
        !is_local(&self.0)
    }

    /// True when the spec is local and names an existing directory.
    pub fn is_local_directory(&self) -> bool {
        is_local(&self.0) && is_directory(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EndpointSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EndpointSpec {
    fn from(spec: &str) -> Self {
        Self::new(spec)
    }
}

impl From<String> for EndpointSpec {
    fn from(spec: String) -> Self {
        Self(spec)
    }
}

impl AsRef<str> for EndpointSpec {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Whether `spec` refers to the local filesystem.
///
/// A spec is remote when it starts with one or more characters, none of them
/// a colon or a path separator, followed by a colon. `./a:b` and `/tmp/x:y`
/// are local; `host:`, `host:file` and `user@host:dir/file` are remote.
pub fn is_local(spec: &str) -> bool {
    match spec.find(':') {
        Some(0) | None => true,
        Some(colon) => spec[..colon].contains('/'),
    }
}

/// Whether a local path names an existing directory.
///
/// Only consulted for the recursion decision; never used to validate a
/// destination.
pub fn is_directory(path: &str) -> bool {
    Path::new(path).is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_are_local() {
        assert!(is_local("file.txt"));
        assert!(is_local("/var/log/syslog"));
        assert!(is_local("relative/dir/"));
        assert!(is_local(""));
    }

    #[test]
    fn host_prefix_is_remote() {
        assert!(!is_local("host:file.txt"));
        assert!(!is_local("host:"));
        assert!(!is_local("alice@example.com:/etc/hosts"));
    }

    #[test]
    fn colon_after_separator_stays_local() {
        assert!(is_local("./odd:name"));
        assert!(is_local("/tmp/a:b"));
        assert!(is_local("dir/sub:file"));
    }

    #[test]
    fn leading_colon_is_local() {
        assert!(is_local(":file"));
    }

    #[test]
    fn remote_constructor_formats_target() {
        assert_eq!(
            EndpointSpec::remote(Some("bob"), "box", "/srv/a").as_str(),
            "bob@box:/srv/a"
        );
        assert_eq!(EndpointSpec::remote(None, "box", "a").as_str(), "box:a");
        assert!(EndpointSpec::remote(None, "box", "a").is_remote());
    }

    #[test]
    fn local_directory_detection() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("f.txt");
        std::fs::write(&file, b"x").unwrap();

        let dir_spec = EndpointSpec::new(dir.path().to_string_lossy().into_owned());
        let file_spec = EndpointSpec::new(file.to_string_lossy().into_owned());

        assert!(dir_spec.is_local_directory());
        assert!(!file_spec.is_local_directory());
        assert!(!EndpointSpec::new("host:/tmp").is_local_directory());
    }
}
