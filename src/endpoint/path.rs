//! Remote path helpers.

/// `user@host`, or just `host` when no user is set.
pub fn remote_target(user: Option<&str>, host: &str) -> String {
    match user {
        Some(user) if !user.is_empty() => format!("{}@{}", user, host),
        _ => host.to_string(),
    }
}

/// Split `[user@]host` into its optional user and host.
///
/// The last `@` separates the two; an empty user counts as none.
pub fn split_target(target: &str) -> (Option<&str>, &str) {
    match target.rsplit_once('@') {
        Some((user, host)) if !user.is_empty() => (Some(user), host),
        Some((_, host)) => (None, host),
        None => (None, target),
    }
}

/// Prefix `path` with `cwd` unless it is already absolute.
pub fn resolve_remote(cwd: Option<&str>, path: &str) -> String {
    match cwd {
        Some(cwd) if !path.starts_with('/') => {
            if cwd.ends_with('/') {
                format!("{}{}", cwd, path)
            } else {
                format!("{}/{}", cwd, path)
            }
        }
        _ => path.to_string(),
    }
}

/// Final path component, with any trailing separators ignored.
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}
