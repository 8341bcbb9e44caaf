//! Username cleanup for `HOST\user` style account names.

/// Strip a leading hostname, then at most one leading backslash.
///
/// Works on empty inputs: an empty hostname is a prefix of everything and
/// strips nothing.
pub fn normalize_username(username: &str, hostname: &str) -> String {
    let rest = username.strip_prefix(hostname).unwrap_or(username);
    let rest = rest.strip_prefix('\\').unwrap_or(rest);
    rest.to_string()
}

/// `user@host`, used as a synthetic mail address
pub fn email_for(username: &str, hostname: &str) -> String {
    format!("{}@{}", username, hostname)
}
