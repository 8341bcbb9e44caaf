//! Error types for sysprobe.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("user lookup failed: {0}")]
    UserLookup(String),

    #[error("hostname lookup failed: {0}")]
    HostnameLookup(String),

    #[error("tagline of {len} bytes does not fit before offset {limit}")]
    TaglineTooLong { len: usize, limit: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProbeError {
    /// Short label used in log events
    pub fn kind(&self) -> &'static str {
        match self {
            ProbeError::UserLookup(_) => "user_lookup",
            ProbeError::HostnameLookup(_) => "hostname_lookup",
            ProbeError::TaglineTooLong { .. } => "tagline_too_long",
            ProbeError::Io(_) => "io",
        }
    }
}
