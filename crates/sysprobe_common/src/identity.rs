//! Current user and host lookup.
//!
//! The lookups sit behind [`IdentitySource`] so the report can run against
//! canned values in tests.

use crate::error::ProbeError;
use nix::unistd::{getuid, gethostname, User};
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

/// Passwd record of the process owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub uid: u32,
    pub gid: u32,
    pub username: String,
    /// Full name from the GECOS field
    pub name: String,
    pub home_dir: PathBuf,
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{Uid:{} Gid:{} Username:{} Name:{} HomeDir:{}}}",
            self.uid,
            self.gid,
            self.username,
            self.name,
            self.home_dir.display()
        )
    }
}

impl From<User> for Identity {
    fn from(user: User) -> Self {
        let gecos = user.gecos.to_string_lossy();
        // Only the first GECOS subfield is the full name
        let name = gecos.split(',').next().unwrap_or_default().to_string();

        Self {
            uid: user.uid.as_raw(),
            gid: user.gid.as_raw(),
            username: user.name,
            name,
            home_dir: user.dir,
        }
    }
}

/// Where the user record and hostname come from
pub trait IdentitySource {
    fn current_user(&self) -> Result<Identity, ProbeError>;
    fn hostname(&self) -> Result<String, ProbeError>;
}

/// Reads the passwd database and the kernel hostname
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemIdentity;

impl IdentitySource for SystemIdentity {
    fn current_user(&self) -> Result<Identity, ProbeError> {
        let uid = getuid();
        debug!(uid = uid.as_raw(), "looking up passwd entry");

        let user = User::from_uid(uid)
            .map_err(|e| ProbeError::UserLookup(format!("uid {}: {}", uid.as_raw(), e)))?
            .ok_or_else(|| ProbeError::UserLookup(format!("unknown userid {}", uid.as_raw())))?;

        Ok(Identity::from(user))
    }

    fn hostname(&self) -> Result<String, ProbeError> {
        let raw = gethostname().map_err(|e| ProbeError::HostnameLookup(e.to_string()))?;
        raw.into_string()
            .map_err(|raw| ProbeError::HostnameLookup(format!("hostname {:?} is not UTF-8", raw)))
    }
}
