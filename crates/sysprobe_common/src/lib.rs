//! Shared diagnostic logic for sysprobe.
//!
//! Everything that does not touch the process environment lives here so the
//! binary stays a thin wrapper around [`report::Probe`].

pub mod align;
pub mod buffer;
pub mod clock;
pub mod error;
pub mod identity;
pub mod layout;
pub mod report;
pub mod username;

pub use error::ProbeError;
pub use identity::{Identity, IdentitySource, SystemIdentity};
pub use layout::ProbeLayout;
pub use report::Probe;
