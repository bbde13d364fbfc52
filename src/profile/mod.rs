//! Profile management module
//!
//! Named profiles bundle connection parameters (server, username, password)
//! for one or more GoCD servers, read from `~/.gocd.conf`.

mod models;
mod resolve;
mod store;

pub use models::{Profile, ProfileConfig, ProfileEntry, ProfileOverrides};
pub use resolve::{resolve_profile, resolve_profile_name};
pub use store::ProfileStore;
