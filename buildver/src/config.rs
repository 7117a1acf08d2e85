// external crates
use serde::{Deserialize, Serialize};

/// Raw version strings as handed over by the build environment,
/// typically `rustc-env` values emitted by a build script. All fields
/// are opaque here; validation happens in [`crate::version::Version::build`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionConfig {
    /// Semver-formatted version string, e.g. `1.2.3` or `1.2.3-2-ga1b2c3d`.
    pub version: String,
    pub git_hash: String,
    pub git_branch: String,
    pub git_user: String,
    pub os: String,
    pub arch: String,
    pub compiler: String,
    /// Release tag; anything other than `production` or `prod` draws a warning.
    pub release: String,
    /// Build timestamp in Unix `date` default output format,
    /// e.g. `Thu Feb 14 15:04:05 SAST 2019`.
    pub timestamp: String,
}
