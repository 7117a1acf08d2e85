// standard library
use std::fmt;

// internal crates
use crate::config::VersionConfig;
use crate::trace;
use crate::version::errors::{BuildErr, SemverParseErr, TimestampParseErr};

// external crates
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

pub mod errors;
mod timestamp;

/// Release tags that do not draw a non-production warning. Matching is
/// exact: case-sensitive, no trimming.
pub const PRODUCTION_RELEASES: [&str; 2] = ["production", "prod"];

// ================================ VERSION ========================================= //

/// Validated build metadata. Constructed once per process via
/// [`Version::build`]; every field is read-only afterwards.
#[derive(Clone, Debug, Serialize)]
pub struct Version {
    semver: semver::Version,
    pre: Vec<String>,
    git_hash: String,
    git_branch: String,
    git_user: String,
    os: String,
    arch: String,
    compiler: String,
    release: String,
    timestamp: DateTime<Utc>,
    warnings: Vec<String>,
}

impl Version {
    /// Validates `config` into a `Version`. Fails atomically: a semver
    /// or timestamp parse error returns `Err` and no record.
    ///
    /// Warnings are collected in a fixed order: the pre-release check
    /// first, then the release-tag check.
    pub fn build(config: &VersionConfig) -> Result<Version, BuildErr> {
        let semver = semver::Version::parse(&config.version).map_err(|e| {
            BuildErr::SemverParseErr(SemverParseErr {
                input: config.version.clone(),
                source: e,
                trace: trace!(),
            })
        })?;

        let timestamp = timestamp::parse_unix_date(&config.timestamp).map_err(|e| {
            BuildErr::TimestampParseErr(TimestampParseErr {
                input: config.timestamp.clone(),
                source: e,
                trace: trace!(),
            })
        })?;

        // dot-separated pre-release identifiers, e.g. "2-ga1b2c3d" or "alpha.1"
        let pre: Vec<String> = if semver.pre.is_empty() {
            Vec::new()
        } else {
            semver.pre.as_str().split('.').map(str::to_string).collect()
        };

        let mut warnings = Vec::new();
        if !pre.is_empty() {
            warnings.push(format!(
                "This version is tagged as a pre-release \"[{}]\". Please don't use in production.",
                pre.join(", ")
            ));
        }
        if !PRODUCTION_RELEASES.contains(&config.release.as_str()) {
            warnings.push(format!(
                "This version is tagged as release \"{}\". Please don't use in production.",
                config.release
            ));
        }

        Ok(Version {
            semver,
            pre,
            git_hash: config.git_hash.clone(),
            git_branch: config.git_branch.clone(),
            git_user: config.git_user.clone(),
            os: config.os.clone(),
            arch: config.arch.clone(),
            compiler: config.compiler.clone(),
            release: config.release.clone(),
            timestamp,
            warnings,
        })
    }

    /// The complete semantic version as a string.
    pub fn semver(&self) -> String {
        self.semver.to_string()
    }

    pub fn major(&self) -> u64 {
        self.semver.major
    }

    pub fn minor(&self) -> u64 {
        self.semver.minor
    }

    pub fn patch(&self) -> u64 {
        self.semver.patch
    }

    /// The first pre-release identifier, or `""` when the version has
    /// none. Safe to call unconditionally.
    pub fn pre(&self) -> &str {
        self.pre.first().map_or("", String::as_str)
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn git_hash(&self) -> &str {
        &self.git_hash
    }

    pub fn git_branch(&self) -> &str {
        &self.git_branch
    }

    pub fn git_user(&self) -> &str {
        &self.git_user
    }

    pub fn os(&self) -> &str {
        &self.os
    }

    pub fn arch(&self) -> &str {
        &self.arch
    }

    pub fn compiler(&self) -> &str {
        &self.compiler
    }

    pub fn release(&self) -> &str {
        &self.release
    }

    /// The build timestamp as an absolute instant.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// The build timestamp in RFC 3339 form.
    pub fn timestamp_rfc3339(&self) -> String {
        self.timestamp.to_rfc3339()
    }

    /// Emits each advisory warning at `warn` level. `build` itself
    /// never logs; callers that want the warnings surfaced at startup
    /// invoke this explicitly.
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.semver)
    }
}
