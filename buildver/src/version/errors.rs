// standard library
use std::fmt;

// internal crates
use crate::errors::{Code, Trace};

#[derive(Debug, thiserror::Error)]
#[error("failed to parse semantic version '{input}': {source}")]
pub struct SemverParseErr {
    pub input: String,
    pub source: semver::Error,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for SemverParseErr {
    fn code(&self) -> Code {
        Code::InvalidSemver
    }
}

#[derive(Debug, thiserror::Error)]
#[error("failed to parse build timestamp '{input}': {source}")]
pub struct TimestampParseErr {
    pub input: String,
    pub source: UnixDateErr,
    pub trace: Box<Trace>,
}

impl crate::errors::Error for TimestampParseErr {
    fn code(&self) -> Code {
        Code::InvalidTimestamp
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UnixDateErr {
    FieldCount { found: usize },
    Zone { zone: String },
    DateTime(#[from] chrono::ParseError),
}

impl fmt::Display for UnixDateErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount { found } => {
                write!(f, "expected 6 whitespace-separated fields, found {}", found)
            }
            Self::Zone { zone } => {
                write!(f, "timezone field '{}' is not an abbreviation", zone)
            }
            Self::DateTime(e) => write!(f, "{}", e),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BuildErr {
    #[error(transparent)]
    SemverParseErr(SemverParseErr),
    #[error(transparent)]
    TimestampParseErr(TimestampParseErr),
}

crate::impl_error!(BuildErr { SemverParseErr, TimestampParseErr });
