// standard library
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Code {
    InvalidSemver,
    InvalidTimestamp,
}

impl Code {
    pub fn as_str(&self) -> &str {
        match self {
            Self::InvalidSemver => "invalid_semver",
            Self::InvalidTimestamp => "invalid_timestamp",
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub trait Error: std::error::Error {
    fn code(&self) -> Code;
}

#[derive(Debug, Clone)]
pub struct Trace {
    pub file: &'static str,
    pub line: u32,
}

#[macro_export]
macro_rules! trace {
    () => {
        Box::new($crate::errors::Trace {
            file: file!(),
            line: line!(),
        })
    };
}

#[macro_export]
macro_rules! impl_error {
    ($enum_name:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::errors::Error for $enum_name {
            fn code(&self) -> $crate::errors::Code {
                match self {
                    $(Self::$variant(e) => e.code(),)+
                }
            }
        }
    };
}
