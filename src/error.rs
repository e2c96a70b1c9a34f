// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    /// A timer had to be scheduled but no tokio runtime was running.
    NoRuntime,
    /// A severity tag that is not one of the known levels.
    UnknownSeverity(String),
    /// The global helpers were used before [`crate::feedback::install`].
    NotInstalled,
    /// [`crate::feedback::install`] was called a second time.
    AlreadyInstalled,
    /// A pending confirmation was replaced by a newer one before it was answered.
    ConfirmSuperseded,
    /// The confirm store went away while a confirmation was still pending.
    ConfirmAbandoned,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::NoRuntime => write!(f, "No async runtime available to schedule timers"),
            Error::UnknownSeverity(tag) => write!(f, "Unknown severity: {}", tag),
            Error::NotInstalled => write!(f, "Feedback helpers are not installed"),
            Error::AlreadyInstalled => write!(f, "Feedback helpers are already installed"),
            Error::ConfirmSuperseded => {
                write!(f, "Confirmation was superseded by a newer request")
            }
            Error::ConfirmAbandoned => write!(f, "Confirmation was abandoned"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
