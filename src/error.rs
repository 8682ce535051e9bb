use std::io;

/// A enum that contains the different types of errors that the library returns as part of Result's.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// None of the four character classes was enabled.
    NoCharacterClass,
    /// The requested password length is outside of the supported range.
    InvalidLength(usize),
    /// A breach check was requested for an empty string.
    EmptyCandidate,
    /// There is no current password to operate on.
    NoPassword,
    /// No history entry exists at that position.
    HistoryIndex(usize),
    /// Another breach check is still pending.
    CheckInFlight,
    Clipboard(arboard::Error),
    Network(reqwest::Error),
    Parse(String),
    Config(config::ConfigError),
    Io(io::Error),
    Generic(&'static str),
}

impl Error {
    /// Returns true for errors caused by user input, these are recovered locally and never
    /// touch the network.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::NoCharacterClass
                | Self::InvalidLength(_)
                | Self::EmptyCandidate
                | Self::NoPassword
                | Self::HistoryIndex(_)
        )
    }
}

impl From<arboard::Error> for Error {
    fn from(err: arboard::Error) -> Self {
        Self::Clipboard(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err)
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<std::num::ParseIntError> for Error {
    fn from(err: std::num::ParseIntError) -> Self {
        Self::Parse(err.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NoCharacterClass => write!(f, "no character class selected"),
            Self::InvalidLength(len) => write!(
                f,
                "password length {len} is outside of {}..={}",
                crate::generator::MIN_LENGTH,
                crate::generator::MAX_LENGTH
            ),
            Self::EmptyCandidate => write!(f, "enter a password to check"),
            Self::NoPassword => write!(f, "no password has been generated"),
            Self::HistoryIndex(idx) => write!(f, "no history entry at position {idx}"),
            Self::CheckInFlight => write!(f, "a breach check is already running"),
            Self::Clipboard(err) => write!(f, "{err}"),
            Self::Network(err) => write!(f, "{err}"),
            Self::Parse(err) => write!(f, "malformed range response: {err}"),
            Self::Config(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
            Self::Generic(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {}

/// Convenience type for Results
pub type Result<T> = std::result::Result<T, Error>;
