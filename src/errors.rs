//! Errors.

/// Various errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid ISO-8601 duration '{0}', expected P<d>DT<h>H<m>M<s>S")]
    InvalidDurationFormat(String),
    #[error("invalid constructor arguments: {0}")]
    InvalidConstructorArguments(String),
    #[error("no '{key}' resource for locale '{locale}'")]
    MissingResource { locale: String, key: String },
    #[error("unknown format '{0}', expected short, long or iso")]
    UnknownFormat(String),
    #[error("unknown unit '{0}', expected days, hours, minutes or seconds")]
    UnknownUnit(String),
    #[error("bad config: {0}")]
    BadConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
