//! Error types for the translation client.
//!
//! # Design
//! Configuration problems (a client that was never fully set up) and input
//! problems (a caller handing over nothing to translate) get their own enums so
//! callers can tell a deployment bug from a caller bug. Everything that can go
//! wrong once a request is on its way lands in one of the remaining
//! `TranslateError` variants.
//!
//! Query operations never drop what they already know: their error half is a
//! `Failure<T>`, which pairs the error with the partially populated result.

use std::fmt;

use thiserror::Error;

/// Missing or invalid connection configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("protocol is required")]
    ProtocolRequired,

    #[error("host is required")]
    HostRequired,

    #[error("port is required")]
    PortRequired,

    #[error("origin is required")]
    OriginRequired,

    #[error("environment variable {var} is not set")]
    MissingVar { var: &'static str },

    #[error("environment variable {var} has an invalid value: {value:?}")]
    InvalidVar { var: &'static str, value: String },
}

/// Problems with what the caller asked to translate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("no message to translate")]
    EmptySubject,

    #[error("{0:?} is not a valid filter, valid filters are locale, origin")]
    UnknownFilter(String),
}

/// The six classes of failure a caller can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Input,
    UrlConstruction,
    Network,
    Remote,
    Decode,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    /// The request URL could not be built from the configured parts.
    #[error("invalid request URL: {0}")]
    UrlConstruction(String),

    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-200 status and an error envelope.
    #[error("translation service returned HTTP {status}: {message}")]
    Remote { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl TranslateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TranslateError::Configuration(_) => ErrorKind::Configuration,
            TranslateError::Input(_) => ErrorKind::Input,
            TranslateError::UrlConstruction(_) => ErrorKind::UrlConstruction,
            TranslateError::Network(_) => ErrorKind::Network,
            TranslateError::Remote { .. } => ErrorKind::Remote,
            TranslateError::Decode(_) => ErrorKind::Decode,
        }
    }
}

/// A failed query together with whatever result data was safely available.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure<T> {
    pub partial: T,
    pub error: TranslateError,
}

impl<T> Failure<T> {
    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }

    pub fn into_error(self) -> TranslateError {
        self.error
    }
}

impl<T> fmt::Display for Failure<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl<T: fmt::Debug> std::error::Error for Failure<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
