//! Response shapes exchanged with the translation service.
//!
//! # Design
//! `ApiResponse` and `LocaleResponse` mirror the service's JSON. `Response` is
//! what callers get back from a translation; it is serializable so callers
//! can pass it along unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of a translation.
///
/// `information` is empty on success and holds the error explanation on
/// failure, in which case `original` and `translated` may be empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Response {
    pub original: String,
    pub translated: String,
    pub information: String,
}

impl Response {
    pub(crate) fn failed(information: impl Into<String>) -> Self {
        Self {
            information: information.into(),
            ..Self::default()
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.translated)
    }
}

/// The `{message}` envelope the service uses for translations and errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Locale {
    pub locale: String,
    pub name: String,
}

/// Supported locales. Both fields default so that the plain `{message}`
/// error envelope also decodes as a `LocaleResponse`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleResponse {
    #[serde(default)]
    pub locales: Vec<Locale>,
    #[serde(default)]
    pub message: String,
}

impl LocaleResponse {
    pub(crate) fn failed(message: impl Into<String>) -> Self {
        Self {
            locales: Vec::new(),
            message: message.into(),
        }
    }
}
