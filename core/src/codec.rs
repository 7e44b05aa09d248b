//! Path-safe text codec.
//!
//! Subjects and filter values are percent-encoded before they are placed in a
//! request URL, and locale fields coming back from the service are decoded with
//! the inverse. Every byte other than ASCII alphanumerics and `-._~` is escaped.

use crate::error::TranslateError;

pub fn encode(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}

pub fn decode(text: &str) -> Result<String, TranslateError> {
    urlencoding::decode(text)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| TranslateError::Decode(format!("{text:?} is not path-safe text: {e}")))
}
