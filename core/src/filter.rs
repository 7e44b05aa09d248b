//! Query filters attached to translation requests.
//!
//! The set of keys the service understands is closed, so it is an enum. A
//! string key from the outside world goes through `FromStr`, which is the only
//! place an unknown key can be rejected.

use std::fmt;
use std::str::FromStr;

use crate::error::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    Locale,
    Origin,
}

impl FilterKey {
    pub const ALL: [FilterKey; 2] = [FilterKey::Locale, FilterKey::Origin];

    /// Query parameter name on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            FilterKey::Locale => "locale",
            FilterKey::Origin => "origin",
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKey {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| InputError::UnknownFilter(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    key: FilterKey,
    value: String,
}

impl Filter {
    pub fn new(key: FilterKey, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }

    pub fn key(&self) -> FilterKey {
        self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_parse() {
        assert_eq!("locale".parse::<FilterKey>(), Ok(FilterKey::Locale));
        assert_eq!("origin".parse::<FilterKey>(), Ok(FilterKey::Origin));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert_eq!(
            "colour".parse::<FilterKey>(),
            Err(InputError::UnknownFilter("colour".to_string()))
        );
        // Keys are matched exactly.
        assert!("Locale".parse::<FilterKey>().is_err());
        assert!("".parse::<FilterKey>().is_err());
    }

    #[test]
    fn wire_names_round_trip() {
        for key in FilterKey::ALL {
            assert_eq!(key.to_string().parse::<FilterKey>(), Ok(key));
        }
    }
}
