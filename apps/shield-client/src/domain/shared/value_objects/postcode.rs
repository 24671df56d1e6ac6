//! Postcode value object.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

// The service area covers Edinburgh ("EH") postcodes only; the server's API
// expects the space replaced by an underscore.
#[allow(clippy::expect_used)]
static POSTCODE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^EH[1-9][0-7]?_[1-9][A-Z][A-Z]$").expect("postcode pattern is valid"));

/// A location identifier in the service's normalized underscore form,
/// e.g. `EH8_9LE`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Postcode(String);

impl Postcode {
    /// Normalize and validate a raw postcode.
    ///
    /// A single space separator is accepted and normalized to `_`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPostcode`] if the normalized form does not match
    /// the service-area format.
    pub fn parse(raw: &str) -> Result<Self, InvalidPostcode> {
        let normalized = raw.trim().replace(' ', "_");
        if !POSTCODE_SHAPE.is_match(&normalized) {
            return Err(InvalidPostcode { raw: raw.to_owned() });
        }
        Ok(Self(normalized))
    }

    /// The normalized postcode as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error returned when a postcode does not match the service-area format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPostcode {
    /// The rejected input.
    pub raw: String,
}

impl fmt::Display for InvalidPostcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a valid service-area postcode", self.raw)
    }
}

impl std::error::Error for InvalidPostcode {}
