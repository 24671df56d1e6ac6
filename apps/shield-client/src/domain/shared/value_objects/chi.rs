//! CHI number value object.

use std::fmt;
use std::sync::LazyLock;

use chrono::{NaiveDate, Utc};
use regex::Regex;

#[allow(clippy::expect_used)]
static CHI_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("CHI pattern is valid"));

/// A Community Health Index number identifying a shielding individual.
///
/// Ten digits, the leading six of which are the individual's date of birth
/// in `ddmmyy` form. The birth date must lie strictly in the past.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chi(String);

impl Chi {
    /// Validate and wrap a raw CHI number.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidChi`] if the input is not ten digits or its leading
    /// six digits are not a past calendar date.
    pub fn new(raw: &str) -> Result<Self, InvalidChi> {
        if !CHI_SHAPE.is_match(raw) {
            return Err(InvalidChi::Shape);
        }
        let birth_date = NaiveDate::parse_from_str(&raw[..6], "%d%m%y")
            .map_err(|_| InvalidChi::BirthDate)?;
        if birth_date >= Utc::now().date_naive() {
            return Err(InvalidChi::BirthDate);
        }
        Ok(Self(raw.to_owned()))
    }

    /// The CHI number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Chi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reasons a CHI number fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidChi {
    /// Not exactly ten ASCII digits.
    Shape,
    /// The leading six digits are not a calendar date in the past.
    BirthDate,
}

impl fmt::Display for InvalidChi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape => write!(f, "CHI number must be exactly ten digits"),
            Self::BirthDate => {
                write!(f, "CHI number must start with a past date of birth in ddmmyy form")
            }
        }
    }
}

impl std::error::Error for InvalidChi {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_chi() {
        let chi = Chi::new("0101901234").unwrap();
        assert_eq!(chi.as_str(), "0101901234");
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(Chi::new("123456789").unwrap_err(), InvalidChi::Shape);
        assert_eq!(Chi::new("12345678901").unwrap_err(), InvalidChi::Shape);
    }

    #[test]
    fn rejects_non_digits() {
        assert_eq!(Chi::new("01019O1234").unwrap_err(), InvalidChi::Shape);
    }

    #[test]
    fn rejects_impossible_birth_date() {
        assert_eq!(Chi::new("9999991234").unwrap_err(), InvalidChi::BirthDate);
        assert_eq!(Chi::new("3202901234").unwrap_err(), InvalidChi::BirthDate);
    }

    #[test]
    fn rejects_future_birth_date() {
        // %y maps 68 to 2068.
        assert_eq!(Chi::new("0101681234").unwrap_err(), InvalidChi::BirthDate);
    }

    #[test]
    fn display_round_trips() {
        let chi = Chi::new("3112991234").unwrap();
        assert_eq!(chi.to_string(), "3112991234");
    }
}
