//! Dietary preference of a food box or an individual.

use std::fmt;

/// Dietary preference, with the wire strings used by the remote authority.
///
/// `None` is a concrete tag stored server-side meaning "no restriction";
/// `NoPreference` (the empty wire string) is the absence of a filter and
/// matches every box. The two must not be collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DietaryPreference {
    /// The box carries no dietary restriction.
    None,
    /// No filter expressed; matches every box.
    NoPreference,
    /// Pollotarian contents.
    Pollotarian,
    /// Vegan contents.
    Vegan,
}

impl DietaryPreference {
    /// The canonical wire string for this preference.
    #[must_use]
    pub const fn as_wire_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::NoPreference => "",
            Self::Pollotarian => "pollotarian",
            Self::Vegan => "vegan",
        }
    }

    /// Parse a wire string; unknown strings are a parse failure, never a
    /// default variant.
    #[must_use]
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "none" => Some(Self::None),
            "" => Some(Self::NoPreference),
            "pollotarian" => Some(Self::Pollotarian),
            "vegan" => Some(Self::Vegan),
            _ => None,
        }
    }

    /// Whether a box tagged `diet` satisfies this preference.
    #[must_use]
    pub fn matches(&self, diet: Self) -> bool {
        matches!(self, Self::NoPreference) || *self == diet
    }
}

impl fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(DietaryPreference::None, "none")]
    #[test_case(DietaryPreference::NoPreference, "")]
    #[test_case(DietaryPreference::Pollotarian, "pollotarian")]
    #[test_case(DietaryPreference::Vegan, "vegan")]
    fn wire_strings_round_trip(preference: DietaryPreference, wire: &str) {
        assert_eq!(preference.as_wire_str(), wire);
        assert_eq!(DietaryPreference::from_wire(wire), Some(preference));
    }

    #[test]
    fn unknown_wire_string_fails_to_parse() {
        assert_eq!(DietaryPreference::from_wire("carnivore"), None);
        assert_eq!(DietaryPreference::from_wire("NONE"), None);
    }

    #[test]
    fn no_preference_matches_everything() {
        for diet in [
            DietaryPreference::None,
            DietaryPreference::Pollotarian,
            DietaryPreference::Vegan,
        ] {
            assert!(DietaryPreference::NoPreference.matches(diet));
        }
    }

    #[test]
    fn concrete_preference_matches_only_itself() {
        assert!(DietaryPreference::Vegan.matches(DietaryPreference::Vegan));
        assert!(!DietaryPreference::Vegan.matches(DietaryPreference::None));
        assert!(!DietaryPreference::None.matches(DietaryPreference::Vegan));
    }
}
