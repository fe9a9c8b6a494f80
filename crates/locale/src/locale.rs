use serde::{Deserialize, Serialize};

use crate::LocaleError;

/// Supported display languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Arabic.
    Ar,
}

/// Text flow direction, always derived from the locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right.
    Ltr,
    /// Right to left.
    Rtl,
}

impl Locale {
    /// Convert to the wire/storage string (`"en"` or `"ar"`).
    pub fn as_wire(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    /// Parse from the wire/storage string.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "en" => Some(Locale::En),
            "ar" => Some(Locale::Ar),
            _ => None,
        }
    }

    /// The text direction for this locale.
    ///
    /// Arabic renders right-to-left; everything else renders left-to-right.
    /// The mapping is exhaustive and is the only way a `Direction` value is
    /// produced, so locale and direction can never disagree.
    pub fn direction(self) -> Direction {
        match self {
            Locale::Ar => Direction::Rtl,
            Locale::En => Direction::Ltr,
        }
    }
}

impl Direction {
    /// Convert to the wire string (`"ltr"` or `"rtl"`).
    pub fn as_wire(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl std::str::FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_wire(s).ok_or_else(|| LocaleError::UnknownLocale(s.to_string()))
    }
}

/// Snapshot of the active locale and its derived direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LocaleState {
    pub locale: Locale,
    pub direction: Direction,
}

impl LocaleState {
    /// Build the state for a locale; the direction is always derived.
    pub fn of(locale: Locale) -> Self {
        Self {
            locale,
            direction: locale.direction(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_is_rtl_iff_arabic() {
        assert_eq!(Locale::Ar.direction(), Direction::Rtl);
        assert_eq!(Locale::En.direction(), Direction::Ltr);
    }

    #[test]
    fn test_locale_wire_round_trip() {
        for locale in [Locale::En, Locale::Ar] {
            assert_eq!(Locale::from_wire(locale.as_wire()), Some(locale));
        }
        assert_eq!(Locale::from_wire("fr"), None);
    }

    #[test]
    fn test_locale_from_str_rejects_unknown() {
        let err = "de".parse::<Locale>().expect_err("should reject unknown");
        assert!(matches!(err, LocaleError::UnknownLocale(s) if s == "de"));
    }

    #[test]
    fn test_locale_state_direction_is_derived() {
        assert_eq!(LocaleState::of(Locale::Ar).direction, Direction::Rtl);
        assert_eq!(LocaleState::of(Locale::En).direction, Direction::Ltr);
    }

    #[test]
    fn test_locale_serde_uses_wire_strings() {
        assert_eq!(serde_json::to_string(&Locale::Ar).unwrap(), "\"ar\"");
        assert_eq!(serde_json::to_string(&Direction::Rtl).unwrap(), "\"rtl\"");
        let back: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(back, Locale::En);
    }
}
