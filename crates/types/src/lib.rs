/// Errors that can occur when creating validated identifier types.
#[derive(Debug, thiserror::Error)]
pub enum IdError {
    /// The input was empty or contained only whitespace
    #[error("identifier cannot be empty")]
    Empty,
    /// The input contained characters outside the printable ASCII range
    #[error("identifier contains non-printable or non-ASCII characters")]
    InvalidCharacters,
}

/// An opaque record identifier.
///
/// Identifiers arrive from the upstream data source as short printable
/// strings (`"PT001"`, `"apt-003"`, `"icu"`). This type guarantees the
/// value is non-empty, trimmed, and printable ASCII, so it can be embedded
/// in URLs and log lines without further checks. Uniqueness is a property
/// of the listing that carries the record, not of the identifier itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    /// Creates a new `RecordId` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. The trimmed
    /// result must be non-empty and consist of printable ASCII characters.
    pub fn new(input: impl AsRef<str>) -> Result<Self, IdError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(IdError::Empty);
        }
        if !trimmed.bytes().all(|b| (0x21..=0x7e).contains(&b)) {
            return Err(IdError::InvalidCharacters);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for RecordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RecordId::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_accepts_typical_identifiers() {
        assert_eq!(RecordId::new("PT001").unwrap().as_str(), "PT001");
        assert_eq!(RecordId::new("apt-003").unwrap().as_str(), "apt-003");
        assert_eq!(RecordId::new("  icu  ").unwrap().as_str(), "icu");
    }

    #[test]
    fn test_record_id_rejects_empty_input() {
        assert!(matches!(RecordId::new(""), Err(IdError::Empty)));
        assert!(matches!(RecordId::new("   "), Err(IdError::Empty)));
    }

    #[test]
    fn test_record_id_rejects_non_printable_input() {
        assert!(matches!(
            RecordId::new("PT\u{0}01"),
            Err(IdError::InvalidCharacters)
        ));
        assert!(matches!(
            RecordId::new("معرف"),
            Err(IdError::InvalidCharacters)
        ));
        // Interior whitespace survives trimming and is rejected too.
        assert!(matches!(
            RecordId::new("PT 001"),
            Err(IdError::InvalidCharacters)
        ));
    }

    #[test]
    fn test_record_id_serde_round_trip() {
        let id = RecordId::new("D-5023").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"D-5023\"");
        let back: RecordId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_record_id_deserialize_rejects_invalid() {
        assert!(serde_json::from_str::<RecordId>("\"  \"").is_err());
    }
}
