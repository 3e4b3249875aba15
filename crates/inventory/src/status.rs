use serde::{Deserialize, Serialize};

use stockcard_core::{DomainError, DomainResult};

/// Custody status of a card.
///
/// Canonical keys are the words operators type (`ожидание`, `учтено`,
/// `списано`); the English identifiers are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardStatus {
    #[serde(rename = "ожидание", alias = "pending")]
    Pending,
    #[serde(rename = "учтено", alias = "registered")]
    Registered,
    #[serde(rename = "списано", alias = "written_off")]
    WrittenOff,
}

impl CardStatus {
    pub const ALL: [CardStatus; 3] = [
        CardStatus::Pending,
        CardStatus::Registered,
        CardStatus::WrittenOff,
    ];

    /// Canonical key, as stored and compared.
    pub fn key(self) -> &'static str {
        match self {
            CardStatus::Pending => "ожидание",
            CardStatus::Registered => "учтено",
            CardStatus::WrittenOff => "списано",
        }
    }

    pub fn alias(self) -> &'static str {
        match self {
            CardStatus::Pending => "pending",
            CardStatus::Registered => "registered",
            CardStatus::WrittenOff => "written_off",
        }
    }

    /// Display label shown to operators.
    pub fn label(self) -> &'static str {
        match self {
            CardStatus::Pending => "Ожидание приема",
            CardStatus::Registered => "Состоит/принято к учету",
            CardStatus::WrittenOff => "Списано",
        }
    }

    /// Parse a raw operator-supplied value. Case is normalized; surrounding
    /// whitespace is not.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let lowered = raw.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.key() == lowered || status.alias() == lowered)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "unknown status `{raw}` (expected one of: {})",
                    Self::ALL.map(CardStatus::key).join(", ")
                ))
            })
    }
}

impl core::fmt::Display for CardStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.key())
    }
}

impl core::str::FromStr for CardStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(CardStatus::parse("УЧТЕНО").unwrap(), CardStatus::Registered);
        assert_eq!(CardStatus::parse("Ожидание").unwrap(), CardStatus::Pending);
        assert_eq!(CardStatus::parse("Written_Off").unwrap(), CardStatus::WrittenOff);
    }

    #[test]
    fn parse_rejects_unknown_values() {
        let err = CardStatus::parse("lost").unwrap_err();
        assert!(err.is_validation());
        assert!(CardStatus::parse(" учтено").is_err());
        assert!(CardStatus::parse("").is_err());
    }

    #[test]
    fn serializes_as_canonical_key() {
        let json = serde_json::to_string(&CardStatus::WrittenOff).unwrap();
        assert_eq!(json, "\"списано\"");

        let back: CardStatus = serde_json::from_str("\"registered\"").unwrap();
        assert_eq!(back, CardStatus::Registered);
    }
}
