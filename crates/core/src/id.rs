//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Number of an inventory card.
///
/// Assigned by the ledger, starting at 1, and never reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardNumber(u64);

impl CardNumber {
    /// First number a fresh ledger hands out.
    pub const FIRST: CardNumber = CardNumber(1);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// The number following this one.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl core::fmt::Display for CardNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for CardNumber {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<CardNumber> for u64 {
    fn from(value: CardNumber) -> Self {
        value.0
    }
}

impl FromStr for CardNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u64>()
            .map_err(|e| DomainError::invalid_id(format!("CardNumber: {e}")))?;
        if value == 0 {
            return Err(DomainError::invalid_id("CardNumber: must be positive"));
        }
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_numbers() {
        assert_eq!(" 42 ".parse::<CardNumber>().unwrap(), CardNumber::new(42));
    }

    #[test]
    fn rejects_zero_and_garbage() {
        assert!(matches!("0".parse::<CardNumber>(), Err(DomainError::InvalidId(_))));
        assert!(matches!("-3".parse::<CardNumber>(), Err(DomainError::InvalidId(_))));
        assert!(matches!("abc".parse::<CardNumber>(), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn next_is_strictly_greater() {
        assert!(CardNumber::FIRST.next() > CardNumber::FIRST);
    }
}
