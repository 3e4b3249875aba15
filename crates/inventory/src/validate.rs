//! Field validators.
//!
//! Each validator is a pure function from a candidate value to the value that
//! may be committed. Nothing is written on failure; the caller decides where
//! the accepted value goes.

use serde::{Deserialize, Serialize};

use stockcard_core::{DomainError, DomainResult};

use crate::status::CardStatus;

const MIN_TEXT_CHARS: usize = 2;

/// Arrival date in `DD.MM.YYYY` form.
///
/// Only the shape is checked; `99.99.9999` is a valid arrival date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ArrivalDate(String);

impl ArrivalDate {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        if !matches_date_pattern(raw) {
            return Err(DomainError::validation(
                "arrival date must use the format DD.MM.YYYY",
            ));
        }
        Ok(Self(raw.to_string()))
    }

    /// Empty placeholder used while a card is being staged.
    pub(crate) fn unset() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ArrivalDate {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ArrivalDate> for String {
    fn from(value: ArrivalDate) -> Self {
        value.0
    }
}

impl core::fmt::Display for ArrivalDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

fn matches_date_pattern(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}

fn has_min_chars(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

/// Name: at least two characters once trimmed. Stored as given.
pub fn name(value: &str) -> DomainResult<String> {
    if !has_min_chars(value, MIN_TEXT_CHARS) {
        return Err(DomainError::validation(
            "name must contain at least two characters",
        ));
    }
    Ok(value.to_string())
}

pub fn quantity(value: i64) -> DomainResult<u64> {
    u64::try_from(value).map_err(|_| DomainError::validation("quantity cannot be negative"))
}

pub fn status(value: &str) -> DomainResult<CardStatus> {
    CardStatus::parse(value)
}

/// Supplier: same rule as the name.
pub fn supplier(value: &str) -> DomainResult<String> {
    if !has_min_chars(value, MIN_TEXT_CHARS) {
        return Err(DomainError::validation("supplier must be specified"));
    }
    Ok(value.to_string())
}

pub fn cost(value: f64) -> DomainResult<f64> {
    if value.is_nan() {
        return Err(DomainError::validation("cost must be a number"));
    }
    if value < 0.0 {
        return Err(DomainError::validation("cost cannot be negative"));
    }
    Ok(value)
}

pub fn arrival_date(value: &str) -> DomainResult<ArrivalDate> {
    ArrivalDate::parse(value)
}

/// Article: non-empty once trimmed. Stored trimmed.
pub fn article(value: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation("article must be specified"));
    }
    Ok(trimmed.to_string())
}
