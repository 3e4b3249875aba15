//! Typed field updates.
//!
//! `CardUpdate` is the closed set of changes a card accepts. The card number
//! has no variant, so it cannot be rewritten. Operator input naming a field by
//! string goes through `CardField` first, which rejects unknown names.

use core::str::FromStr;

use stockcard_core::{DomainError, DomainResult};

use crate::card::{Card, CardDraft};
use crate::validate;

/// Name of an updatable card field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardField {
    Name,
    Quantity,
    Status,
    Supplier,
    Manufacturer,
    Cost,
    Location,
    ArrivalDate,
    Article,
    Responsible,
    Notes,
}

impl CardField {
    pub const ALL: [CardField; 11] = [
        CardField::Name,
        CardField::Quantity,
        CardField::Status,
        CardField::Supplier,
        CardField::Manufacturer,
        CardField::Cost,
        CardField::Location,
        CardField::ArrivalDate,
        CardField::Article,
        CardField::Responsible,
        CardField::Notes,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CardField::Name => "name",
            CardField::Quantity => "quantity",
            CardField::Status => "status",
            CardField::Supplier => "supplier",
            CardField::Manufacturer => "manufacturer",
            CardField::Cost => "cost",
            CardField::Location => "location",
            CardField::ArrivalDate => "arrival_date",
            CardField::Article => "article",
            CardField::Responsible => "responsible",
            CardField::Notes => "notes",
        }
    }
}

impl core::fmt::Display for CardField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "number" {
            return Err(DomainError::validation("field `number` cannot be changed"));
        }
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown field `{s}`")))
    }
}

/// One field change.
#[derive(Debug, Clone, PartialEq)]
pub enum CardUpdate {
    Name(String),
    Quantity(i64),
    Status(String),
    Supplier(String),
    Manufacturer(String),
    Cost(f64),
    Location(String),
    ArrivalDate(String),
    Article(String),
    Responsible(String),
    Notes(String),
}

impl CardUpdate {
    /// Build an update from a field and raw operator text.
    ///
    /// Numeric fields are parsed here; field rules are still checked when the
    /// update is applied.
    pub fn from_raw(field: CardField, raw: &str) -> DomainResult<Self> {
        Ok(match field {
            CardField::Name => CardUpdate::Name(raw.to_string()),
            CardField::Quantity => CardUpdate::Quantity(
                raw.trim()
                    .parse()
                    .map_err(|_| DomainError::validation("quantity must be an integer"))?,
            ),
            CardField::Status => CardUpdate::Status(raw.to_string()),
            CardField::Supplier => CardUpdate::Supplier(raw.to_string()),
            CardField::Manufacturer => CardUpdate::Manufacturer(raw.to_string()),
            CardField::Cost => CardUpdate::Cost(
                raw.trim()
                    .parse()
                    .map_err(|_| DomainError::validation("cost must be a number"))?,
            ),
            CardField::Location => CardUpdate::Location(raw.to_string()),
            CardField::ArrivalDate => CardUpdate::ArrivalDate(raw.to_string()),
            CardField::Article => CardUpdate::Article(raw.to_string()),
            CardField::Responsible => CardUpdate::Responsible(raw.to_string()),
            CardField::Notes => CardUpdate::Notes(raw.to_string()),
        })
    }

    /// Parse a `(field name, raw value)` pair.
    pub fn parse(field: &str, raw: &str) -> DomainResult<Self> {
        Self::from_raw(field.parse()?, raw)
    }
}

impl Card {
    /// Validate and write one field. On error the card is untouched.
    pub(crate) fn apply(&mut self, update: CardUpdate) -> DomainResult<()> {
        match update {
            CardUpdate::Name(v) => self.name = validate::name(&v)?,
            CardUpdate::Quantity(v) => self.quantity = validate::quantity(v)?,
            CardUpdate::Status(v) => self.status = validate::status(&v)?,
            CardUpdate::Supplier(v) => self.supplier = validate::supplier(&v)?,
            CardUpdate::Cost(v) => self.cost = validate::cost(v)?,
            CardUpdate::ArrivalDate(v) => self.arrival_date = validate::arrival_date(&v)?,
            CardUpdate::Article(v) => self.article = validate::article(&v)?,
            CardUpdate::Manufacturer(v) => self.manufacturer = v,
            CardUpdate::Location(v) => self.location = v,
            CardUpdate::Responsible(v) => self.responsible = v,
            CardUpdate::Notes(v) => self.notes = v,
        }
        Ok(())
    }
}

impl CardDraft {
    /// Split into unvalidated fields and the validated ones, the latter in the
    /// order they are checked at creation.
    pub(crate) fn into_updates(self) -> ([CardUpdate; 4], [CardUpdate; 7]) {
        let free = [
            CardUpdate::Manufacturer(self.manufacturer),
            CardUpdate::Location(self.location),
            CardUpdate::Responsible(self.responsible),
            CardUpdate::Notes(self.notes),
        ];
        let validated = [
            CardUpdate::Name(self.name),
            CardUpdate::Quantity(self.quantity),
            CardUpdate::Status(self.status),
            CardUpdate::Supplier(self.supplier),
            CardUpdate::Cost(self.cost),
            CardUpdate::Article(self.article),
            CardUpdate::ArrivalDate(self.arrival_date),
        ];
        (free, validated)
    }
}
