use serde::Serialize;

use stockcard_core::{CardNumber, Entity};

use crate::status::CardStatus;
use crate::validate::ArrivalDate;

/// Inventory card.
///
/// Fields are private; the only way to change a stored card is through the
/// ledger, which runs the validators. Values handed out by the ledger are copies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub(crate) number: CardNumber,
    pub(crate) name: String,
    pub(crate) quantity: u64,
    pub(crate) status: CardStatus,
    pub(crate) supplier: String,
    pub(crate) manufacturer: String,
    pub(crate) cost: f64,
    pub(crate) location: String,
    pub(crate) arrival_date: ArrivalDate,
    pub(crate) article: String,
    pub(crate) responsible: String,
    pub(crate) notes: String,
}

impl Card {
    /// Staging record with safe defaults for the validated fields.
    pub(crate) fn placeholder(number: CardNumber) -> Self {
        Self {
            number,
            name: String::new(),
            quantity: 0,
            status: CardStatus::Pending,
            supplier: String::new(),
            manufacturer: String::new(),
            cost: 0.0,
            location: String::new(),
            arrival_date: ArrivalDate::unset(),
            article: String::new(),
            responsible: String::new(),
            notes: String::new(),
        }
    }

    pub fn number(&self) -> CardNumber {
        self.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn status(&self) -> CardStatus {
        self.status
    }

    pub fn supplier(&self) -> &str {
        &self.supplier
    }

    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn arrival_date(&self) -> &ArrivalDate {
        &self.arrival_date
    }

    pub fn article(&self) -> &str {
        &self.article
    }

    pub fn responsible(&self) -> &str {
        &self.responsible
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Whether the card has been retired.
    pub fn is_written_off(&self) -> bool {
        self.status == CardStatus::WrittenOff
    }
}

impl Entity for Card {
    type Id = CardNumber;

    fn id(&self) -> Self::Id {
        self.number
    }
}

/// Everything a caller supplies to register a new card. The number is always
/// assigned by the ledger.
///
/// Values are raw: nothing here has been validated yet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardDraft {
    pub name: String,
    pub quantity: i64,
    pub status: String,
    pub supplier: String,
    pub manufacturer: String,
    pub cost: f64,
    pub location: String,
    pub article: String,
    pub responsible: String,
    pub arrival_date: String,
    pub notes: String,
}
