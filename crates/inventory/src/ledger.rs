use std::collections::BTreeMap;

use stockcard_core::{CardNumber, DomainError, DomainResult};

use crate::card::{Card, CardDraft};
use crate::status::CardStatus;
use crate::update::CardUpdate;

/// In-memory card ledger.
///
/// Owns every card. Operations are synchronous and take `&mut self` to mutate,
/// so concurrent use needs one lock around the whole ledger.
#[derive(Debug, Clone)]
pub struct CardLedger {
    cards: BTreeMap<CardNumber, Card>,
    next_number: CardNumber,
}

impl Default for CardLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl CardLedger {
    pub fn new() -> Self {
        Self {
            cards: BTreeMap::new(),
            next_number: CardNumber::FIRST,
        }
    }

    /// Number the next creation attempt will receive.
    pub fn next_number(&self) -> CardNumber {
        self.next_number
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Hand out a number. It is consumed whether or not the creation succeeds.
    fn allocate(&mut self) -> CardNumber {
        let number = self.next_number;
        self.next_number = number.next();
        number
    }

    fn lookup(&self, number: CardNumber) -> DomainResult<&Card> {
        self.cards.get(&number).ok_or(DomainError::not_found(number))
    }

    /// Register a new card.
    ///
    /// Validated fields are checked in a fixed order (name, quantity, status,
    /// supplier, cost, article, arrival date) and the first failure is
    /// returned. A failed attempt stores nothing but still burns its number.
    pub fn create(&mut self, draft: CardDraft) -> DomainResult<CardNumber> {
        let number = self.allocate();
        let mut staged = Card::placeholder(number);

        let (free, validated) = draft.into_updates();
        for update in free.into_iter().chain(validated) {
            staged.apply(update)?;
        }

        self.cards.insert(number, staged);
        Ok(number)
    }

    /// Copy of the card with the given number.
    pub fn get(&self, number: CardNumber) -> DomainResult<Card> {
        self.lookup(number).cloned()
    }

    /// Apply field updates in the order given, all or nothing.
    ///
    /// The first failing update aborts the whole call and the stored card stays
    /// exactly as it was. An empty update list only checks that the card exists.
    pub fn update<I>(&mut self, number: CardNumber, updates: I) -> DomainResult<()>
    where
        I: IntoIterator<Item = CardUpdate>,
    {
        let mut staged = self.lookup(number)?.clone();
        for update in updates {
            staged.apply(update)?;
        }
        self.cards.insert(number, staged);
        Ok(())
    }

    /// Retire a registered card: status becomes written off, quantity zero.
    ///
    /// Direct status edits through [`CardLedger::update`] are not guarded;
    /// this is the only operation with a status precondition.
    pub fn write_off(&mut self, number: CardNumber) -> DomainResult<()> {
        let card = self
            .cards
            .get_mut(&number)
            .ok_or(DomainError::not_found(number))?;
        if card.status != CardStatus::Registered {
            return Err(DomainError::policy(format!(
                "write-off is only allowed for cards in status `{}` (card {number} is `{}`)",
                CardStatus::Registered.label(),
                card.status.label()
            )));
        }

        card.status = CardStatus::WrittenOff;
        card.quantity = 0;
        Ok(())
    }

    /// Every card, ordered by number. A snapshot, not a live view.
    pub fn list(&self) -> Vec<Card> {
        self.cards.values().cloned().collect()
    }
}
