//! Inventory card ledger.
//!
//! Business rules for stock cards, implemented purely as deterministic domain
//! logic (no IO, no terminal, no storage beyond process memory).

pub mod card;
pub mod ledger;
pub mod status;
pub mod update;
pub mod validate;

pub use card::{Card, CardDraft};
pub use ledger::CardLedger;
pub use status::CardStatus;
pub use update::{CardField, CardUpdate};
pub use validate::ArrivalDate;
