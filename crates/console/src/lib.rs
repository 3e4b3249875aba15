//! `stockcard-console` — menu-driven terminal front end for the card ledger.

pub mod config;
pub mod menu;
pub mod render;

pub use config::{ConsoleConfig, ListFormat};
pub use menu::Console;
