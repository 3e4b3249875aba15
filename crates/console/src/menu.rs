//! Interactive menu loop.
//!
//! Reads operator input line by line, turns it into ledger calls, and prints
//! the outcome. Domain errors are shown to the operator and the loop goes on;
//! only I/O failures end it with an error.

use std::io::{self, BufRead, Write};

use stockcard_core::{CardNumber, DomainError};
use stockcard_inventory::{CardDraft, CardField, CardLedger, CardUpdate};

use crate::config::{ConsoleConfig, ListFormat};
use crate::render;

/// Fields offered by the update submenu, in menu order.
const EDITABLE_FIELDS: [CardField; 6] = [
    CardField::Name,
    CardField::Quantity,
    CardField::Status,
    CardField::Cost,
    CardField::Location,
    CardField::Notes,
];

enum Flow {
    Continue,
    Exit,
}

/// Reads one line or leaves the current action when input is exhausted.
macro_rules! ask {
    ($console:expr, $label:expr) => {
        match $console.prompt($label)? {
            Some(line) => line,
            None => return Ok(Flow::Exit),
        }
    };
}

pub struct Console<R, W> {
    input: R,
    output: W,
    ledger: CardLedger,
    config: ConsoleConfig,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, config: ConsoleConfig) -> Self {
        Self {
            input,
            output,
            ledger: CardLedger::new(),
            config,
        }
    }

    pub fn ledger(&self) -> &CardLedger {
        &self.ledger
    }

    pub fn into_parts(self) -> (CardLedger, W) {
        (self.ledger, self.output)
    }

    /// Run until the operator chooses exit or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Choose an action: ")? else {
                break;
            };

            let flow = match choice.parse::<i64>() {
                Ok(0) => {
                    writeln!(self.output, "\nExiting.")?;
                    break;
                }
                Ok(1) => self.create_card()?,
                Ok(2) => self.view_card()?,
                Ok(3) => self.update_card()?,
                Ok(4) => self.write_off_card()?,
                Ok(5) => self.list_cards()?,
                Ok(other) => {
                    tracing::debug!(choice = other, "menu choice out of range");
                    writeln!(self.output, "\nInvalid choice. Choose a number from 0 to 5.")?;
                    Flow::Continue
                }
                Err(_) => {
                    tracing::debug!(input = %choice, "menu choice is not a number");
                    writeln!(self.output, "Error: enter a number from 0 to 5")?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                break;
            }
            if self.prompt("\nPress Enter to continue.")?.is_none() {
                break;
            }
        }
        self.output.flush()
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "STOCK CARD MANAGEMENT")?;
        writeln!(self.output, "1. Create a new card")?;
        writeln!(self.output, "2. View a card by number")?;
        writeln!(self.output, "3. Change card data")?;
        writeln!(self.output, "4. Write off a card")?;
        writeln!(self.output, "5. Show all cards")?;
        writeln!(self.output, "0. Exit")
    }

    /// Print `label`, read one line and return it trimmed. `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn report(&mut self, err: &DomainError) -> io::Result<()> {
        writeln!(self.output, "\nError: {err}")
    }

    fn show_card(&mut self, number: CardNumber) -> io::Result<()> {
        match self.ledger.get(number) {
            Ok(card) => {
                let text = render::card_details(&card, &self.config.currency);
                writeln!(self.output, "\n{text}")
            }
            Err(err) => self.report(&err),
        }
    }

    fn ask_number(&mut self, label: &str) -> io::Result<Option<Result<CardNumber, DomainError>>> {
        Ok(self.prompt(label)?.map(|raw| raw.parse::<CardNumber>()))
    }

    fn create_card(&mut self) -> io::Result<Flow> {
        let name = ask!(self, "Item name: ");
        let quantity = ask!(self, "Quantity: ");
        let Ok(quantity) = quantity.parse::<i64>() else {
            tracing::debug!(input = %quantity, "quantity is not an integer");
            writeln!(self.output, "\nError: quantity must be an integer")?;
            return Ok(Flow::Continue);
        };
        let status = ask!(self, "Status: ");
        let supplier = ask!(self, "Supplier: ");
        let manufacturer = ask!(self, "Manufacturer: ");
        let cost = ask!(self, "Cost: ");
        let Ok(cost) = cost.parse::<f64>() else {
            tracing::debug!(input = %cost, "cost is not a number");
            writeln!(self.output, "\nError: cost must be a number")?;
            return Ok(Flow::Continue);
        };
        let location = ask!(self, "Location: ");
        let article = ask!(self, "Article: ");
        let responsible = ask!(self, "Responsible: ");
        let arrival_date = ask!(self, "Arrival date (DD.MM.YYYY): ");
        let notes = ask!(self, "Notes (optional): ");

        let draft = CardDraft {
            name,
            quantity,
            status,
            supplier,
            manufacturer,
            cost,
            location,
            article,
            responsible,
            arrival_date,
            notes,
        };

        match self.ledger.create(draft) {
            Ok(number) => {
                tracing::info!(card = %number, "card created");
                writeln!(self.output, "\nCard created. Number: {number}")?;
                self.show_card(number)?;
            }
            Err(err) => {
                tracing::warn!(error = %err, "card creation rejected");
                self.report(&err)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn view_card(&mut self) -> io::Result<Flow> {
        let Some(number) = self.ask_number("Card number: ")? else {
            return Ok(Flow::Exit);
        };
        match number.and_then(|n| self.ledger.get(n)) {
            Ok(card) => {
                let text = render::card_details(&card, &self.config.currency);
                writeln!(self.output, "\nCard details:\n{text}")?;
            }
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn update_card(&mut self) -> io::Result<Flow> {
        let number = match self.ask_number("Card number to change: ")? {
            Some(Ok(number)) => number,
            Some(Err(err)) => {
                self.report(&err)?;
                return Ok(Flow::Continue);
            }
            None => return Ok(Flow::Exit),
        };

        writeln!(self.output, "\nWhich field?")?;
        for (i, field) in EDITABLE_FIELDS.iter().enumerate() {
            writeln!(self.output, "{}. {field}", i + 1)?;
        }
        let choice = ask!(self, "Choose a field (1-6): ");
        let field = choice
            .parse::<usize>()
            .ok()
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| EDITABLE_FIELDS.get(i).copied());
        let Some(field) = field else {
            writeln!(self.output, "Invalid choice")?;
            return Ok(Flow::Continue);
        };

        let value = ask!(self, &format!("New value for '{field}': "));
        let outcome = CardUpdate::from_raw(field, &value)
            .and_then(|update| self.ledger.update(number, [update]));

        match outcome {
            Ok(()) => {
                tracing::info!(card = %number, field = %field, "card updated");
                writeln!(self.output, "\nCard updated.")?;
                self.show_card(number)?;
            }
            Err(err) => {
                tracing::warn!(card = %number, field = %field, error = %err, "card update rejected");
                self.report(&err)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn write_off_card(&mut self) -> io::Result<Flow> {
        let Some(number) = self.ask_number("Card number to write off: ")? else {
            return Ok(Flow::Exit);
        };
        let number = match number {
            Ok(number) => number,
            Err(err) => {
                self.report(&err)?;
                return Ok(Flow::Continue);
            }
        };

        match self.ledger.write_off(number) {
            Ok(()) => {
                tracing::info!(card = %number, "card written off");
                writeln!(self.output, "Card written off.")?;
                self.show_card(number)?;
            }
            Err(err) => {
                tracing::warn!(card = %number, error = %err, "write-off rejected");
                self.report(&err)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn list_cards(&mut self) -> io::Result<Flow> {
        let cards = self.ledger.list();
        if cards.is_empty() {
            writeln!(self.output, "\nNo cards in the ledger")?;
            return Ok(Flow::Continue);
        }

        match self.config.list_format {
            ListFormat::Table => {
                writeln!(self.output, "\nALL CARDS ({})", cards.len())?;
                for card in &cards {
                    writeln!(self.output, "{}", render::listing_line(card))?;
                }
            }
            ListFormat::Json => {
                writeln!(self.output)?;
                for card in &cards {
                    let line = render::json_line(card).map_err(io::Error::other)?;
                    writeln!(self.output, "{line}")?;
                }
            }
        }
        Ok(Flow::Continue)
    }
}
