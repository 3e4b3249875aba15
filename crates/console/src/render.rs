//! Text rendering of cards. Formatting only.

use stockcard_inventory::Card;

/// Multi-line view of one card, fields in fixed order.
pub fn card_details(card: &Card, currency: &str) -> String {
    [
        format!("Number: {} | Article: {}", card.number(), card.article()),
        format!("Name: {}", card.name()),
        format!("Quantity: {}", card.quantity()),
        format!("Status: {}", card.status().label()),
        format!("Cost: {:.2} {currency}", card.cost()),
        format!("Supplier: {}", card.supplier()),
        format!("Manufacturer: {}", card.manufacturer()),
        format!("Location: {}", card.location()),
        format!("Arrival date: {}", card.arrival_date()),
        format!("Responsible: {}", card.responsible()),
        format!("Notes: {}", card.notes()),
    ]
    .join("\n")
}

/// One-line summary used by the listing.
pub fn listing_line(card: &Card) -> String {
    format!(
        "№{}: {} | {} | {} | {} | {} | {} | {} | {} | {}",
        card.number(),
        card.name(),
        card.quantity(),
        card.status().label(),
        card.article(),
        card.supplier(),
        card.cost(),
        card.location(),
        card.arrival_date(),
        card.responsible(),
    )
}

pub fn json_line(card: &Card) -> serde_json::Result<String> {
    serde_json::to_string(card)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockcard_inventory::{CardDraft, CardLedger};

    fn sample() -> Card {
        let mut ledger = CardLedger::new();
        let number = ledger
            .create(CardDraft {
                name: "Bolt M6".to_string(),
                quantity: 100,
                status: "учтено".to_string(),
                supplier: "AcmeCo".to_string(),
                manufacturer: "AcmeMfg".to_string(),
                cost: 0.5,
                location: "Shelf A".to_string(),
                article: "ART-1".to_string(),
                responsible: "J.Doe".to_string(),
                arrival_date: "01.01.2024".to_string(),
                notes: "fragile".to_string(),
            })
            .unwrap();
        ledger.get(number).unwrap()
    }

    #[test]
    fn details_follow_fixed_order() {
        let text = card_details(&sample(), "руб.");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Number: 1 | Article: ART-1");
        assert_eq!(lines[3], "Status: Состоит/принято к учету");
        assert_eq!(lines[4], "Cost: 0.50 руб.");
        assert_eq!(lines[10], "Notes: fragile");
    }

    #[test]
    fn listing_line_has_all_columns() {
        assert_eq!(
            listing_line(&sample()),
            "№1: Bolt M6 | 100 | Состоит/принято к учету | ART-1 | AcmeCo | 0.5 | Shelf A | 01.01.2024 | J.Doe"
        );
    }

    #[test]
    fn json_line_uses_status_key() {
        let value: serde_json::Value = serde_json::from_str(&json_line(&sample()).unwrap()).unwrap();
        assert_eq!(value["number"], 1);
        assert_eq!(value["status"], "учтено");
        assert_eq!(value["arrival_date"], "01.01.2024");
    }
}
