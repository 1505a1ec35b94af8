//! One received transaction, rendered as a card.

use crate::components::pico::Card;
use crate::currency::format_date;
use crate::currency::format_fee;
use crate::currency::format_price;
use crate::currency::quoted_note;
use api::transaction::Transaction;
use dioxus::prelude::*;

#[component]
pub fn StatusBadge(status: String) -> Element {
    rsx! {
        mark {
            class: "status-badge status-{status}",
            "{status}"
        }
    }
}

#[component]
pub fn TransactionCard(transaction: Transaction) -> Element {
    let symbol = transaction.currency_symbol();
    let price = format_price(symbol, transaction.item_price);
    let fee = format_fee(symbol, transaction.service_fee);
    let date = format_date(&transaction.created_at);

    rsx! {
        Card {
            div {
                class: "transaction-card",
                header {
                    style: "display: flex; justify-content: space-between; align-items: flex-start; gap: 1rem;",
                    div {
                        h5 { style: "margin-bottom: 0.25rem;", "{transaction.title()}" }
                        StatusBadge { status: transaction.status.clone() }
                    }
                    div {
                        style: "text-align: right;",
                        strong { class: "transaction-price", "{price}" }
                        br {}
                        small { class: "transaction-fee", "{fee}" }
                    }
                }
                p {
                    style: "margin-bottom: 0.25rem;",
                    "From: "
                    span { class: "buyer-email", "{transaction.buyer_email}" }
                }
                small {
                    class: "transaction-date",
                    title: "{transaction.created_at.to_rfc3339()}",
                    "{date}"
                }
                if let Some(note) = &transaction.buyer_note {
                    blockquote {
                        class: "buyer-note",
                        style: "margin: 0.75rem 0 0 0;",
                        "{quoted_note(note)}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::tests::sample_transaction;

    fn render(transaction: Transaction) -> String {
        dioxus_ssr::render_element(rsx! {
            TransactionCard { transaction }
        })
    }

    #[test]
    fn renders_price_fee_and_title() {
        let html = render(sample_transaction());

        assert!(html.contains("Jollof Rice"));
        assert!(html.contains("₦12.50"));
        assert!(html.contains("+₦1.50 service fee"));
        assert!(html.contains("ada@example.com"));
        assert!(html.contains("completed"));
    }

    #[test]
    fn absent_note_omits_block() {
        let html = render(sample_transaction());
        assert!(!html.contains("buyer-note"));
    }

    #[test]
    fn present_note_is_rendered() {
        let mut tx = sample_transaction();
        tx.buyer_note = Some("Happy birthday".to_string());
        let html = render(tx);

        assert!(html.contains("buyer-note"));
        assert!(html.contains("Happy birthday"));
    }

    #[test]
    fn missing_item_and_unknown_currency_fall_back() {
        let mut tx = sample_transaction();
        tx.food_items = None;
        tx.currency = "XYZ".to_string();
        let html = render(tx);

        assert!(html.contains("Food Item"));
        assert!(html.contains("$12.50"));
    }
}
