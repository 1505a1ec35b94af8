use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::currency::format_price;
use api::transaction::HistorySummary;
use dioxus::prelude::*;

/// Count and total of received transactions.
#[component]
pub fn SummaryPanel(summary: HistorySummary) -> Element {
    let total = format_price(summary.currency_symbol, summary.total_received);

    rsx! {
        Card {
            Grid {
                div {
                    small { "Total Transactions" }
                    h3 { class: "summary-count", "{summary.count}" }
                }
                div {
                    small { "Total Value Received" }
                    h3 { class: "summary-total", "{total}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::tests::sample_transaction;
    use api::amount::Amount;

    #[test]
    fn shows_count_and_item_price_total() {
        let mut second = sample_transaction();
        second.item_price = Amount::new_from_minor(300);
        second.service_fee = Amount::new_from_minor(999);
        let summary = HistorySummary::from_transactions(&[sample_transaction(), second]);

        let html = dioxus_ssr::render_element(rsx! {
            SummaryPanel { summary }
        });

        assert!(html.contains("Total Transactions"));
        assert!(html.contains(">2<"));
        assert!(html.contains("₦15.50"));
    }

    #[test]
    fn empty_summary_renders_zero_total() {
        let summary = HistorySummary::from_transactions(&[]);
        let html = dioxus_ssr::render_element(rsx! {
            SummaryPanel { summary }
        });

        assert!(html.contains(">0<"));
        assert!(html.contains("$0.00"));
    }
}
