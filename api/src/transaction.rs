//! The read-only projection of a completed purchase, and the totals derived
//! from a list of them.

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::amount::Amount;
use crate::currency::Currency;
use crate::currency::FALLBACK_SYMBOL;

/// Status value of a transaction whose payment has settled.
pub const STATUS_COMPLETED: &str = "completed";

/// Label shown when a transaction has no related food item.
pub const FALLBACK_ITEM_NAME: &str = "Food Item";

/// The joined `food_items` record. Only the name is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItemRef {
    pub name: Option<String>,
}

/// A purchase that credited the current user with a gifted item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub buyer_email: String,
    #[serde(default)]
    pub buyer_note: Option<String>,
    pub item_price: Amount,
    pub service_fee: Amount,
    pub total_amount: Amount,
    pub currency: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub food_items: Option<FoodItemRef>,
}

impl Transaction {
    /// The related item's name, or a generic label when the join came back empty.
    pub fn title(&self) -> &str {
        self.food_items
            .as_ref()
            .and_then(|item| item.name.as_deref())
            .unwrap_or(FALLBACK_ITEM_NAME)
    }

    pub fn currency_symbol(&self) -> &'static str {
        Currency::symbol_for_code(&self.currency)
    }
}

/// Aggregates shown above the transaction list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySummary {
    pub count: usize,
    /// Sum of item prices. Service fees are not part of what the recipient
    /// received.
    pub total_received: Amount,
    /// Symbol of the first (most recent) transaction's currency.
    pub currency_symbol: &'static str,
}

impl HistorySummary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        Self {
            count: transactions.len(),
            total_received: transactions.iter().map(|t| t.item_price).sum(),
            currency_symbol: transactions
                .first()
                .map(Transaction::currency_symbol)
                .unwrap_or(FALLBACK_SYMBOL),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub fn transaction(id: &str, price_minor: i64, fee_minor: i64, currency: &str) -> Transaction {
        Transaction {
            id: id.to_string(),
            buyer_email: "buyer@example.com".to_string(),
            buyer_note: None,
            item_price: Amount::new_from_minor(price_minor),
            service_fee: Amount::new_from_minor(fee_minor),
            total_amount: Amount::new_from_minor(price_minor + fee_minor),
            currency: currency.to_string(),
            status: STATUS_COMPLETED.to_string(),
            created_at: "2024-01-05T10:00:00Z".parse().unwrap(),
            food_items: None,
        }
    }

    #[test]
    fn deserializes_store_row_with_join() {
        let row = r#"{
            "id": "7f1c",
            "recipient_id": "user-1",
            "buyer_email": "ada@example.com",
            "buyer_note": null,
            "item_price": 12.5,
            "service_fee": 1.5,
            "total_amount": 14,
            "currency": "NGN",
            "status": "completed",
            "created_at": "2024-01-05T10:00:00+00:00",
            "food_items": { "name": "Jollof Rice" }
        }"#;
        let tx: Transaction = serde_json::from_str(row).unwrap();

        assert_eq!(tx.title(), "Jollof Rice");
        assert_eq!(tx.item_price.to_string(), "12.50");
        assert_eq!(tx.total_amount.to_string(), "14.00");
        assert_eq!(tx.currency_symbol(), "₦");
        assert_eq!(tx.buyer_note, None);
    }

    #[test]
    fn missing_join_uses_fallback_title() {
        let mut tx = transaction("a", 100, 10, "USD");
        assert_eq!(tx.title(), FALLBACK_ITEM_NAME);

        tx.food_items = Some(FoodItemRef { name: None });
        assert_eq!(tx.title(), FALLBACK_ITEM_NAME);
    }

    #[test]
    fn summary_excludes_service_fees() {
        let txs = vec![
            transaction("a", 1250, 150, "GBP"),
            transaction("b", 800, 100, "USD"),
        ];
        let summary = HistorySummary::from_transactions(&txs);

        assert_eq!(summary.count, 2);
        assert_eq!(summary.total_received.to_string(), "20.50");
        assert_eq!(summary.currency_symbol, "£");
    }

    #[test]
    fn summary_of_empty_list() {
        let summary = HistorySummary::from_transactions(&[]);

        assert_eq!(summary.count, 0);
        assert_eq!(summary.total_received.to_string(), "0.00");
        assert_eq!(summary.currency_symbol, "$");
    }

    #[test]
    fn summary_with_unknown_first_currency() {
        let txs = vec![transaction("a", 100, 0, "XYZ"), transaction("b", 100, 0, "EUR")];
        assert_eq!(HistorySummary::from_transactions(&txs).currency_symbol, "$");
    }
}
