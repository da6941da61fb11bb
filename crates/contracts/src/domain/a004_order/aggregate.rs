use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a001_subscriber::aggregate::ClientType;
use crate::domain::a002_price::aggregate::{OperationKind, PriceTable};
use crate::shared::form_target::FormTarget;

/// Цена «Gap bilen» в кредитном режиме, не зависит от типа клиента
pub const CREDIT_BOTTLE_PRICE: f64 = 105.0;
/// Цена «Diňe suw» в кредитном режиме
pub const CREDIT_WATER_PRICE: f64 = 15.0;

/// Values entered in the create-order form.
///
/// Any credit quantity switches the order to credit mode. Standard
/// quantities are then ignored and the order is left unpaid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub new_bottles: u32,
    pub exchange_bottles: u32,
    pub water_only: u32,
    pub free_bottles: u32,
    /// `gap_bilen`
    pub credit_bottles: u32,
    /// `dine_suw`
    pub credit_water: u32,
    /// `None` means the order is paid in full
    pub paid_amount: Option<f64>,
    pub is_free: bool,
}

impl OrderDraft {
    pub fn quantity(&self, kind: OperationKind) -> u32 {
        match kind {
            OperationKind::NewBottle => self.new_bottles,
            OperationKind::Exchange => self.exchange_bottles,
            OperationKind::WaterOnly => self.water_only,
        }
    }

    pub fn is_credit(&self) -> bool {
        self.credit_bottles > 0 || self.credit_water > 0
    }

    /// Order total as the server will record it.
    ///
    /// Missing prices fall back to the default tier prices.
    pub fn total(&self, prices: &PriceTable, client_type: ClientType) -> f64 {
        if self.is_free {
            return 0.0;
        }
        if self.is_credit() {
            return f64::from(self.credit_bottles) * CREDIT_BOTTLE_PRICE
                + f64::from(self.credit_water) * CREDIT_WATER_PRICE;
        }
        OperationKind::all()
            .into_iter()
            .map(|kind| f64::from(self.quantity(kind)) * prices.charged(kind, client_type))
            .sum()
    }

    pub fn paid(&self, prices: &PriceTable, client_type: ClientType) -> f64 {
        if self.is_free || self.is_credit() {
            return 0.0;
        }
        self.paid_amount
            .unwrap_or_else(|| self.total(prices, client_type))
    }

    /// Debt the order adds to the subscriber
    pub fn debt(&self, prices: &PriceTable, client_type: ClientType) -> f64 {
        self.total(prices, client_type) - self.paid(prices, client_type)
    }

    /// Bottles handed to the subscriber, free ones included
    pub fn bottles_out(&self) -> u32 {
        if self.is_credit() {
            return self.credit_bottles;
        }
        self.new_bottles + self.exchange_bottles + self.free_bottles
    }
}

/// Order row rendered by the server into `window.currentOrders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDto {
    pub id: i64,
    pub subscriber_id: i64,
    #[serde(default)]
    pub subscriber_name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub new_bottles: u32,
    #[serde(default)]
    pub exchange_bottles: u32,
    #[serde(default)]
    pub water_only: u32,
    #[serde(default)]
    pub free_bottles: u32,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub paid_amount: f64,
    #[serde(default)]
    pub is_free: bool,
    /// `YYYY-MM-DD HH:MM:SS` or ISO 8601
    #[serde(default)]
    pub created_at: String,
}

impl OrderDto {
    pub fn delete_target(&self) -> FormTarget {
        FormTarget::OrderDelete(self.id)
    }

    pub fn debt(&self) -> f64 {
        self.total_amount - self.paid_amount
    }

    pub fn created_date(&self) -> Option<NaiveDate> {
        parse_date(self.created_at.get(..10)?)
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Поле поиска в списке заказов.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSearchType {
    Id,
    Address,
    #[default]
    #[serde(other)]
    All,
}

impl OrderSearchType {
    pub fn from_code(code: &str) -> Self {
        match code {
            "id" => OrderSearchType::Id,
            "address" => OrderSearchType::Address,
            _ => OrderSearchType::All,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            OrderSearchType::Id => "id",
            OrderSearchType::Address => "address",
            OrderSearchType::All => "all",
        }
    }
}

/// Query string state of the order list
/// (`?search=..&type=..&date_from=..&date_to=..`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderSearch {
    #[serde(default)]
    pub search: String,
    #[serde(default, rename = "type")]
    pub search_type: OrderSearchType,
    /// `YYYY-MM-DD`, inclusive
    #[serde(default)]
    pub date_from: String,
    /// `YYYY-MM-DD`, inclusive through the end of the day
    #[serde(default)]
    pub date_to: String,
}

impl OrderSearch {
    /// Ids only match an all-digit search; dates that don't parse are ignored
    pub fn matches(&self, order: &OrderDto) -> bool {
        self.matches_text(order) && self.matches_dates(order)
    }

    fn matches_text(&self, order: &OrderDto) -> bool {
        let needle = self.search.trim();
        if needle.is_empty() {
            return true;
        }

        let by_id = || {
            needle.chars().all(|c| c.is_ascii_digit())
                && needle.parse::<i64>().map(|id| id == order.id).unwrap_or(false)
        };
        let by_address = || {
            let needle = needle.to_lowercase();
            order
                .address
                .as_deref()
                .map(|a| a.to_lowercase().contains(&needle))
                .unwrap_or(false)
        };

        match self.search_type {
            OrderSearchType::Id => by_id(),
            OrderSearchType::Address => by_address(),
            OrderSearchType::All => by_address() || by_id(),
        }
    }

    fn matches_dates(&self, order: &OrderDto) -> bool {
        let from = parse_date(&self.date_from);
        let to = parse_date(&self.date_to);
        if from.is_none() && to.is_none() {
            return true;
        }
        let Some(date) = order.created_date() else {
            return false;
        };
        from.map_or(true, |from| date >= from) && to.map_or(true, |to| date <= to)
    }

    /// Orders matching the search, newest first
    pub fn apply<'a>(&self, orders: &'a [OrderDto]) -> Vec<&'a OrderDto> {
        let mut found: Vec<&OrderDto> = orders.iter().filter(|o| self.matches(o)).collect();
        found.sort_by(|a, b| b.id.cmp(&a.id));
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prices() -> PriceTable {
        PriceTable::new()
            .with_price("new_legal", 101)
            .with_price("exchange_legal", 61)
            .with_price("water_legal", 11)
            .with_price("new_individual", "105")
            .with_price("exchange_individual", "65")
            .with_price("water_individual", "15")
    }

    fn order(id: i64, address: Option<&str>, created_at: &str) -> OrderDto {
        OrderDto {
            id,
            subscriber_id: 1,
            subscriber_name: "Aman".to_string(),
            address: address.map(str::to_string),
            new_bottles: 0,
            exchange_bottles: 0,
            water_only: 0,
            free_bottles: 0,
            total_amount: 0.0,
            paid_amount: 0.0,
            is_free: false,
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn test_total_per_tier() {
        let draft = OrderDraft {
            new_bottles: 1,
            exchange_bottles: 2,
            water_only: 3,
            ..Default::default()
        };
        assert_eq!(draft.total(&prices(), ClientType::Legal), 101.0 + 122.0 + 33.0);
        assert_eq!(draft.total(&prices(), ClientType::Individual), 105.0 + 130.0 + 45.0);
    }

    #[test]
    fn test_total_uses_default_prices_when_rows_missing() {
        let draft = OrderDraft {
            new_bottles: 1,
            ..Default::default()
        };
        assert_eq!(draft.total(&PriceTable::new(), ClientType::Legal), 101.0);
        assert_eq!(draft.total(&PriceTable::new(), ClientType::Individual), 105.0);

        let table = PriceTable::new().with_price("water_legal", 9);
        let mixed = OrderDraft {
            exchange_bottles: 1,
            water_only: 2,
            ..Default::default()
        };
        assert_eq!(mixed.total(&table, ClientType::Legal), 61.0 + 18.0);
    }

    #[test]
    fn test_free_order_is_zero() {
        let draft = OrderDraft {
            new_bottles: 4,
            credit_water: 2,
            is_free: true,
            ..Default::default()
        };
        assert_eq!(draft.total(&prices(), ClientType::Legal), 0.0);
        assert_eq!(draft.paid(&prices(), ClientType::Legal), 0.0);
    }

    #[test]
    fn test_credit_mode_uses_fixed_prices_and_is_unpaid() {
        let draft = OrderDraft {
            new_bottles: 10,
            credit_bottles: 2,
            credit_water: 3,
            paid_amount: Some(50.0),
            ..Default::default()
        };
        assert!(draft.is_credit());
        assert_eq!(draft.total(&prices(), ClientType::Legal), 210.0 + 45.0);
        assert_eq!(draft.paid(&prices(), ClientType::Legal), 0.0);
        assert_eq!(draft.debt(&prices(), ClientType::Legal), 255.0);
        assert_eq!(draft.bottles_out(), 2);
    }

    #[test]
    fn test_paid_amount_defaults_to_total() {
        let mut draft = OrderDraft {
            exchange_bottles: 2,
            ..Default::default()
        };
        assert_eq!(draft.paid(&prices(), ClientType::Individual), 130.0);
        assert_eq!(draft.debt(&prices(), ClientType::Individual), 0.0);

        draft.paid_amount = Some(100.0);
        assert_eq!(draft.debt(&prices(), ClientType::Individual), 30.0);
    }

    #[test]
    fn test_bottles_out() {
        let draft = OrderDraft {
            new_bottles: 1,
            exchange_bottles: 2,
            water_only: 5,
            free_bottles: 1,
            ..Default::default()
        };
        assert_eq!(draft.bottles_out(), 4);
    }

    #[test]
    fn test_order_dto_defaults_and_target() {
        let raw = r#"{"id": 8, "subscriber_id": 3, "total_amount": 130, "paid_amount": 100}"#;
        let order: OrderDto = serde_json::from_str(raw).unwrap();
        assert_eq!(order.debt(), 30.0);
        assert_eq!(order.created_date(), None);
        assert_eq!(order.delete_target().action(), "/orders/8/delete");
    }

    #[test]
    fn test_search_by_id_needs_digits() {
        let orders = vec![order(12, Some("Mir 12"), ""), order(5, None, "")];
        let by_id = OrderSearch {
            search: "12".to_string(),
            search_type: OrderSearchType::Id,
            ..Default::default()
        };
        let ids: Vec<i64> = by_id.apply(&orders).iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![12]);

        let not_digits = OrderSearch {
            search: "-5".to_string(),
            search_type: OrderSearchType::Id,
            ..Default::default()
        };
        assert!(not_digits.apply(&orders).is_empty());
    }

    #[test]
    fn test_search_all_matches_address_or_id() {
        let orders = vec![
            order(1, Some("Köşi 5"), ""),
            order(5, Some("Mir 1"), ""),
            order(7, None, ""),
        ];
        let search = OrderSearch {
            search: "5".to_string(),
            ..Default::default()
        };
        let ids: Vec<i64> = search.apply(&orders).iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![5, 1]);

        let by_address = OrderSearch {
            search: "mir".to_string(),
            search_type: OrderSearchType::Address,
            ..Default::default()
        };
        let ids: Vec<i64> = by_address.apply(&orders).iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![5]);
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let orders = vec![
            order(1, None, "2025-03-01 08:00:00"),
            order(2, None, "2025-03-15T23:59:59"),
            order(3, None, "2025-03-16 00:00:01"),
            order(4, None, ""),
        ];
        let search = OrderSearch {
            date_from: "2025-03-01".to_string(),
            date_to: "2025-03-15".to_string(),
            ..Default::default()
        };
        let ids: Vec<i64> = search.apply(&orders).iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![2, 1]);

        let only_to = OrderSearch {
            date_to: "2025-03-01".to_string(),
            ..Default::default()
        };
        let ids: Vec<i64> = only_to.apply(&orders).iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_unparsable_dates_are_ignored() {
        let orders = vec![order(1, None, "")];
        let search = OrderSearch {
            date_from: "yesterday".to_string(),
            ..Default::default()
        };
        assert_eq!(search.apply(&orders).len(), 1);
    }
}
