use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::a001_subscriber::aggregate::ClientType;

/// Placeholder shown when a price is missing
pub const PRICE_PLACEHOLDER: &str = "-";

/// Вид операции заказа, для которого задана цена.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Новая бутыль с водой
    NewBottle,
    /// Обмен бутыли
    Exchange,
    /// Только вода
    WaterOnly,
}

impl OperationKind {
    pub fn all() -> [OperationKind; 3] {
        [
            OperationKind::NewBottle,
            OperationKind::Exchange,
            OperationKind::WaterOnly,
        ]
    }

    /// Prefix of the page price table key
    pub fn key_prefix(&self) -> &'static str {
        match self {
            OperationKind::NewBottle => "new",
            OperationKind::Exchange => "exchange",
            OperationKind::WaterOnly => "water",
        }
    }

    /// `operation_type` column of the stored price rows
    pub fn operation_type(&self) -> &'static str {
        match self {
            OperationKind::NewBottle => "new_bottle",
            OperationKind::Exchange => "exchange",
            OperationKind::WaterOnly => "water_only",
        }
    }

    pub fn from_operation_type(code: &str) -> Option<Self> {
        OperationKind::all()
            .into_iter()
            .find(|kind| kind.operation_type() == code)
    }

    pub fn key(&self, client_type: ClientType) -> String {
        format!("{}_{}", self.key_prefix(), client_type.price_suffix())
    }

    /// Price the server charges when no row exists for the operation
    pub fn default_price(&self, client_type: ClientType) -> f64 {
        match (self, client_type) {
            (OperationKind::NewBottle, ClientType::Legal) => 101.0,
            (OperationKind::NewBottle, ClientType::Individual) => 105.0,
            (OperationKind::Exchange, ClientType::Legal) => 61.0,
            (OperationKind::Exchange, ClientType::Individual) => 65.0,
            (OperationKind::WaterOnly, ClientType::Legal) => 11.0,
            (OperationKind::WaterOnly, ClientType::Individual) => 15.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OperationKind::NewBottle => "Täze çüýşe",
            OperationKind::Exchange => "Çalyşyk",
            OperationKind::WaterOnly => "Diňe suw",
        }
    }
}

/// One stored price row: a single operation priced for both client types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRow {
    pub id: i64,
    pub operation_type: String,
    pub legal_price: f64,
    pub individual_price: f64,
}

impl PriceRow {
    pub fn kind(&self) -> Option<OperationKind> {
        OperationKind::from_operation_type(&self.operation_type)
    }

    /// Name of the price-update form field, e.g. `legal_3`
    pub fn field_name(&self, client_type: ClientType) -> String {
        format!("{}_{}", client_type.code(), self.id)
    }

    pub fn price(&self, client_type: ClientType) -> f64 {
        match client_type {
            ClientType::Legal => self.legal_price,
            ClientType::Individual => self.individual_price,
        }
    }
}

/// Read-only price table injected by the page as `window.currentPrices`.
///
/// Keys look like `new_legal` or `water_individual`; values are either
/// strings or numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable(HashMap<String, Value>);

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: &[PriceRow]) -> Self {
        let mut table = HashMap::new();
        for row in rows {
            let Some(kind) = row.kind() else {
                continue;
            };
            table.insert(kind.key(ClientType::Legal), Value::from(row.legal_price));
            table.insert(
                kind.key(ClientType::Individual),
                Value::from(row.individual_price),
            );
        }
        Self(table)
    }

    pub fn with_price(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Display text of a price; falsy or missing values show as `-`
    pub fn display(&self, kind: OperationKind, client_type: ClientType) -> String {
        self.0
            .get(&kind.key(client_type))
            .and_then(display_value)
            .unwrap_or_else(|| PRICE_PLACEHOLDER.to_string())
    }

    /// Numeric price, parsing string values
    pub fn amount(&self, kind: OperationKind, client_type: ClientType) -> Option<f64> {
        match self.0.get(&kind.key(client_type))? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Price used for order totals; falls back to the server's defaults
    pub fn charged(&self, kind: OperationKind, client_type: ClientType) -> f64 {
        self.amount(kind, client_type)
            .unwrap_or_else(|| kind.default_price(client_type))
    }
}

fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return (i != 0).then(|| i.to_string());
            }
            let f = n.as_f64()?;
            if f == 0.0 || f.is_nan() {
                None
            } else if f.fract() == 0.0 && f.abs() < 1e15 {
                Some(format!("{}", f as i64))
            } else {
                Some(f.to_string())
            }
        }
        other => Some(other.to_string()),
    }
}

/// Texts written into `price-new`, `price-exchange` and `price-water`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceDisplay {
    pub new_bottle: String,
    pub exchange: String,
    pub water_only: String,
}

impl Default for PriceDisplay {
    fn default() -> Self {
        Self {
            new_bottle: PRICE_PLACEHOLDER.to_string(),
            exchange: PRICE_PLACEHOLDER.to_string(),
            water_only: PRICE_PLACEHOLDER.to_string(),
        }
    }
}

impl PriceDisplay {
    pub fn for_client(prices: &PriceTable, client_type: ClientType) -> Self {
        Self {
            new_bottle: prices.display(OperationKind::NewBottle, client_type),
            exchange: prices.display(OperationKind::Exchange, client_type),
            water_only: prices.display(OperationKind::WaterOnly, client_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::page_json::decode_page_global;
    use serde_json::json;

    #[test]
    fn test_display_legal_prices() {
        let prices = PriceTable::new()
            .with_price("new_legal", "10")
            .with_price("exchange_legal", "5")
            .with_price("water_legal", "2");
        let display = PriceDisplay::for_client(&prices, ClientType::Legal);
        assert_eq!(display.new_bottle, "10");
        assert_eq!(display.exchange, "5");
        assert_eq!(display.water_only, "2");
    }

    #[test]
    fn test_empty_table_shows_placeholder() {
        let display = PriceDisplay::for_client(&PriceTable::new(), ClientType::Legal);
        assert_eq!(display, PriceDisplay::default());
        assert_eq!(display.new_bottle, "-");
    }

    #[test]
    fn test_unknown_client_type_uses_individual_suffix() {
        let prices = PriceTable::new()
            .with_price("new_individual", 105)
            .with_price("new_legal", 101);
        let ct = ClientType::from_code("something-else");
        assert_eq!(prices.display(OperationKind::NewBottle, ct), "105");
    }

    #[test]
    fn test_falsy_values_show_placeholder() {
        let prices: PriceTable = decode_page_global(
            "currentPrices",
            r#"{"new_legal": 0, "exchange_legal": "", "water_legal": null}"#,
        )
        .unwrap();
        let display = PriceDisplay::for_client(&prices, ClientType::Legal);
        assert_eq!(display, PriceDisplay::default());
    }

    #[test]
    fn test_number_formatting() {
        let prices = PriceTable::new()
            .with_price("new_legal", 101.0)
            .with_price("exchange_legal", 61.5)
            .with_price("water_legal", json!(11));
        let display = PriceDisplay::for_client(&prices, ClientType::Legal);
        assert_eq!(display.new_bottle, "101");
        assert_eq!(display.exchange, "61.5");
        assert_eq!(display.water_only, "11");
    }

    #[test]
    fn test_from_rows() {
        let rows = vec![
            PriceRow {
                id: 1,
                operation_type: "new_bottle".to_string(),
                legal_price: 101.0,
                individual_price: 105.0,
            },
            PriceRow {
                id: 3,
                operation_type: "water_only".to_string(),
                legal_price: 11.0,
                individual_price: 15.0,
            },
            PriceRow {
                id: 9,
                operation_type: "unknown".to_string(),
                legal_price: 1.0,
                individual_price: 1.0,
            },
        ];
        let prices = PriceTable::from_rows(&rows);
        assert_eq!(prices.amount(OperationKind::NewBottle, ClientType::Individual), Some(105.0));
        assert_eq!(prices.amount(OperationKind::WaterOnly, ClientType::Legal), Some(11.0));
        assert_eq!(prices.amount(OperationKind::Exchange, ClientType::Legal), None);
        assert_eq!(prices.display(OperationKind::Exchange, ClientType::Legal), "-");
    }

    #[test]
    fn test_amount_parses_strings() {
        let prices = PriceTable::new().with_price("exchange_individual", " 65.00 ");
        assert_eq!(prices.amount(OperationKind::Exchange, ClientType::Individual), Some(65.0));
        let prices = PriceTable::new().with_price("exchange_individual", "n/a");
        assert_eq!(prices.amount(OperationKind::Exchange, ClientType::Individual), None);
    }

    #[test]
    fn test_charged_falls_back_to_defaults() {
        let prices = PriceTable::new()
            .with_price("new_legal", "90")
            .with_price("water_legal", "n/a");
        assert_eq!(prices.charged(OperationKind::NewBottle, ClientType::Legal), 90.0);
        assert_eq!(prices.charged(OperationKind::Exchange, ClientType::Legal), 61.0);
        assert_eq!(prices.charged(OperationKind::WaterOnly, ClientType::Legal), 11.0);
        let empty = PriceTable::new();
        assert_eq!(empty.charged(OperationKind::NewBottle, ClientType::Individual), 105.0);
        assert_eq!(empty.charged(OperationKind::Exchange, ClientType::Individual), 65.0);
        assert_eq!(empty.charged(OperationKind::WaterOnly, ClientType::Individual), 15.0);
    }

    #[test]
    fn test_price_row_fields() {
        let row = PriceRow {
            id: 3,
            operation_type: "exchange".to_string(),
            legal_price: 61.0,
            individual_price: 65.0,
        };
        assert_eq!(row.kind(), Some(OperationKind::Exchange));
        assert_eq!(row.field_name(ClientType::Legal), "legal_3");
        assert_eq!(row.field_name(ClientType::Individual), "individual_3");
        assert_eq!(row.price(ClientType::Individual), 65.0);
        assert_eq!(row.price(ClientType::Legal), 61.0);
    }
}
