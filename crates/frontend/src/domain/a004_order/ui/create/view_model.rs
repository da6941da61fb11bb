use contracts::domain::a001_subscriber::aggregate::{ClientType, SubscriberDto};
use contracts::domain::a002_price::aggregate::{PriceDisplay, PriceTable, PRICE_PLACEHOLDER};
use contracts::domain::a003_payment::aggregate::CURRENCY;
use contracts::domain::a004_order::aggregate::OrderDraft;

/// State of the create-order form that drives the price display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFormState {
    pub client_type: Option<ClientType>,
    pub draft: OrderDraft,
}

impl OrderFormState {
    /// React to a subscriber being picked; `option_type` is the option's
    /// `data-type`. Options without one (the placeholder) change nothing.
    pub fn select_subscriber(&mut self, option_type: Option<&str>) -> bool {
        match option_type.filter(|t| !t.is_empty()) {
            Some(code) => {
                self.client_type = Some(ClientType::from_code(code));
                true
            }
            None => false,
        }
    }

    /// Text of `selected-client-type`
    pub fn client_label(&self) -> &'static str {
        self.client_type
            .map(|ct| ct.label())
            .unwrap_or(PRICE_PLACEHOLDER)
    }

    pub fn price_display(&self, prices: &PriceTable) -> PriceDisplay {
        match self.client_type {
            Some(ct) => PriceDisplay::for_client(prices, ct),
            None => PriceDisplay::default(),
        }
    }

    pub fn total_label(&self, prices: &PriceTable) -> String {
        self.money_label(|ct| self.draft.total(prices, ct))
    }

    /// Debt the order would add, shown under the total
    pub fn debt_label(&self, prices: &PriceTable) -> String {
        self.money_label(|ct| self.draft.debt(prices, ct))
    }

    fn money_label(&self, amount: impl Fn(ClientType) -> f64) -> String {
        match self.client_type {
            Some(ct) => format!("{} {}", amount(ct), CURRENCY),
            None => PRICE_PLACEHOLDER.to_string(),
        }
    }
}

/// Quantity field value; anything unparsable counts as zero
pub fn parse_quantity(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

/// `paid_amount` field value; blank or unparsable means paid in full
pub fn parse_paid_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount >= 0.0)
}

/// Subscribers as listed in the select, by name
pub fn subscribers_by_name(mut subscribers: Vec<SubscriberDto>) -> Vec<SubscriberDto> {
    subscribers.sort_by(|a, b| a.full_name.cmp(&b.full_name));
    subscribers
}
