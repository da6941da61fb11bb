use serde::{Deserialize, Serialize};

use crate::domain::a001_subscriber::aggregate::SubscriberDto;

pub const CURRENCY: &str = "TMT";

/// Subscriber a payment is being recorded for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentTarget {
    pub subscriber_id: i64,
    pub subscriber_name: String,
    pub current_debt: f64,
}

impl PaymentTarget {
    pub fn new(subscriber_id: i64, subscriber_name: impl Into<String>, current_debt: f64) -> Self {
        Self {
            subscriber_id,
            subscriber_name: subscriber_name.into(),
            current_debt,
        }
    }

    pub fn from_subscriber(subscriber: &SubscriberDto) -> Self {
        Self::new(subscriber.id, subscriber.full_name.clone(), subscriber.debt)
    }

    /// Text of `payment-current-debt`, e.g. `150 TMT`
    pub fn debt_label(&self) -> String {
        format!("{} {}", self.current_debt, CURRENCY)
    }
}
