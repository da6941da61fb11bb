use contracts::domain::a001_subscriber::aggregate::SubscriberDto;
use contracts::domain::a003_payment::aggregate::PaymentTarget;
use leptos::prelude::*;

use crate::layout::modal_service::ModalService;
use crate::shared::dom_ids::MODAL_PAYMENT;

#[derive(Clone, Copy)]
pub struct PaymentViewModel {
    pub target: RwSignal<Option<PaymentTarget>>,
    pub amount: RwSignal<String>,
}

impl PaymentViewModel {
    pub fn new() -> Self {
        Self {
            target: RwSignal::new(None),
            amount: RwSignal::new(String::new()),
        }
    }

    pub fn subscriber_id(&self) -> String {
        self.target
            .with(|t| t.as_ref().map(|t| t.subscriber_id.to_string()))
            .unwrap_or_default()
    }

    pub fn subscriber_name(&self) -> String {
        self.target
            .with(|t| t.as_ref().map(|t| t.subscriber_name.clone()))
            .unwrap_or_default()
    }

    pub fn debt_label(&self) -> String {
        self.target
            .with(|t| t.as_ref().map(PaymentTarget::debt_label))
            .unwrap_or_default()
    }

    /// Fill the payment modal for `subscriber` and show it
    pub fn open(&self, modals: ModalService, subscriber: &SubscriberDto) {
        let target = PaymentTarget::from_subscriber(subscriber);
        log::debug!("payment for subscriber {}", target.subscriber_id);
        self.target.set(Some(target));
        self.amount.set(String::new());
        modals.open(MODAL_PAYMENT);
    }
}

impl Default for PaymentViewModel {
    fn default() -> Self {
        Self::new()
    }
}
