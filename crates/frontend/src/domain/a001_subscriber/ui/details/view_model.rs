use contracts::domain::a001_subscriber::aggregate::{ClientType, SubscriberDto};
use contracts::shared::form_target::FormTarget;
use leptos::prelude::*;

use crate::layout::modal_service::ModalService;
use crate::shared::dom_ids::MODAL_EDIT_SUBSCRIBER;
use crate::shared::phone_rows::PhoneRowList;

/// Values the edit-subscriber form is filled with.
///
/// Nothing is validated; the row that opened the form is trusted.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSubscriberForm {
    pub id: i64,
    pub full_name: String,
    pub client_type: ClientType,
    pub address: String,
    pub phones: PhoneRowList,
}

impl EditSubscriberForm {
    pub fn new(
        id: i64,
        full_name: &str,
        client_type: ClientType,
        address: &str,
        phones_csv: Option<&str>,
    ) -> Self {
        let mut phones = PhoneRowList::new();
        phones.rebuild(phones_csv);
        Self {
            id,
            full_name: full_name.to_string(),
            client_type,
            address: address.to_string(),
            phones,
        }
    }

    pub fn from_subscriber(subscriber: &SubscriberDto) -> Self {
        let phones_csv = subscriber.phones_csv();
        Self::new(
            subscriber.id,
            &subscriber.full_name,
            subscriber.client_type,
            subscriber.address.as_deref().unwrap_or_default(),
            Some(phones_csv.as_str()),
        )
    }

    pub fn action(&self) -> String {
        FormTarget::SubscriberEdit(self.id).action()
    }
}

/// Signals behind the edit-subscriber modal
#[derive(Clone, Copy)]
pub struct SubscriberEditViewModel {
    pub id: RwSignal<i64>,
    pub full_name: RwSignal<String>,
    pub client_type: RwSignal<String>,
    pub address: RwSignal<String>,
    pub phones: RwSignal<PhoneRowList>,
}

impl SubscriberEditViewModel {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(0),
            full_name: RwSignal::new(String::new()),
            client_type: RwSignal::new(ClientType::default().code().to_string()),
            address: RwSignal::new(String::new()),
            phones: RwSignal::new(PhoneRowList::with_blank_row()),
        }
    }

    /// Form action; changes every time the form is repopulated
    pub fn action(&self) -> impl Fn() -> String + Copy + 'static {
        let id = self.id;
        move || FormTarget::SubscriberEdit(id.get()).action()
    }

    pub fn populate(&self, form: EditSubscriberForm) {
        log::debug!(
            "edit subscriber {}: {} phone row(s)",
            form.id,
            form.phones.len()
        );
        self.id.set(form.id);
        self.full_name.set(form.full_name);
        self.client_type.set(form.client_type.code().to_string());
        self.address.set(form.address);
        self.phones.set(form.phones);
    }

    /// Fill the form from a list row and show the modal
    pub fn edit(&self, modals: ModalService, subscriber: &SubscriberDto) {
        self.populate(EditSubscriberForm::from_subscriber(subscriber));
        modals.open(MODAL_EDIT_SUBSCRIBER);
    }
}

impl Default for SubscriberEditViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_splits_and_trims_phones() {
        let form = EditSubscriberForm::new(12, "Aman", ClientType::Legal, "Mir 5", Some("123, 456"));
        assert_eq!(form.phones.values(), vec!["123", "456"]);
        assert_eq!(form.action(), "/subscribers/12/edit");
    }

    #[test]
    fn test_new_without_phones_has_blank_row() {
        for csv in [None, Some("")] {
            let form = EditSubscriberForm::new(1, "Aman", ClientType::Individual, "", csv);
            assert_eq!(form.phones.len(), 1);
            assert_eq!(form.phones.values(), vec![String::new()]);
        }
    }

    #[test]
    fn test_from_subscriber() {
        let subscriber = SubscriberDto {
            id: 44,
            full_name: "Maral".to_string(),
            client_type: ClientType::Legal,
            address: None,
            debt: 15.0,
            phones: vec!["+99365000001".to_string(), "+99365000002".to_string()],
        };
        let form = EditSubscriberForm::from_subscriber(&subscriber);
        assert_eq!(form.id, 44);
        assert_eq!(form.address, "");
        assert_eq!(form.client_type, ClientType::Legal);
        assert_eq!(form.phones.values(), subscriber.phones);
    }

    #[test]
    fn test_from_subscriber_without_phones() {
        let subscriber = SubscriberDto {
            id: 1,
            full_name: "Batyr".to_string(),
            client_type: ClientType::Individual,
            address: Some("Oguz han 1".to_string()),
            debt: 0.0,
            phones: vec![],
        };
        let form = EditSubscriberForm::from_subscriber(&subscriber);
        assert_eq!(form.phones.len(), 1);
        assert_eq!(form.address, "Oguz han 1");
    }
}
