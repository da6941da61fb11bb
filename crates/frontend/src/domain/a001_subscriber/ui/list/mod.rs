pub mod state;

use contracts::domain::a001_subscriber::aggregate::{SearchType, SubscriberDto};
use contracts::domain::a003_payment::aggregate::CURRENCY;
use leptos::prelude::*;

use super::create::CreateSubscriberModal;
use super::details::{EditSubscriberModal, SubscriberEditViewModel};
use crate::domain::a003_payment::ui::modal::{PaymentModal, PaymentViewModel};
use crate::layout::modal_service::use_modals;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::confirm::ConfirmDeleteForm;
use crate::shared::dom_ids::MODAL_CREATE_SUBSCRIBER;
use crate::shared::page_data::use_page_data;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

fn search_type_options() -> Vec<(String, String)> {
    [
        (SearchType::Phone, "Telefon"),
        (SearchType::Name, "Ady"),
        (SearchType::Address, "Salgysy"),
        (SearchType::All, "Hemmesi"),
    ]
    .into_iter()
    .map(|(t, label)| (t.code().to_string(), label.to_string()))
    .collect()
}

#[component]
pub fn SubscriberListPage() -> impl IntoView {
    let modals = use_modals();
    let page = use_page_data();
    let subscribers = StoredValue::new(page.subscribers);

    let edit_vm = SubscriberEditViewModel::new();
    let payment_vm = PaymentViewModel::new();

    let search = RwSignal::new(state::read_search_from_location());
    Effect::new(move |_| {
        search.with(state::write_search_to_location);
    });

    let search_text = Signal::derive(move || search.with(|s| s.search.clone()));
    let search_type = Signal::derive(move || search.with(|s| s.search_type.code().to_string()));

    let visible = move || {
        let current = search.get();
        subscribers.with_value(|all| {
            current
                .apply(all)
                .into_iter()
                .cloned()
                .collect::<Vec<SubscriberDto>>()
        })
    };

    view! {
        <PageFrame page_id="a001_subscriber--list" category=PAGE_CAT_LIST title="Müşderiler">
            <div class="toolbar">
                <Input
                    name="search"
                    placeholder="Gözleg..."
                    value=search_text
                    on_input=Callback::new(move |v: String| search.update(|s| s.search = v))
                />
                <Select
                    name="type"
                    value=search_type
                    on_change=Callback::new(move |v: String| {
                        search.update(|s| s.search_type = SearchType::from_code(&v))
                    })
                    options=search_type_options()
                />
                <Button on_click=Callback::new(move |_| modals.open(MODAL_CREATE_SUBSCRIBER))>
                    "+ Täze müşderi"
                </Button>
            </div>

            <table class="table">
                <thead>
                    <tr>
                        <th>"№"</th>
                        <th>"Doly ady"</th>
                        <th>"Görnüşi"</th>
                        <th>"Telefonlar"</th>
                        <th>"Salgysy"</th>
                        <th>"Bergi"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=visible
                        key=|s| s.id
                        children=move |subscriber: SubscriberDto| {
                            let row = StoredValue::new(subscriber.clone());
                            let debt_class = if subscriber.debt > 0.0 { "debt debt--positive" } else { "debt" };
                            view! {
                                <tr>
                                    <td>{subscriber.id}</td>
                                    <td>{subscriber.full_name.clone()}</td>
                                    <td>{subscriber.client_type.label()}</td>
                                    <td>{subscriber.phones.join(", ")}</td>
                                    <td>{subscriber.address.clone().unwrap_or_default()}</td>
                                    <td class=debt_class>{format!("{} {}", subscriber.debt, CURRENCY)}</td>
                                    <td class="table__actions">
                                        <Button
                                            variant="secondary"
                                            size="sm"
                                            on_click=Callback::new(move |_| {
                                                row.with_value(|s| edit_vm.edit(modals, s))
                                            })
                                        >
                                            "Üýtget"
                                        </Button>
                                        <Button
                                            variant="secondary"
                                            size="sm"
                                            on_click=Callback::new(move |_| {
                                                row.with_value(|s| payment_vm.open(modals, s))
                                            })
                                        >
                                            "Töleg"
                                        </Button>
                                        <ConfirmDeleteForm
                                            action=subscriber.delete_target().action()
                                            message=format!(
                                                "{} öçürilsinmi? Ähli sargytlary we tölegleri hem öçüriler.",
                                                subscriber.full_name,
                                            )
                                        >
                                            "Öçür"
                                        </ConfirmDeleteForm>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <Show when=move || visible().is_empty()>
                <p class="table__empty">"Müşderi tapylmady"</p>
            </Show>

            <CreateSubscriberModal />
            <EditSubscriberModal vm=edit_vm />
            <PaymentModal vm=payment_vm />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_subscriber::aggregate::SubscriberSearch;

    #[test]
    fn test_search_type_options_cover_all_types() {
        let codes: Vec<String> = search_type_options().into_iter().map(|(c, _)| c).collect();
        assert_eq!(codes, vec!["phone", "name", "address", "all"]);
        assert_eq!(SubscriberSearch::default().search_type.code(), "phone");
    }
}
