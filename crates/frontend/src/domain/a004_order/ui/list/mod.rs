pub mod state;

use contracts::domain::a003_payment::aggregate::CURRENCY;
use contracts::domain::a004_order::aggregate::{OrderDto, OrderSearch, OrderSearchType};
use leptos::prelude::*;

use super::create::OrderCreateForm;
use crate::shared::components::ui::{Input, Select};
use crate::shared::confirm::ConfirmDeleteForm;
use crate::shared::page_data::use_page_data;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

fn search_type_options() -> Vec<(String, String)> {
    [
        (OrderSearchType::All, "Hemmesi"),
        (OrderSearchType::Id, "Sargyt №"),
        (OrderSearchType::Address, "Salgysy"),
    ]
    .into_iter()
    .map(|(t, label)| (t.code().to_string(), label.to_string()))
    .collect()
}

/// `2025-03-15 10:20:00` → `2025-03-15 10:20`
fn short_datetime(raw: &str) -> String {
    raw.replacen('T', " ", 1).chars().take(16).collect()
}

#[component]
pub fn OrderListPage() -> impl IntoView {
    let page = use_page_data();
    let orders = StoredValue::new(page.orders);

    let search = RwSignal::new(state::read_order_search_from_location());
    Effect::new(move |_| {
        search.with(state::write_order_search_to_location);
    });

    let field = move |get: fn(&OrderSearch) -> String| {
        Signal::derive(move || search.with(get))
    };

    let visible = move || {
        let current = search.get();
        orders.with_value(|all| {
            current
                .apply(all)
                .into_iter()
                .cloned()
                .collect::<Vec<OrderDto>>()
        })
    };

    view! {
        <PageFrame page_id="a004_order--list" category=PAGE_CAT_LIST title="Sargytlar">
            <OrderCreateForm />

            <div class="toolbar">
                <Input
                    name="search"
                    placeholder="Gözleg..."
                    value=field(|s| s.search.clone())
                    on_input=Callback::new(move |v: String| search.update(|s| s.search = v))
                />
                <Select
                    name="type"
                    value=field(|s| s.search_type.code().to_string())
                    on_change=Callback::new(move |v: String| {
                        search.update(|s| s.search_type = OrderSearchType::from_code(&v))
                    })
                    options=search_type_options()
                />
                <Input
                    name="date_from"
                    label="Başlangyç"
                    input_type="date"
                    value=field(|s| s.date_from.clone())
                    on_input=Callback::new(move |v: String| search.update(|s| s.date_from = v))
                />
                <Input
                    name="date_to"
                    label="Soňy"
                    input_type="date"
                    value=field(|s| s.date_to.clone())
                    on_input=Callback::new(move |v: String| search.update(|s| s.date_to = v))
                />
            </div>

            <table class="table">
                <thead>
                    <tr>
                        <th>"№"</th>
                        <th>"Senesi"</th>
                        <th>"Müşderi"</th>
                        <th>"Salgysy"</th>
                        <th>"Täze"</th>
                        <th>"Çalyşyk"</th>
                        <th>"Diňe suw"</th>
                        <th>"Mugt"</th>
                        <th>"Jemi"</th>
                        <th>"Tölenen"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=visible
                        key=|o| o.id
                        children=move |order: OrderDto| {
                            let debt_class = if order.debt() > 0.0 { "debt debt--positive" } else { "debt" };
                            let row_class = if order.is_free { "order order--free" } else { "order" };
                            view! {
                                <tr class=row_class>
                                    <td>{order.id}</td>
                                    <td>{short_datetime(&order.created_at)}</td>
                                    <td>{order.subscriber_name.clone()}</td>
                                    <td>{order.address.clone().unwrap_or_default()}</td>
                                    <td>{order.new_bottles}</td>
                                    <td>{order.exchange_bottles}</td>
                                    <td>{order.water_only}</td>
                                    <td>{order.free_bottles}</td>
                                    <td>{format!("{} {}", order.total_amount, CURRENCY)}</td>
                                    <td class=debt_class>{format!("{} {}", order.paid_amount, CURRENCY)}</td>
                                    <td class="table__actions">
                                        <ConfirmDeleteForm
                                            action=order.delete_target().action()
                                            message=format!("Sargyt №{} öçürilsinmi?", order.id)
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
                <p class="table__empty">"Sargyt tapylmady"</p>
            </Show>
        </PageFrame>
    }
}
