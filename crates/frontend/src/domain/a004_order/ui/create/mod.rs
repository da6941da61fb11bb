pub mod view_model;

pub use view_model::OrderFormState;

use contracts::domain::a004_order::aggregate::{
    OrderDraft, CREDIT_BOTTLE_PRICE, CREDIT_WATER_PRICE,
};
use contracts::shared::form_target::FormTarget;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlSelectElement};

use crate::shared::components::ui::{Button, Input};
use crate::shared::dom_ids::{
    CLASS_FORM_CONTROL, ORDER_DEBT, ORDER_TOTAL, PRICE_EXCHANGE, PRICE_NEW, PRICE_WATER,
    SELECTED_CLIENT_TYPE,
};
use crate::shared::page_data::use_page_data;
use view_model::{parse_paid_amount, parse_quantity, subscribers_by_name};

/// `data-type` of the currently selected option, if it has one
fn selected_option_type(select: &HtmlSelectElement) -> Option<String> {
    let index = u32::try_from(select.selected_index()).ok()?;
    let option: HtmlElement = select.item(index)?.dyn_into().ok()?;
    option.dataset().get("type")
}

/// Create-order form shown above the order list.
#[component]
pub fn OrderCreateForm() -> impl IntoView {
    let page = use_page_data();
    let prices = StoredValue::new(page.prices);
    let subscribers = subscribers_by_name(page.subscribers);

    let state = RwSignal::new(OrderFormState::default());

    let on_subscriber_select = move |ev: web_sys::Event| {
        let Some(select) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
        else {
            return;
        };
        let option_type = selected_option_type(&select);
        state.update(|s| {
            if s.select_subscriber(option_type.as_deref()) {
                log::debug!("order client type: {:?}", s.client_type);
            }
        });
    };

    let display = move || state.with(|s| prices.with_value(|p| s.price_display(p)));
    let total = move || state.with(|s| prices.with_value(|p| s.total_label(p)));
    let debt = move || state.with(|s| prices.with_value(|p| s.debt_label(p)));
    let is_credit = move || state.with(|s| s.draft.is_credit());

    let quantity_input = move |name: &'static str, label: String, apply: fn(&mut OrderDraft, u32)| {
        let value = RwSignal::new(String::new());
        view! {
            <Input
                name=name
                label=label
                input_type="number"
                min="0"
                value=value
                on_input=Callback::new(move |v: String| {
                    let qty = parse_quantity(&v);
                    value.set(v);
                    state.update(|s| apply(&mut s.draft, qty));
                })
            />
        }
    };

    let paid_amount = RwSignal::new(String::new());

    view! {
        <form method="post" action=FormTarget::OrderCreate.action() class="order-form">
            <div class="form-group">
                <label class="form-label" for="order-subscriber">"Müşderi"</label>
                <select
                    id="order-subscriber"
                    name="subscriber_id"
                    class=CLASS_FORM_CONTROL
                    required=true
                    on:change=on_subscriber_select
                >
                    <option value="">"— Müşderi saýlaň —"</option>
                    {subscribers
                        .into_iter()
                        .map(|s| {
                            view! {
                                <option value=s.id.to_string() data-type=s.client_type.code()>
                                    {s.full_name}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <span class="client-type">
                    "Görnüşi: "
                    <strong id=SELECTED_CLIENT_TYPE>{move || state.with(|s| s.client_label())}</strong>
                </span>
            </div>

            <table class="table price-table">
                <thead>
                    <tr>
                        <th>"Täze çüýşe"</th>
                        <th>"Çalyşyk"</th>
                        <th>"Diňe suw"</th>
                    </tr>
                </thead>
                <tbody>
                    <tr>
                        <td id=PRICE_NEW>{move || display().new_bottle}</td>
                        <td id=PRICE_EXCHANGE>{move || display().exchange}</td>
                        <td id=PRICE_WATER>{move || display().water_only}</td>
                    </tr>
                </tbody>
            </table>

            <fieldset class="order-form__standard" class:order-form__ignored=is_credit>
                {quantity_input("new_bottles", "Täze çüýşe".to_string(), |d, q| d.new_bottles = q)}
                {quantity_input("exchange_bottles", "Çalyşyk".to_string(), |d, q| d.exchange_bottles = q)}
                {quantity_input("water_only", "Diňe suw".to_string(), |d, q| d.water_only = q)}
                {quantity_input("free_bottles", "Mugt goýlan".to_string(), |d, q| d.free_bottles = q)}
                <Input
                    name="paid_amount"
                    label="Tölenen mukdar"
                    placeholder="Doly tölendi"
                    input_type="number"
                    min="0"
                    step="0.01"
                    value=paid_amount
                    on_input=Callback::new(move |v: String| {
                        let paid = parse_paid_amount(&v);
                        paid_amount.set(v);
                        state.update(|s| s.draft.paid_amount = paid);
                    })
                />
            </fieldset>

            <fieldset class="order-form__credit">
                <legend>"Karz"</legend>
                {quantity_input(
                    "gap_bilen",
                    format!("Gap bilen × {}", CREDIT_BOTTLE_PRICE),
                    |d, q| d.credit_bottles = q,
                )}
                {quantity_input(
                    "dine_suw",
                    format!("Diňe suw × {}", CREDIT_WATER_PRICE),
                    |d, q| d.credit_water = q,
                )}
            </fieldset>

            <div class="form-group">
                <label class="form-label">
                    <input
                        type="checkbox"
                        name="is_free"
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            state.update(|s| s.draft.is_free = checked);
                        }
                    />
                    " Mugt sargyt"
                </label>
            </div>

            <p class="order-total">
                "Jemi: "
                <strong id=ORDER_TOTAL>{total}</strong>
                " · Bergi: "
                <strong id=ORDER_DEBT>{debt}</strong>
                " · Çüýşe: "
                <strong>{move || state.with(|s| s.draft.bottles_out())}</strong>
            </p>

            <div class="form-actions">
                <Button button_type="submit">"Sargyt döret"</Button>
            </div>
        </form>
    }
}
