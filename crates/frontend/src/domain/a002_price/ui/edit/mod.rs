pub mod state;

use contracts::domain::a001_subscriber::aggregate::ClientType;
use contracts::shared::form_target::FormTarget;
use leptos::prelude::*;

use crate::shared::components::ui::{Button, Input};
use crate::shared::page_data::use_page_data;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use state::{price_form_rows, PriceField};

fn price_input(field: PriceField) -> impl IntoView {
    let value = RwSignal::new(field.value);
    view! {
        <Input
            name=field.name
            input_type="number"
            min="0"
            step="0.01"
            required=true
            placeholder=field.placeholder
            value=value
            on_input=Callback::new(move |v: String| value.set(v))
        />
    }
}

/// Price list for both client types, saved in one POST.
#[component]
pub fn PricesPage() -> impl IntoView {
    let rows = price_form_rows(&use_page_data().price_rows);
    let empty = rows.is_empty();

    view! {
        <PageFrame page_id="a002_price--edit" category=PAGE_CAT_SYSTEM title="Bahalar">
            {empty.then(|| view! { <p class="table__empty">"Bahalar ýok"</p> })}
            <form method="post" action=FormTarget::PricesUpdate.action() class="price-form">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Amal"</th>
                            {ClientType::all()
                                .into_iter()
                                .map(|ct| view! { <th>{ct.label()}</th> })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr data-price-id=row.id.to_string()>
                                        <td>{row.label}</td>
                                        {row
                                            .fields
                                            .into_iter()
                                            .map(|field| view! { <td>{price_input(field)}</td> })
                                            .collect_view()}
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
                <div class="form-actions">
                    <Button button_type="submit">"Ýatda sakla"</Button>
                </div>
            </form>
        </PageFrame>
    }
}
