pub mod state;

pub use state::{PhoneRow, PhoneRowList};

use leptos::prelude::*;

use crate::shared::components::ui::Button;
use crate::shared::dom_ids::{CLASS_FORM_CONTROL, CLASS_PHONE_ROW, CLASS_REMOVE_PHONE};

pub const PHONE_PLACEHOLDER: &str = "Telefon belgisi";

/// Repeatable `phones[]` inputs inside the container `container_id`.
///
/// Each form owns its own `rows` signal, so the create and edit containers
/// never affect each other.
#[component]
pub fn PhoneRows(
    /// `phone-inputs` or `edit-phone-inputs`
    container_id: &'static str,
    rows: RwSignal<PhoneRowList>,
) -> impl IntoView {
    let add_row = move |_: leptos::ev::MouseEvent| {
        rows.update(|r| {
            r.add_row();
        });
    };

    view! {
        <div id=container_id class="phone-inputs">
            <For
                each=move || rows.get().rows().to_vec()
                key=|row| row.key
                children=move |row: PhoneRow| {
                    let key = row.key;
                    view! {
                        <div class=CLASS_PHONE_ROW>
                            <input
                                type="text"
                                name="phones[]"
                                class=CLASS_FORM_CONTROL
                                placeholder=PHONE_PLACEHOLDER
                                prop:value=row.value
                                on:input=move |ev| {
                                    rows.update(|r| r.set_value(key, event_target_value(&ev)))
                                }
                            />
                            <button
                                type="button"
                                class=CLASS_REMOVE_PHONE
                                on:click=move |_| {
                                    rows.update(|r| {
                                        r.remove_row(key);
                                    })
                                }
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
        <Button variant="ghost" size="sm" on_click=Callback::new(add_row)>
            "+ Telefon goş"
        </Button>
    }
}
