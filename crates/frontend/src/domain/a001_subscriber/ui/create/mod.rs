use contracts::domain::a001_subscriber::aggregate::ClientType;
use contracts::shared::form_target::FormTarget;
use leptos::prelude::*;

use super::client_type_options;
use crate::layout::modal_service::use_modals;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::dom_ids::{MODAL_CREATE_SUBSCRIBER, PHONE_INPUTS};
use crate::shared::modal_frame::ModalFrame;
use crate::shared::phone_rows::{PhoneRowList, PhoneRows};

/// New-subscriber modal posting to `/subscribers/create`.
///
/// Its `phone-inputs` rows are independent of the edit form's rows.
#[component]
pub fn CreateSubscriberModal() -> impl IntoView {
    let modals = use_modals();

    let full_name = RwSignal::new(String::new());
    let client_type = RwSignal::new(ClientType::default().code().to_string());
    let address = RwSignal::new(String::new());
    let phones = RwSignal::new(PhoneRowList::with_blank_row());

    view! {
        <ModalFrame id=MODAL_CREATE_SUBSCRIBER title="Täze müşderi">
            <form method="post" action=FormTarget::SubscriberCreate.action()>
                <Input
                    name="full_name"
                    label="Doly ady"
                    value=full_name
                    on_input=Callback::new(move |v: String| full_name.set(v))
                    required=true
                />
                <Select
                    name="client_type"
                    label="Müşderi görnüşi"
                    value=client_type
                    on_change=Callback::new(move |v: String| client_type.set(v))
                    options=client_type_options()
                />
                <Input
                    name="address"
                    label="Salgysy"
                    value=address
                    on_input=Callback::new(move |v: String| address.set(v))
                />
                <div class="form-group">
                    <label class="form-label">"Telefonlar"</label>
                    <PhoneRows container_id=PHONE_INPUTS rows=phones />
                </div>
                <div class="form-actions">
                    <Button
                        variant="secondary"
                        on_click=Callback::new(move |_| modals.close(MODAL_CREATE_SUBSCRIBER))
                    >
                        "Ýatyr"
                    </Button>
                    <Button button_type="submit">"Döret"</Button>
                </div>
            </form>
        </ModalFrame>
    }
}
