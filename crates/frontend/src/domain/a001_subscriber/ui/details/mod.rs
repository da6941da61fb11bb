pub mod view_model;

pub use view_model::{EditSubscriberForm, SubscriberEditViewModel};

use leptos::prelude::*;

use super::client_type_options;
use crate::layout::modal_service::use_modals;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::dom_ids::{
    EDIT_ADDRESS, EDIT_CLIENT_TYPE, EDIT_FULL_NAME, EDIT_PHONE_INPUTS, EDIT_SUBSCRIBER_FORM,
    EDIT_SUBSCRIBER_ID, MODAL_EDIT_SUBSCRIBER,
};
use crate::shared::modal_frame::ModalFrame;
use crate::shared::phone_rows::PhoneRows;

/// Edit-subscriber modal. Filled through `SubscriberEditViewModel::edit`,
/// submitted natively to `/subscribers/{id}/edit`.
#[component]
pub fn EditSubscriberModal(vm: SubscriberEditViewModel) -> impl IntoView {
    let modals = use_modals();

    view! {
        <ModalFrame id=MODAL_EDIT_SUBSCRIBER title="Müşderini üýtget">
            <form id=EDIT_SUBSCRIBER_FORM method="post" action=vm.action()>
                <input
                    type="hidden"
                    id=EDIT_SUBSCRIBER_ID
                    name="id"
                    prop:value=move || vm.id.get().to_string()
                />
                <Input
                    id=EDIT_FULL_NAME
                    name="full_name"
                    label="Doly ady"
                    value=vm.full_name
                    on_input=Callback::new(move |v: String| vm.full_name.set(v))
                    required=true
                />
                <Select
                    id=EDIT_CLIENT_TYPE
                    name="client_type"
                    label="Müşderi görnüşi"
                    value=vm.client_type
                    on_change=Callback::new(move |v: String| vm.client_type.set(v))
                    options=client_type_options()
                />
                <Input
                    id=EDIT_ADDRESS
                    name="address"
                    label="Salgysy"
                    value=vm.address
                    on_input=Callback::new(move |v: String| vm.address.set(v))
                />
                <div class="form-group">
                    <label class="form-label">"Telefonlar"</label>
                    <PhoneRows container_id=EDIT_PHONE_INPUTS rows=vm.phones />
                </div>
                <div class="form-actions">
                    <Button
                        variant="secondary"
                        on_click=Callback::new(move |_| modals.close(MODAL_EDIT_SUBSCRIBER))
                    >
                        "Ýatyr"
                    </Button>
                    <Button button_type="submit">"Ýatda sakla"</Button>
                </div>
            </form>
        </ModalFrame>
    }
}
