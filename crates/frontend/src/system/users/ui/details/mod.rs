pub mod view_model;

pub use view_model::{EditUserForm, UserEditViewModel};

use contracts::shared::form_target::FormTarget;
use contracts::system::users::UserRole;
use leptos::prelude::*;

use super::role_options;
use crate::layout::modal_service::use_modals;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::dom_ids::{
    EDIT_ROLE, EDIT_USERNAME, EDIT_USER_FORM, EDIT_USER_ID, MODAL_CREATE_USER, MODAL_EDIT_USER,
};
use crate::shared::modal_frame::ModalFrame;

#[component]
pub fn EditUserModal(vm: UserEditViewModel) -> impl IntoView {
    let modals = use_modals();

    view! {
        <ModalFrame id=MODAL_EDIT_USER title="Ulanyjyny üýtget">
            <form id=EDIT_USER_FORM method="post" action=vm.action()>
                <input
                    type="hidden"
                    id=EDIT_USER_ID
                    name="id"
                    prop:value=move || vm.id.get().to_string()
                />
                <Input
                    id=EDIT_USERNAME
                    name="username"
                    label="Ulanyjy ady"
                    value=vm.username
                    on_input=Callback::new(move |v: String| vm.username.set(v))
                    required=true
                />
                <Select
                    id=EDIT_ROLE
                    name="role"
                    label="Roly"
                    value=vm.role
                    on_change=Callback::new(move |v: String| vm.role.set(v))
                    options=role_options()
                />
                <Input
                    name="password"
                    label="Täze açar sözi"
                    input_type="password"
                    placeholder="Üýtgetmezlik üçin boş goýuň"
                    value=vm.password
                    on_input=Callback::new(move |v: String| vm.password.set(v))
                />
                <div class="form-actions">
                    <Button
                        variant="secondary"
                        on_click=Callback::new(move |_| modals.close(MODAL_EDIT_USER))
                    >
                        "Ýatyr"
                    </Button>
                    <Button button_type="submit">"Ýatda sakla"</Button>
                </div>
            </form>
        </ModalFrame>
    }
}

#[component]
pub fn CreateUserModal() -> impl IntoView {
    let modals = use_modals();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(UserRole::default().code().to_string());

    view! {
        <ModalFrame id=MODAL_CREATE_USER title="Täze ulanyjy">
            <form method="post" action=FormTarget::UserCreate.action()>
                <Input
                    name="username"
                    label="Ulanyjy ady"
                    value=username
                    on_input=Callback::new(move |v: String| username.set(v))
                    required=true
                />
                <Input
                    name="password"
                    label="Açar sözi"
                    input_type="password"
                    value=password
                    on_input=Callback::new(move |v: String| password.set(v))
                    required=true
                />
                <Select
                    name="role"
                    label="Roly"
                    value=role
                    on_change=Callback::new(move |v: String| role.set(v))
                    options=role_options()
                />
                <div class="form-actions">
                    <Button
                        variant="secondary"
                        on_click=Callback::new(move |_| modals.close(MODAL_CREATE_USER))
                    >
                        "Ýatyr"
                    </Button>
                    <Button button_type="submit">"Döret"</Button>
                </div>
            </form>
        </ModalFrame>
    }
}
