use contracts::system::users::User;
use leptos::prelude::*;

use super::details::{CreateUserModal, EditUserModal, UserEditViewModel};
use crate::layout::modal_service::use_modals;
use crate::shared::components::ui::Button;
use crate::shared::confirm::ConfirmDeleteForm;
use crate::shared::dom_ids::MODAL_CREATE_USER;
use crate::shared::page_data::use_page_data;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

#[component]
pub fn UsersListPage() -> impl IntoView {
    let modals = use_modals();
    let mut users = use_page_data().users;
    users.sort_by_key(|u| u.id);

    let edit_vm = UserEditViewModel::new();

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_SYSTEM title="Ulanyjylar">
            <div class="toolbar">
                <Button on_click=Callback::new(move |_| modals.open(MODAL_CREATE_USER))>
                    "+ Täze ulanyjy"
                </Button>
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>"№"</th>
                        <th>"Ulanyjy ady"</th>
                        <th>"Roly"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {users
                        .into_iter()
                        .map(|user: User| {
                            let row = StoredValue::new(user.clone());
                            view! {
                                <tr>
                                    <td>{user.id}</td>
                                    <td>{user.username.clone()}</td>
                                    <td>{user.role.label()}</td>
                                    <td class="table__actions">
                                        <Button
                                            variant="secondary"
                                            size="sm"
                                            on_click=Callback::new(move |_| {
                                                row.with_value(|u| edit_vm.edit(modals, u))
                                            })
                                        >
                                            "Üýtget"
                                        </Button>
                                        <ConfirmDeleteForm
                                            action=user.delete_target().action()
                                            message=format!("{} öçürilsinmi?", user.username)
                                        >
                                            "Öçür"
                                        </ConfirmDeleteForm>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>

            <CreateUserModal />
            <EditUserModal vm=edit_vm />
        </PageFrame>
    }
}
