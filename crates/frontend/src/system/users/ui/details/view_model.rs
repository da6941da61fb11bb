use contracts::shared::form_target::FormTarget;
use contracts::system::users::{User, UserRole};
use leptos::prelude::*;

use crate::layout::modal_service::ModalService;
use crate::shared::dom_ids::MODAL_EDIT_USER;

/// Values the edit-user form is filled with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditUserForm {
    pub id: i64,
    pub username: String,
    pub role: UserRole,
}

impl EditUserForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            role: user.role,
        }
    }

    pub fn action(&self) -> String {
        FormTarget::UserEdit(self.id).action()
    }
}

#[derive(Clone, Copy)]
pub struct UserEditViewModel {
    pub id: RwSignal<i64>,
    pub username: RwSignal<String>,
    pub role: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl UserEditViewModel {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(0),
            username: RwSignal::new(String::new()),
            role: RwSignal::new(UserRole::default().code().to_string()),
            password: RwSignal::new(String::new()),
        }
    }

    pub fn action(&self) -> impl Fn() -> String + Copy + 'static {
        let id = self.id;
        move || FormTarget::UserEdit(id.get()).action()
    }

    pub fn populate(&self, form: EditUserForm) {
        self.id.set(form.id);
        self.username.set(form.username);
        self.role.set(form.role.code().to_string());
        // Blank password keeps the current one.
        self.password.set(String::new());
    }

    pub fn edit(&self, modals: ModalService, user: &User) {
        log::debug!("edit user {}", user.id);
        self.populate(EditUserForm::from_user(user));
        modals.open(MODAL_EDIT_USER);
    }
}

impl Default for UserEditViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_user() {
        let user = User {
            id: 3,
            username: "kassa".to_string(),
            role: UserRole::Admin,
            created_at: None,
        };
        let form = EditUserForm::from_user(&user);
        assert_eq!(form.username, "kassa");
        assert_eq!(form.role, UserRole::Admin);
        assert_eq!(form.action(), "/admin/users/3/edit");
    }
}
