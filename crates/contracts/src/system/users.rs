use serde::{Deserialize, Serialize};

use crate::shared::form_target::FormTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    #[serde(other)]
    User,
}

impl UserRole {
    pub fn from_code(code: &str) -> Self {
        if code == "admin" {
            UserRole::Admin
        } else {
            UserRole::User
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Dolandyryjy",
            UserRole::User => "Ulanyjy",
        }
    }

    pub fn all() -> [UserRole; 2] {
        [UserRole::Admin, UserRole::User]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    pub fn edit_target(&self) -> FormTarget {
        FormTarget::UserEdit(self.id)
    }

    pub fn delete_target(&self) -> FormTarget {
        FormTarget::UserDelete(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_codes() {
        assert_eq!(UserRole::from_code("admin"), UserRole::Admin);
        assert_eq!(UserRole::from_code("operator"), UserRole::User);
        let role: UserRole = serde_json::from_str("\"manager\"").unwrap();
        assert_eq!(role, UserRole::User);
    }

    #[test]
    fn test_user_targets() {
        let user = User {
            id: 2,
            username: "kassa".to_string(),
            role: UserRole::User,
            created_at: None,
        };
        assert_eq!(user.edit_target().action(), "/admin/users/2/edit");
        assert_eq!(user.delete_target().action(), "/admin/users/2/delete");
    }
}
