use anyhow::Context;
use serde::de::DeserializeOwned;

/// Decode a JSON payload the server rendered into a `window` global.
///
/// `name` is only used for the error context.
pub fn decode_page_global<T: DeserializeOwned>(name: &str, raw: &str) -> anyhow::Result<T> {
    serde_json::from_str(raw).with_context(|| format!("window.{} is malformed", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_subscriber::aggregate::{ClientType, SubscriberDto};
    use crate::system::users::{User, UserRole};

    #[test]
    fn test_decode_subscribers_with_defaults() {
        let raw = r#"[{"id": 5, "full_name": "Aman", "client_type": "legal"}]"#;
        let list: Vec<SubscriberDto> = decode_page_global("currentSubscribers", raw).unwrap();
        assert_eq!(list[0].client_type, ClientType::Legal);
        assert!(list[0].phones.is_empty());
        assert_eq!(list[0].debt, 0.0);
    }

    #[test]
    fn test_decode_users_default_role() {
        let users: Vec<User> =
            decode_page_global("currentUsers", r#"[{"id": 2, "username": "kassa"}]"#).unwrap();
        assert_eq!(users[0].role, UserRole::User);
    }

    #[test]
    fn test_error_names_the_global() {
        let err = decode_page_global::<Vec<User>>("currentUsers", "{").unwrap_err();
        assert_eq!(err.to_string(), "window.currentUsers is malformed");
    }
}
