use serde::{Deserialize, Serialize};

use crate::shared::form_target::FormTarget;
use crate::shared::phones::join_phones;

/// Категория клиента: юридическое лицо (магазины) или физическое лицо.
///
/// Any code other than `legal` decodes to `Individual`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientType {
    Legal,
    #[default]
    #[serde(other)]
    Individual,
}

impl ClientType {
    pub fn from_code(code: &str) -> Self {
        if code == "legal" {
            ClientType::Legal
        } else {
            ClientType::Individual
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ClientType::Legal => "legal",
            ClientType::Individual => "individual",
        }
    }

    /// Suffix of the price table keys (`new_legal`, `water_individual`, ...)
    pub fn price_suffix(&self) -> &'static str {
        self.code()
    }

    /// Localized label shown next to the subscriber select
    pub fn label(&self) -> &'static str {
        match self {
            ClientType::Legal => "Ýuridik şahs",
            ClientType::Individual => "Fiziki şahs",
        }
    }

    pub fn all() -> [ClientType; 2] {
        [ClientType::Legal, ClientType::Individual]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriberDto {
    pub id: i64,
    pub full_name: String,
    pub client_type: ClientType,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub debt: f64,
    #[serde(default)]
    pub phones: Vec<String>,
}

impl SubscriberDto {
    /// Phones as the comma separated string the edit form is populated from
    pub fn phones_csv(&self) -> String {
        join_phones(&self.phones)
    }

    pub fn edit_target(&self) -> FormTarget {
        FormTarget::SubscriberEdit(self.id)
    }

    pub fn delete_target(&self) -> FormTarget {
        FormTarget::SubscriberDelete(self.id)
    }
}

/// Поле, по которому ищутся абоненты в списке.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    #[default]
    Phone,
    Name,
    Address,
    #[serde(other)]
    All,
}

impl SearchType {
    pub fn from_code(code: &str) -> Self {
        match code {
            "phone" => SearchType::Phone,
            "name" => SearchType::Name,
            "address" => SearchType::Address,
            _ => SearchType::All,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            SearchType::Phone => "phone",
            SearchType::Name => "name",
            SearchType::Address => "address",
            SearchType::All => "all",
        }
    }
}

/// Query string state of the subscriber list (`?search=..&type=..`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubscriberSearch {
    #[serde(default)]
    pub search: String,
    #[serde(default, rename = "type")]
    pub search_type: SearchType,
}

impl SubscriberSearch {
    /// Case-insensitive substring match; an empty search matches everything
    pub fn matches(&self, subscriber: &SubscriberDto) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);
        let by_name = || contains(&subscriber.full_name);
        let by_phone = || subscriber.phones.iter().any(|p| contains(p));
        let by_address = || subscriber.address.as_deref().map(contains).unwrap_or(false);

        match self.search_type {
            SearchType::Name => by_name(),
            SearchType::Phone => by_phone(),
            SearchType::Address => by_address(),
            SearchType::All => by_name() || by_phone() || by_address(),
        }
    }

    /// Subscribers matching the search, newest first
    pub fn apply<'a>(&self, subscribers: &'a [SubscriberDto]) -> Vec<&'a SubscriberDto> {
        let mut found: Vec<&SubscriberDto> =
            subscribers.iter().filter(|s| self.matches(s)).collect();
        found.sort_by(|a, b| b.id.cmp(&a.id));
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subscriber(id: i64, name: &str, address: Option<&str>, phones: &[&str]) -> SubscriberDto {
        SubscriberDto {
            id,
            full_name: name.to_string(),
            client_type: ClientType::Individual,
            address: address.map(str::to_string),
            debt: 0.0,
            phones: phones.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_client_type_from_code() {
        assert_eq!(ClientType::from_code("legal"), ClientType::Legal);
        assert_eq!(ClientType::from_code("individual"), ClientType::Individual);
        assert_eq!(ClientType::from_code("shop"), ClientType::Individual);
        assert_eq!(ClientType::from_code(""), ClientType::Individual);
    }

    #[test]
    fn test_client_type_deserialize_unknown_is_individual() {
        let ct: ClientType = serde_json::from_str("\"legal\"").unwrap();
        assert_eq!(ct, ClientType::Legal);
        let ct: ClientType = serde_json::from_str("\"wholesale\"").unwrap();
        assert_eq!(ct, ClientType::Individual);
    }

    #[test]
    fn test_labels() {
        assert_eq!(ClientType::Legal.label(), "Ýuridik şahs");
        assert_eq!(ClientType::Individual.label(), "Fiziki şahs");
    }

    #[test]
    fn test_phones_csv_and_targets() {
        let s = subscriber(7, "Aman", None, &["111", "222"]);
        assert_eq!(s.phones_csv(), "111,222");
        assert_eq!(s.edit_target().action(), "/subscribers/7/edit");
        assert_eq!(s.delete_target().action(), "/subscribers/7/delete");
    }

    #[test]
    fn test_search_by_phone_is_default() {
        let list = vec![
            subscriber(1, "Aman", Some("Mir 5"), &["+99365123456"]),
            subscriber(2, "Maral", Some("Oguz han 12"), &["+99361000000"]),
        ];
        let search = SubscriberSearch {
            search: "6512".to_string(),
            ..Default::default()
        };
        let found = search.apply(&list);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[test]
    fn test_search_all_fields_newest_first() {
        let list = vec![
            subscriber(1, "Aman", Some("Mir 5"), &[]),
            subscriber(3, "Batyr", None, &["MIR-line"]),
            subscriber(2, "Mirat", None, &[]),
        ];
        let search = SubscriberSearch {
            search: "mir".to_string(),
            search_type: SearchType::All,
        };
        let ids: Vec<i64> = search.apply(&list).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_search_address_skips_missing() {
        let list = vec![subscriber(1, "Aman", None, &[])];
        let search = SubscriberSearch {
            search: "x".to_string(),
            search_type: SearchType::Address,
        };
        assert!(search.apply(&list).is_empty());
    }
}
