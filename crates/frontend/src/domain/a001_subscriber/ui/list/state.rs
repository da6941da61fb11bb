use contracts::domain::a001_subscriber::aggregate::{SearchType, SubscriberSearch};

use crate::shared::query_string::{build_query, current_query, parse_params, replace_query};

/// Parse `?search=..&type=..`; unknown keys are ignored
pub fn parse_search(query: &str) -> SubscriberSearch {
    let params = parse_params(query);
    SubscriberSearch {
        search: params.get("search").cloned().unwrap_or_default(),
        search_type: params
            .get("type")
            .map(|t| SearchType::from_code(t))
            .unwrap_or_default(),
    }
}

/// Query string for the search, empty when nothing is searched
pub fn search_query(search: &SubscriberSearch) -> String {
    if search.search.is_empty() {
        return String::new();
    }
    build_query(&[
        ("search", search.search.as_str()),
        ("type", search.search_type.code()),
    ])
}

pub fn read_search_from_location() -> SubscriberSearch {
    parse_search(&current_query())
}

/// Mirror the search into the address bar without reloading
pub fn write_search_to_location(search: &SubscriberSearch) {
    replace_query(&search_query(search));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_defaults_to_phone() {
        let search = parse_search("?search=6512");
        assert_eq!(search.search, "6512");
        assert_eq!(search.search_type, SearchType::Phone);
        assert_eq!(parse_search(""), SubscriberSearch::default());
    }

    #[test]
    fn test_parse_search_type() {
        assert_eq!(parse_search("search=x&type=name").search_type, SearchType::Name);
        assert_eq!(parse_search("search=x&type=address").search_type, SearchType::Address);
        assert_eq!(parse_search("search=x&type=zzz").search_type, SearchType::All);
    }

    #[test]
    fn test_query_roundtrip_with_spaces() {
        let search = SubscriberSearch {
            search: "Oguz han".to_string(),
            search_type: SearchType::Address,
        };
        assert_eq!(parse_search(&search_query(&search)), search);
    }

    #[test]
    fn test_empty_search_has_no_query() {
        let search = SubscriberSearch {
            search: String::new(),
            search_type: SearchType::Name,
        };
        assert_eq!(search_query(&search), "");
    }
}
