use contracts::domain::a004_order::aggregate::{OrderSearch, OrderSearchType};

use crate::shared::query_string::{build_query, current_query, parse_params, replace_query};

/// Parse `?search=..&type=..&date_from=..&date_to=..`
pub fn parse_order_search(query: &str) -> OrderSearch {
    let params = parse_params(query);
    let param = |key: &str| params.get(key).cloned().unwrap_or_default();
    OrderSearch {
        search: param("search"),
        search_type: params
            .get("type")
            .map(|t| OrderSearchType::from_code(t))
            .unwrap_or_default(),
        date_from: param("date_from"),
        date_to: param("date_to"),
    }
}

/// Query string for the filters; the type is only kept next to a search
pub fn order_search_query(search: &OrderSearch) -> String {
    let search_type = if search.search.is_empty() {
        ""
    } else {
        search.search_type.code()
    };
    build_query(&[
        ("search", search.search.as_str()),
        ("type", search_type),
        ("date_from", search.date_from.as_str()),
        ("date_to", search.date_to.as_str()),
    ])
}

pub fn read_order_search_from_location() -> OrderSearch {
    parse_order_search(&current_query())
}

pub fn write_order_search_to_location(search: &OrderSearch) {
    replace_query(&order_search_query(search));
}
