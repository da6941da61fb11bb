//! Keeping list filters in the address bar.
//!
//! The server reads the same parameters, so a reload shows the same list.

use std::collections::BTreeMap;

use wasm_bindgen::JsValue;
use web_sys::window;

/// Parameters of a query string; a leading `?` is allowed
pub fn parse_params(query: &str) -> BTreeMap<String, String> {
    serde_qs::from_str(query.trim_start_matches('?')).unwrap_or_default()
}

/// Query string from the non-empty parameters
pub fn build_query(params: &[(&str, &str)]) -> String {
    let params: BTreeMap<&str, &str> = params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .copied()
        .collect();
    if params.is_empty() {
        return String::new();
    }
    serde_qs::to_string(&params).unwrap_or_default()
}

pub fn current_query() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Replace the query of the current URL without reloading
pub fn replace_query(query: &str) {
    let Some(window) = window() else {
        return;
    };
    let path = window.location().pathname().unwrap_or_default();
    let url = if query.is_empty() {
        path
    } else {
        format!("{}?{}", path, query)
    };
    match window.history() {
        Ok(history) => {
            if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&url)) {
                log::warn!("failed to update the address bar to {}: {:?}", url, e);
            }
        }
        Err(e) => log::warn!("history is unavailable: {:?}", e),
    }
}
