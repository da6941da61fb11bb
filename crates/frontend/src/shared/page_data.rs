//! Data the server renders into the page as window globals.
//!
//! Every navigation is a full page load, so each page gets the globals it
//! needs. `window.currentPrices` is always expected; the lists are only
//! present on the pages that show them.

use contracts::domain::a001_subscriber::aggregate::SubscriberDto;
use contracts::domain::a002_price::aggregate::{PriceRow, PriceTable};
use contracts::domain::a004_order::aggregate::OrderDto;
use contracts::shared::page_json::decode_page_global;
use contracts::system::users::User;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;

use super::dom_ids::{
    GLOBAL_ORDERS, GLOBAL_PRICES, GLOBAL_PRICE_ROWS, GLOBAL_SUBSCRIBERS, GLOBAL_USERS,
};

#[derive(Debug, Clone, Default)]
pub struct PageData {
    pub prices: PriceTable,
    pub price_rows: Vec<PriceRow>,
    pub subscribers: Vec<SubscriberDto>,
    pub orders: Vec<OrderDto>,
    pub users: Vec<User>,
}

impl PageData {
    /// Read all known globals; anything missing or malformed becomes empty
    pub fn from_window() -> Self {
        let price_rows: Vec<PriceRow> = read_global(GLOBAL_PRICE_ROWS);
        let mut prices: PriceTable = read_global(GLOBAL_PRICES);
        if prices.is_empty() && !price_rows.is_empty() {
            prices = PriceTable::from_rows(&price_rows);
        }
        let data = Self {
            prices,
            price_rows,
            subscribers: read_global(GLOBAL_SUBSCRIBERS),
            orders: read_global(GLOBAL_ORDERS),
            users: read_global(GLOBAL_USERS),
        };
        log::debug!(
            "page data: {} subscribers, {} orders, {} users, prices {}",
            data.subscribers.len(),
            data.orders.len(),
            data.users.len(),
            if data.prices.is_empty() { "missing" } else { "loaded" }
        );
        data
    }
}

fn read_global<T: DeserializeOwned + Default>(name: &str) -> T {
    let raw = match global_json(name) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(e) => {
            log::warn!("failed to read window.{}: {:?}", name, e);
            return T::default();
        }
    };
    decode_page_global(name, &raw).unwrap_or_else(|e| {
        log::warn!("{:#}", e);
        T::default()
    })
}

/// The global serialized back to JSON text, if it is set
fn global_json(name: &str) -> Result<Option<String>, JsValue> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    Ok(js_sys::JSON::stringify(&value)?.as_string())
}

pub fn use_page_data() -> PageData {
    use_context::<PageData>().expect("PageData not provided in context")
}
