//! PageFrame: standard root wrapper for every routed page.
//!
//! Usage:
//! ```ignore
//! use crate::shared::page_frame::PageFrame;
//! use crate::shared::page_standard::PAGE_CAT_LIST;
//!
//! #[component]
//! pub fn MyList() -> impl IntoView {
//!     view! {
//!         <PageFrame page_id="a001_subscriber--list" category=PAGE_CAT_LIST title="Müşderiler">
//!             <div class="page__content">...</div>
//!         </PageFrame>
//!     }
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

fn page_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    }
}

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Heading of the page
    title: &'static str,
    children: Children,
) -> impl IntoView {
    let class = page_class(category);

    view! {
        <div id=page_id class=class data-page-category=category>
            <div class="page__header">
                <h1 class="page__title">{title}</h1>
            </div>
            <div class="page__content">
                {children()}
            </div>
        </div>
    }
}
