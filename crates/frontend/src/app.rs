use crate::layout::ModalService;
use crate::routes::routes::AppRoutes;
use crate::shared::page_data::PageData;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Globals rendered by the server: prices, subscribers, users.
    provide_context(PageData::from_window());

    // One registry for every modal on the page, plus the overlay-click listener.
    let modals = ModalService::new();
    modals.install_overlay_dismiss();
    provide_context(modals);

    view! {
        <AppRoutes />
    }
}
