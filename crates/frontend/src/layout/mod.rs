pub mod header;
pub mod modal_service;

pub use modal_service::{use_modals, ModalService};

use leptos::prelude::*;

/// Application shell: navigation bar on top, routed page below.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
