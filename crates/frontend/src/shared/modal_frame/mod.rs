use leptos::prelude::*;

use crate::layout::modal_service::use_modals;
use crate::shared::dom_ids::CLASS_MODAL_OVERLAY;

/// Modal frame container (overlay + dialog surface).
///
/// The overlay element carries the modal `id` and the `modal-overlay` class;
/// it gets `active` while the modal is open in `ModalService`. Clicks on the
/// overlay itself are handled by the document listener the service installs.
#[component]
pub fn ModalFrame(
    /// DOM id of the overlay, e.g. `edit-subscriber-modal`
    id: &'static str,
    /// Header title
    #[prop(into)]
    title: String,
    /// Extra class for the dialog surface (`div.modal`)
    #[prop(optional)]
    modal_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let modals = use_modals();

    let surface_class = match modal_class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };

    view! {
        <div id=id class=CLASS_MODAL_OVERLAY class:active=move || modals.is_open(id)>
            <div class=surface_class>
                <div class="modal-header">
                    <h3 class="modal-title">{title}</h3>
                    <button type="button" class="modal-close" on:click=move |_| modals.close(id)>
                        "×"
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
