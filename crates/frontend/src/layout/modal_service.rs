use leptos::prelude::*;
use std::collections::BTreeSet;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::shared::dom_ids::{CLASS_MODAL_OVERLAY, CLASS_OPEN_MARKER};

/// Which modals are currently visible.
///
/// A modal is visible when its id is in the set; the frame renders that as
/// the `active` class on the overlay element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalRegistry {
    open: BTreeSet<String>,
}

impl ModalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, id: &str) {
        self.open.insert(id.to_string());
    }

    pub fn close(&mut self, id: &str) {
        self.open.remove(id);
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    /// Click-outside handling: a click that lands on an overlay closes that
    /// overlay's modal. Returns true if something was closed.
    pub fn dismiss_overlay(&mut self, target_id: &str, target_is_overlay: bool) -> bool {
        if !target_is_overlay {
            return false;
        }
        self.open.remove(target_id)
    }
}

/// Сервис для централизованного управления модальными окнами
#[derive(Clone, Copy)]
pub struct ModalService {
    registry: RwSignal<ModalRegistry>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            registry: RwSignal::new(ModalRegistry::new()),
        }
    }

    /// Показать модальное окно
    pub fn open(&self, id: &str) {
        log::debug!("modal open: {}", id);
        self.registry.update(|r| r.open(id));
    }

    /// Скрыть модальное окно
    pub fn close(&self, id: &str) {
        log::debug!("modal close: {}", id);
        self.registry.update(|r| r.close(id));
    }

    /// Проверить, открыто ли модальное окно (reactive)
    pub fn is_open(&self, id: &str) -> bool {
        self.registry.with(|r| r.is_open(id))
    }

    /// Bind the single document-level click listener that dismisses a modal
    /// when the click lands on its overlay rather than on the dialog surface.
    ///
    /// Call once per page load.
    pub fn install_overlay_dismiss(&self) {
        let svc = *self;
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let Some(target) = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            else {
                return;
            };
            let is_overlay = target.class_list().contains(CLASS_MODAL_OVERLAY);
            if !is_overlay {
                return;
            }
            // Markup this service does not own still loses its marker.
            let _ = target.class_list().remove_1(CLASS_OPEN_MARKER);

            let id = target.id();
            let mut closed = false;
            svc.registry.update(|r| closed = r.dismiss_overlay(&id, is_overlay));
            if closed {
                log::debug!("modal dismissed by overlay click: {}", id);
            }
        }) as Box<dyn FnMut(_)>);

        match web_sys::window().and_then(|w| w.document()) {
            Some(document) => {
                if let Err(e) = document
                    .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
                {
                    log::warn!("failed to bind overlay click listener: {:?}", e);
                }
                closure.forget();
            }
            None => log::warn!("no document, overlay click listener not bound"),
        }
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

/// Access the `ModalService` provided by `App`.
pub fn use_modals() -> ModalService {
    use_context::<ModalService>().expect("ModalService not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_then_close_leaves_marker_absent() {
        let mut registry = ModalRegistry::new();
        registry.open("edit-subscriber-modal");
        assert!(registry.is_open("edit-subscriber-modal"));
        registry.close("edit-subscriber-modal");
        assert!(!registry.is_open("edit-subscriber-modal"));
    }

    #[test]
    fn test_open_close_are_idempotent() {
        let mut registry = ModalRegistry::new();
        registry.open("payment-modal");
        registry.open("payment-modal");
        registry.close("payment-modal");
        assert!(!registry.is_open("payment-modal"));
        registry.close("payment-modal");
        assert_eq!(registry, ModalRegistry::new());
    }

    #[test]
    fn test_modals_are_independent() {
        let mut registry = ModalRegistry::new();
        registry.open("edit-user-modal");
        registry.open("payment-modal");
        registry.close("payment-modal");
        assert!(registry.is_open("edit-user-modal"));
        assert!(!registry.is_open("payment-modal"));
    }

    #[test]
    fn test_overlay_click_closes_any_modal() {
        for id in ["edit-subscriber-modal", "edit-user-modal", "payment-modal"] {
            let mut registry = ModalRegistry::new();
            registry.open(id);
            assert!(registry.dismiss_overlay(id, true));
            assert!(!registry.is_open(id));
        }
    }

    #[test]
    fn test_click_inside_dialog_keeps_modal_open() {
        let mut registry = ModalRegistry::new();
        registry.open("payment-modal");
        assert!(!registry.dismiss_overlay("payment-modal", false));
        assert!(registry.is_open("payment-modal"));
    }
}
