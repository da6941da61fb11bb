//! Confirm-before-submit guard for destructive forms (delete buttons).

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlFormElement;

use super::components::ui::Button;

pub const DEFAULT_DELETE_MESSAGE: &str = "Öçürmek isleýärsiňizmi?";

/// Blocking yes/no question to the user.
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

/// Something that can be submitted, normally an HTML form.
pub trait SubmitTarget {
    fn submit(&self);
}

/// `window.confirm`; a missing window or a JS error counts as "no".
pub struct BrowserConfirm;

impl ConfirmPrompt for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .map(|w| w.confirm_with_message(message).unwrap_or(false))
            .unwrap_or(false)
    }
}

impl SubmitTarget for HtmlFormElement {
    fn submit(&self) {
        if let Err(e) = HtmlFormElement::submit(self) {
            log::error!("form submit failed: {:?}", e);
        }
    }
}

/// Ask `message` (or the default question) and submit `form` only on "yes".
///
/// Always returns `false` so the caller can suppress the default action:
/// when confirmed, the submission has already been made here.
pub fn confirm_submit<P, T>(prompt: &P, form: &T, message: Option<&str>) -> bool
where
    P: ConfirmPrompt + ?Sized,
    T: SubmitTarget + ?Sized,
{
    let message = message
        .filter(|m| !m.is_empty())
        .unwrap_or(DEFAULT_DELETE_MESSAGE);
    if prompt.confirm(message) {
        form.submit();
    }
    false
}

/// POST form with a single danger button, guarded by a confirmation.
#[component]
pub fn ConfirmDeleteForm(
    /// Form action, e.g. `/subscribers/5/delete`
    action: String,
    /// Question shown before submitting
    #[prop(optional)]
    message: Option<String>,
    children: Children,
) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(form) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlFormElement>().ok())
        else {
            return;
        };
        confirm_submit(&BrowserConfirm, &form, message.as_deref());
    };

    view! {
        <form method="post" action=action class="inline-form" on:submit=on_submit>
            <Button variant="danger" size="sm" button_type="submit">
                {children()}
            </Button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct FakePrompt {
        answer: bool,
        asked: RefCell<Vec<String>>,
    }

    impl FakePrompt {
        fn new(answer: bool) -> Self {
            Self {
                answer,
                asked: RefCell::new(Vec::new()),
            }
        }
    }

    impl ConfirmPrompt for FakePrompt {
        fn confirm(&self, message: &str) -> bool {
            self.asked.borrow_mut().push(message.to_string());
            self.answer
        }
    }

    #[derive(Default)]
    struct FakeForm {
        submitted: Cell<u32>,
    }

    impl SubmitTarget for FakeForm {
        fn submit(&self) {
            self.submitted.set(self.submitted.get() + 1);
        }
    }

    #[test]
    fn test_declined_never_submits() {
        let prompt = FakePrompt::new(false);
        let form = FakeForm::default();
        assert!(!confirm_submit(&prompt, &form, Some("Delete order?")));
        assert_eq!(form.submitted.get(), 0);
        assert_eq!(prompt.asked.borrow().as_slice(), ["Delete order?"]);
    }

    #[test]
    fn test_accepted_submits_exactly_once() {
        let prompt = FakePrompt::new(true);
        let form = FakeForm::default();
        assert!(!confirm_submit(&prompt, &form, Some("Delete order?")));
        assert_eq!(form.submitted.get(), 1);
    }

    #[test]
    fn test_default_message() {
        let prompt = FakePrompt::new(false);
        let form = FakeForm::default();
        confirm_submit(&prompt, &form, None);
        confirm_submit(&prompt, &form, Some(""));
        assert_eq!(
            prompt.asked.borrow().as_slice(),
            [DEFAULT_DELETE_MESSAGE, DEFAULT_DELETE_MESSAGE]
        );
    }
}
