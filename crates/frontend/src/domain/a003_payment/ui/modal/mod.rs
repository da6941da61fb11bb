pub mod view_model;

pub use view_model::PaymentViewModel;

use contracts::shared::form_target::FormTarget;
use leptos::prelude::*;

use crate::layout::modal_service::use_modals;
use crate::shared::components::ui::{Button, Input};
use crate::shared::dom_ids::{
    MODAL_PAYMENT, PAYMENT_CURRENT_DEBT, PAYMENT_SUBSCRIBER_ID, PAYMENT_SUBSCRIBER_NAME,
};
use crate::shared::modal_frame::ModalFrame;

#[component]
pub fn PaymentModal(vm: PaymentViewModel) -> impl IntoView {
    let modals = use_modals();

    view! {
        <ModalFrame id=MODAL_PAYMENT title="Töleg kabul et">
            <form method="post" action=FormTarget::Payment.action()>
                <input
                    type="hidden"
                    id=PAYMENT_SUBSCRIBER_ID
                    name="subscriber_id"
                    prop:value=move || vm.subscriber_id()
                />
                <dl class="payment-summary">
                    <dt>"Müşderi"</dt>
                    <dd id=PAYMENT_SUBSCRIBER_NAME>{move || vm.subscriber_name()}</dd>
                    <dt>"Häzirki bergi"</dt>
                    <dd id=PAYMENT_CURRENT_DEBT>{move || vm.debt_label()}</dd>
                </dl>
                <Input
                    name="amount"
                    label="Mukdary (TMT)"
                    input_type="number"
                    min="0"
                    step="0.01"
                    value=vm.amount
                    on_input=Callback::new(move |v: String| vm.amount.set(v))
                    required=true
                />
                <div class="form-actions">
                    <Button
                        variant="secondary"
                        on_click=Callback::new(move |_| modals.close(MODAL_PAYMENT))
                    >
                        "Ýatyr"
                    </Button>
                    <Button button_type="submit">"Tölegi goş"</Button>
                </div>
            </form>
        </ModalFrame>
    }
}
