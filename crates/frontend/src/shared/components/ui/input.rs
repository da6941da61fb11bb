use leptos::prelude::*;

use crate::shared::dom_ids::CLASS_FORM_CONTROL;

/// Labelled text input that takes part in native form submission.
///
/// `value` is written to the DOM property, so repopulating the form always
/// shows the new value even after the user has typed into the field.
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Form field name
    #[prop(into)]
    name: String,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "password", "number", "hidden"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
    /// ID for the input element
    #[prop(optional)]
    id: Option<&'static str>,
    /// Extra attributes for numeric inputs
    #[prop(optional, into)]
    min: MaybeProp<String>,
    #[prop(optional, into)]
    step: MaybeProp<String>,
) -> impl IntoView {
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="form-group">
            {move || label.get().map(|l| view! {
                <label class="form-label" for=id>
                    {l}
                </label>
            })}
            <input
                id=id
                name=name
                class=CLASS_FORM_CONTROL
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                required=required
                min=move || min.get()
                step=move || step.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
