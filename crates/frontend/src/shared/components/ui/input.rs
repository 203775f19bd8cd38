use leptos::prelude::*;

/// Text input with label, validation state and inline error message
#[component]
pub fn Input(
    /// Visible label (reactive so it follows the interface language)
    #[prop(into)]
    label: Signal<String>,
    /// ID for the input element
    #[prop(into)]
    id: String,
    /// Form field name; the wrapper and error ids derive from it
    #[prop(into)]
    name: String,
    /// Input type: "text" (default), "email", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Autocomplete attribute
    #[prop(optional, into)]
    autocomplete: MaybeProp<String>,
    /// Field value, owned by the caller
    value: RwSignal<String>,
    /// Translated error text; `Some` marks the field invalid
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Whether the field has been validated successfully
    #[prop(into)]
    valid: Signal<bool>,
    /// Blur event handler (validation hook)
    #[prop(optional, into)]
    on_blur: Option<Callback<()>>,
    /// Input event handler, fired after the value signal updates
    #[prop(optional, into)]
    on_input: Option<Callback<()>>,
) -> impl IntoView {
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_autocomplete = move || autocomplete.get().unwrap_or_default();
    let field_id = format!("cf-field-{name}");
    let error_id = format!("cf-err-{name}");

    view! {
        <div
            id=field_id
            class="cf-field"
            class=("cf-field--invalid", move || error.get().is_some())
            class=("cf-field--valid", move || valid.get())
        >
            <label class="cf-label" for=id.clone()>{move || label.get()}</label>
            <input
                id=id
                class="cf-input"
                type=input_t
                name=name
                autocomplete=input_autocomplete
                aria-describedby=error_id.clone()
                aria-invalid=move || {
                    if error.get().is_some() {
                        Some("true")
                    } else if valid.get() {
                        Some("false")
                    } else {
                        None
                    }
                }
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    if let Some(handler) = on_input {
                        handler.run(());
                    }
                }
                on:blur=move |_| {
                    if let Some(handler) = on_blur {
                        handler.run(());
                    }
                }
            />
            <p class="cf-error" id=error_id>{move || error.get().unwrap_or_default()}</p>
        </div>
    }
}
