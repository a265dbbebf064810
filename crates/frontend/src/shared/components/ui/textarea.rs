use leptos::prelude::*;

/// Textarea component bound to a string signal
#[component]
pub fn Textarea(
    /// Form field name submitted with the form
    #[prop(into)]
    name: String,
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(3);

    view! {
        <textarea
            class=move || format!("form__textarea {}", additional_class())
            name=name
            prop:value=move || value.get()
            placeholder=textarea_placeholder
            required=required
            rows=textarea_rows
            on:input=move |ev| {
                if let Some(handler) = on_input {
                    handler.run(event_target_value(&ev));
                }
            }
        ></textarea>
    }
}
