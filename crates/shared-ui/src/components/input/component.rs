use dioxus::prelude::*;

/// Labelled text input with an inline validation message.
///
/// While `error` is set the input is marked `aria-invalid` and the message
/// is rendered beneath it.
#[component]
pub fn TextField(
    /// Used as both `id` and `name` on the input.
    name: String,
    label: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] autocomplete: String,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let invalid = error.is_some();
    let base = vec![
        Attribute::new("class", "text-field-input", None, false),
        Attribute::new(
            "aria-invalid",
            if invalid { "true" } else { "false" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let error_id = format!("{name}-error");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "text-field", "data-invalid": if invalid { "true" } else { "false" },
            label { class: "text-field-label", r#for: "{name}", "{label}" }
            input {
                id: "{name}",
                name: "{name}",
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                autocomplete: autocomplete,
                disabled: disabled,
                "aria-describedby": if invalid { error_id.clone() } else { String::new() },
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if let Some(message) = error {
                span { id: "{error_id}", class: "text-field-error", role: "alert", "{message}" }
            }
        }
    }
}
