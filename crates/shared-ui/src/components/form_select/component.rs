use dioxus::prelude::*;

/// Native `<select>` over a fixed list of `(value, label)` pairs.
#[component]
pub fn FormSelect(
    #[props(default)] id: String,
    value: String,
    options: Vec<(String, String)>,
    #[props(default)] onchange: Option<EventHandler<String>>,
    #[props(default)] label: String,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", r#for: "{id}", "{label}" }
            }
            select {
                id: "{id}",
                class: "form-select",
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt.value());
                    }
                },
                for (key, text) in options {
                    option {
                        key: "{key}",
                        value: "{key}",
                        selected: key == value,
                        "{text}"
                    }
                }
            }
        }
    }
}
