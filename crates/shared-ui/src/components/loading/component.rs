use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinnerSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl SpinnerSize {
    /// Edge length in pixels.
    pub fn pixels(&self) -> u32 {
        match self {
            SpinnerSize::Small => 20,
            SpinnerSize::Medium => 40,
            SpinnerSize::Large => 64,
        }
    }
}

/// Rotating ring with an optional caption.
#[component]
pub fn Spinner(
    #[props(default)] size: SpinnerSize,
    #[props(default)] message: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "spinner", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let px = size.pixels();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            role: "status",
            "aria-live": "polite",
            ..merged,
            span {
                class: "spinner-ring",
                style: "width: {px}px; height: {px}px;",
            }
            if let Some(message) = message {
                p { class: "spinner-message", "{message}" }
            }
        }
    }
}

/// Centered spinner that fills the viewport, shown while the session is
/// being restored.
#[component]
pub fn FullPageLoader(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        div { class: "full-page-loader",
            Spinner { size: SpinnerSize::Large, message: Some(message) }
        }
    }
}
