use dioxus::prelude::*;

/// Bordered surface that groups related content.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-header", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        header {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-title", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        h3 {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Direction of a metric's change since the previous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delta {
    Up,
    Down,
}

impl Delta {
    pub fn arrow(&self) -> &'static str {
        match self {
            Delta::Up => "\u{2191}",
            Delta::Down => "\u{2193}",
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Delta::Up => "up",
            Delta::Down => "down",
        }
    }
}

/// Headline number with a label and an optional change indicator.
///
/// `icon` is rendered in a tinted square to the left of the value.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] icon: Option<Element>,
    #[props(default)] hint: Option<String>,
    #[props(default)] delta: Option<(Delta, String)>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "card stat-card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section {
            ..merged,
            if let Some(icon) = icon {
                div { class: "stat-card-icon", {icon} }
            }
            div { class: "stat-card-body",
                span { class: "stat-card-label", "{label}" }
                strong { class: "stat-card-value", "{value}" }
                if let Some((direction, change)) = delta {
                    span {
                        class: "stat-card-delta",
                        "data-direction": direction.as_str(),
                        "{direction.arrow()} {change}"
                    }
                }
                if let Some(hint) = hint {
                    span { class: "stat-card-hint", "{hint}" }
                }
            }
        }
    }
}
