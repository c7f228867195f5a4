use dioxus::prelude::*;
use dioxus_primitives::progress as prim;

#[component]
pub fn Progress(mut props: prim::ProgressProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "progress", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Progress { ..props }
    }
}

#[component]
pub fn ProgressIndicator(mut props: prim::ProgressIndicatorProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "progress-indicator", None, false));

    rsx! {
        prim::ProgressIndicator { ..props }
    }
}

/// `used` of `total` as a percentage clamped to 0..=100. A zero total reads
/// as empty.
pub fn ratio_percent(used: f64, total: f64) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }
    (used / total * 100.0).clamp(0.0, 100.0)
}

/// Labelled progress bar with a `used / total` caption.
#[component]
pub fn Meter(label: String, used: f64, total: f64, #[props(default)] unit: String) -> Element {
    let pct = ratio_percent(used, total);
    let caption = if unit.is_empty() {
        format!("{used} / {total}")
    } else {
        format!("{used} / {total} {unit}")
    };

    rsx! {
        div { class: "meter",
            div { class: "meter-label-row",
                span { class: "meter-label", "{label}" }
                span { class: "meter-value", "{caption}" }
            }
            Progress {
                value: Some(pct),
                ProgressIndicator {}
            }
        }
    }
}
