use dioxus::prelude::*;
use dioxus_primitives::alert_dialog as prim;

/// Modal yes/no prompt built on the alert dialog primitive.
///
/// `on_confirm` fires from the confirm button; cancel, escape and clicking
/// outside all route through `on_open_change(false)`.
#[component]
pub fn ConfirmDialog(
    open: bool,
    on_open_change: EventHandler<bool>,
    on_confirm: EventHandler<MouseEvent>,
    title: String,
    #[props(default)] description: String,
    #[props(default = "Confirm".to_string())] confirm_label: String,
    #[props(default = "Cancel".to_string())] cancel_label: String,
    #[props(default = false)] destructive: bool,
) -> Element {
    let confirm_class = if destructive {
        "confirm-dialog-confirm destructive"
    } else {
        "confirm-dialog-confirm"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::AlertDialogRoot {
            class: "confirm-dialog-overlay",
            open: open,
            on_open_change: move |v| on_open_change.call(v),
            prim::AlertDialogContent {
                class: "confirm-dialog".to_string(),
                prim::AlertDialogTitle { class: "confirm-dialog-title", "{title}" }
                if !description.is_empty() {
                    prim::AlertDialogDescription {
                        class: "confirm-dialog-description",
                        "{description}"
                    }
                }
                prim::AlertDialogActions { class: "confirm-dialog-actions",
                    prim::AlertDialogCancel { class: "confirm-dialog-cancel", "{cancel_label}" }
                    prim::AlertDialogAction {
                        class: confirm_class,
                        on_click: move |evt| on_confirm.call(evt),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
