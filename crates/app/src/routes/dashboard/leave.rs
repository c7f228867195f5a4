use dioxus::prelude::*;
use shared_types::LeaveBalance;
use shared_ui::{Card, CardContent, CardHeader, CardTitle, Meter};

const ALLOWANCES: &[(&str, &str, u32, u32)] = &[
    ("Annual Leave", "\u{1F3D6}\u{FE0F}", 12, 30),
    ("Sick Leave", "\u{1F3E5}", 3, 12),
    ("Personal Leave", "\u{1F464}", 5, 15),
    ("Emergency Leave", "\u{1F6A8}", 1, 5),
];

/// Static leave allowances with their icons.
pub fn leave_balances() -> Vec<(&'static str, LeaveBalance)> {
    ALLOWANCES
        .iter()
        .map(|&(kind, icon, used, total)| {
            (
                icon,
                LeaveBalance {
                    kind: kind.to_string(),
                    used,
                    total,
                },
            )
        })
        .collect()
}

#[component]
pub fn LeaveBalances() -> Element {
    rsx! {
        Card { class: "leave-card",
            CardHeader {
                CardTitle { "\u{1F3D6}\u{FE0F} Leave Balance" }
            }
            CardContent {
                div { class: "leave-list",
                    for (icon, balance) in leave_balances() {
                        div { key: "{balance.kind}", class: "leave-row",
                            div { class: "leave-row-header",
                                span { class: "leave-kind", "{icon} {balance.kind}" }
                                span { class: "leave-remaining", {format!("{} days left", balance.remaining())} }
                            }
                            Meter {
                                label: "Used",
                                used: f64::from(balance.used),
                                total: f64::from(balance.total),
                                unit: "days",
                            }
                        }
                    }
                }
            }
        }
    }
}
