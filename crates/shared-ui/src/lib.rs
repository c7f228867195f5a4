//! Reusable Dioxus components for the employee dashboard. Each component
//! ships its own stylesheet next to it.

pub mod components;

pub use components::*;
