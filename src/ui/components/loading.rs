//! Loading indicators

use dioxus::prelude::*;

/// Inline ring shown inside a busy button. Inherits the button's text color.
#[component]
pub fn Spinner(#[props(default = 16)] size: u32) -> Element {
    rsx! {
        span {
            class: "spinner",
            role: "status",
            "aria-label": "Loading",
            style: "width: {size}px; height: {size}px;",
        }
    }
}
