//! Detector view
//!
//! The statement form and the result card below it.

pub mod input;
pub mod result;

use crate::app::AppState;
use dioxus::prelude::*;
use input::InputPanel;
use result::ResultCard;

#[component]
pub fn DetectorView() -> Element {
    let app_state = use_context::<AppState>();
    let rendered = app_state.result.read().clone();

    rsx! {
        section {
            id: "detector",
            class: "detector",

            h1 { class: "detector-title", "Fake News Detector" }
            p {
                class: "detector-subtitle",
                "Check a claim before you share it."
            }

            InputPanel {}

            if let Some(rendered) = rendered {
                ResultCard { rendered }
            }
        }
    }
}
