//! Notice dialog
//!
//! Blocking notification for rejected input and missing capabilities. The
//! page is inert behind it until the user dismisses it.

use crate::app::AppState;
use dioxus::prelude::*;

#[component]
pub fn NoticeDialog() -> Element {
    let app_state = use_context::<AppState>();
    let Some(message) = app_state.notice.read().clone() else {
        return rsx! {};
    };

    rsx! {
        // Backdrop
        div {
            class: "notice-backdrop",

            div {
                class: "notice-dialog",
                role: "alertdialog",

                div {
                    class: "notice-header",
                    span { class: "notice-icon", "⚠️" }
                    h2 { "Notice" }
                }

                p { class: "notice-message", "{message}" }

                div {
                    class: "notice-footer",
                    button {
                        class: "notice-ok",
                        autofocus: true,
                        onclick: move |_| app_state.dismiss_notice(),
                        "OK"
                    }
                }
            }
        }
    }
}
