//! UI components for FactLens
//!
//! This module contains all user interface components built with Dioxus.

pub mod components;
pub mod detector;

use crate::app::AppState;
use crate::ui::components::notice::NoticeDialog;
use crate::ui::detector::DetectorView;
use dioxus::prelude::*;

/// Main Application Layout
#[component]
pub fn Layout() -> Element {
    let app_state = use_context::<AppState>();
    let session = app_state.session.read().clone();
    let theme = session.theme();
    let (theme_icon, theme_label) = theme.toggle_button();
    let menu_class = if session.menu_open() { "nav-menu active" } else { "nav-menu" };

    let theme_state = app_state.clone();
    let menu_state = app_state.clone();

    rsx! {
        // Theme wrapper
        div {
            "data-theme": "{theme}",
            class: "app-shell",

            link { rel: "stylesheet", href: "assets/styles.css" }

            header {
                class: "app-header",

                div {
                    class: "brand",
                    span { class: "brand-icon", "🛡️" }
                    span { class: "brand-name", "FactLens" }
                }

                button {
                    class: "menu-toggle",
                    title: "Menu",
                    onclick: move |_| menu_state.toggle_menu(),
                    "☰"
                }

                nav {
                    class: "{menu_class}",
                    a { href: "#detector", "Detector" }
                    a { href: "#how-it-works", "How it works" }
                    button {
                        class: "theme-toggle",
                        onclick: move |_| theme_state.toggle_theme(),
                        span { "{theme_icon}" }
                        span { "{theme_label}" }
                    }
                }
            }

            main {
                class: "app-main",
                DetectorView {}

                section {
                    id: "how-it-works",
                    class: "how-it-works",
                    h2 { "How it works" }
                    p {
                        "Paste a headline, a claim or a link, speak it, or upload a screenshot. "
                        "The statement is checked against web sources and comes back with a verdict, "
                        "an explanation and a credibility score out of 5."
                    }
                }
            }

            NoticeDialog {}
        }
    }
}
