//! Root Dioxus application component
//!
//! This module contains the main App component that serves as the root of the UI tree.

use crate::analysis::RenderedResult;
use crate::client::BackendClient;
use crate::speech::{AudioCoordinator, SpeechConfig};
use crate::storage::settings::load_settings;
use crate::types::Session;
use crate::ui::Layout;
use dioxus::prelude::*;
use std::sync::Arc;

/// Global application state shared across components
#[derive(Clone)]
pub struct AppState {
    pub session: Signal<Session>,
    /// Contents of the statement box
    pub input: Signal<String>,
    /// Result card contents; `None` until the first analysis
    pub result: Signal<Option<RenderedResult>>,
    /// Blocking notification waiting to be dismissed
    pub notice: Signal<Option<String>>,
    pub client: Arc<BackendClient>,
    pub audio: Arc<AudioCoordinator>,
}

impl AppState {
    pub fn new() -> Self {
        let settings = load_settings();
        tracing::info!(theme = %settings.theme, "AppState initialized");
        Self {
            session: Signal::new(Session::new(settings.theme)),
            input: Signal::new(String::new()),
            result: Signal::new(None),
            notice: Signal::new(None),
            client: Arc::new(BackendClient::from_env()),
            audio: Arc::new(AudioCoordinator::from_config(&SpeechConfig::default())),
        }
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(AppState::new);

    rsx! {
        Layout {}
    }
}
