//! Session state
//!
//! Everything the detector page tracks between events: the selected
//! language, the theme and the activity flags that drive the controls.

use crate::types::locale::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// UI color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Icon and label of the toggle button, which names the theme it switches to
    pub fn toggle_button(self) -> (&'static str, &'static str) {
        match self {
            Theme::Light => ("🌙", "Dark"),
            Theme::Dark => ("☀️", "Light"),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejected user input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a URL or text to analyze")]
    Empty,
}

/// Trim the statement to analyze, rejecting blank input
pub fn validate_message(input: &str) -> Result<String, InputError> {
    let message = input.trim();
    if message.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(message.to_string())
}

/// Mutable state of one detector session
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    locale: Locale,
    theme: Theme,
    analyzing: bool,
    listening: bool,
    speaking: bool,
    narration_enabled: bool,
    menu_open: bool,
}

impl Session {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme and return the new one
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        self.theme
    }

    /// True while a request is in flight; the Analyze button is disabled.
    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    pub fn begin_analysis(&mut self) {
        self.analyzing = true;
    }

    pub fn finish_analysis(&mut self) {
        self.analyzing = false;
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn set_listening(&mut self, listening: bool) {
        self.listening = listening;
    }

    pub fn is_speaking(&self) -> bool {
        self.speaking
    }

    pub fn set_speaking(&mut self, speaking: bool) {
        self.speaking = speaking;
    }

    pub fn narration_enabled(&self) -> bool {
        self.narration_enabled
    }

    /// Flip the narration toggle and return the new value
    pub fn toggle_narration(&mut self) -> bool {
        self.narration_enabled = !self.narration_enabled;
        self.narration_enabled
    }

    /// Narrate results only when enabled and the locale allows it
    pub fn should_narrate(&self) -> bool {
        self.narration_enabled && self.locale.supports_narration()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}
