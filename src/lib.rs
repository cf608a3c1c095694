//! FactLens Library
//!
//! Core library for the FactLens fake news detector: reply parsing and
//! rendering, the backend client, speech coordination and the Dioxus UI.

pub mod analysis;
pub mod app;
pub mod client;
pub mod controller;
pub mod speech;
pub mod storage;
pub mod types;
pub mod ui;

/// Safely truncate a string at a char boundary, never panics.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    // Walk backwards from max_bytes to find a valid char boundary
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
