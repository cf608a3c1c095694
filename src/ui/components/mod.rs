//! Shared UI components
//!
//! Small pieces reused across views: the loading spinner and the notice dialog.

pub mod loading;
pub mod notice;
