//! Shared domain types

pub mod locale;
pub mod session;

pub use locale::Locale;
pub use session::{validate_message, InputError, Session, Theme};
