//! Platform capability abstraction trait definition

mod clipboard;

pub use clipboard::Clipboard;
