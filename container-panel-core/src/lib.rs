//! Container Panel Core Library
//!
//! Provides the platform-independent logic for the container control panel:
//! - Signup form validation (Validation rules)
//! - Container table filtering (Live filter)
//! - Clipboard capability abstraction
//! - Timestamp display helpers
//!
//! This library is UI-independent; the terminal front end lives in
//! `container-panel-tui` and consumes these types through plain function
//! calls and the trait in [`traits`].

pub mod error;
pub mod filter;
pub mod traits;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use traits::Clipboard;
