//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (clock, route guards)
//! from session and page logic to keep those testable off the browser.

pub mod auth;
pub mod clock;
