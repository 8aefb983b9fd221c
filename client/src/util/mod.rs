//! Browser helpers shared across the desk UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser APIs (meta tags, alerts, clock) from page
//! and component logic; each has a native fallback so tests run off-browser.

pub mod clock;
pub mod csrf;
pub mod notify;
