//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns from component logic to improve
//! reuse and testability. `browser` is the only module that touches the DOM.

pub mod browser;
pub mod format;
pub mod intake;
