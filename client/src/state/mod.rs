//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`upload`, `chat`) so components depend on
//! small focused models. Each is provided as an `RwSignal` context by `App`.

pub mod chat;
pub mod upload;
